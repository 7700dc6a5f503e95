use crate::utils::error::{AuthError, Result};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;
use std::fmt;

pub const METHOD_POST: &str = "POST";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

/// Request event as delivered by the hosting platform.
///
/// Only `httpMethod` and `body` are read; any other fields the platform
/// attaches (headers, path, query parameters) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl FunctionEvent {
    pub fn new(http_method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            http_method: http_method.into(),
            body,
        }
    }

    pub fn post(body: impl Into<String>) -> Self {
        Self::new(METHOD_POST, Some(body.into()))
    }

    pub fn is_post(&self) -> bool {
        self.http_method == METHOD_POST
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub body: String,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a str>,
}

impl FunctionResponse {
    pub fn method_not_allowed() -> Self {
        Self {
            status_code: 405,
            body: METHOD_NOT_ALLOWED.to_string(),
        }
    }

    pub fn message(status_code: u16, message: &str) -> Result<Self> {
        Self::encode(
            status_code,
            &MessageBody {
                message,
                token: None,
            },
        )
    }

    pub fn message_with_token(status_code: u16, message: &str, token: &str) -> Result<Self> {
        Self::encode(
            status_code,
            &MessageBody {
                message,
                token: Some(token),
            },
        )
    }

    fn encode<T: Serialize>(status_code: u16, payload: &T) -> Result<Self> {
        let body =
            serde_json::to_string(payload).map_err(|e| AuthError::SerializationError {
                message: e.to_string(),
            })?;
        Ok(Self { status_code, body })
    }
}

/// Email and password pulled out of a request body. Lives for one request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Parses a raw request body.
    ///
    /// A missing body or a JSON `null` is an error. Any other JSON value is
    /// accepted: string-valued `email` / `password` members of an object are
    /// taken, everything else reads as absent.
    pub fn from_body(body: Option<&str>) -> Result<Self> {
        let raw = body.ok_or(AuthError::MissingBody)?;
        // Validates the whole document without building it or converting numbers.
        let document: &RawValue = serde_json::from_str(raw)?;
        let text = document.get().trim_start();

        match text.as_bytes().first() {
            Some(b'n') => Err(AuthError::MissingBody),
            Some(b'{') => {
                let fields: BodyFields<'_> = serde_json::from_str(text)?;
                Ok(Self {
                    email: fields.email.and_then(string_member),
                    password: fields.password.and_then(string_member),
                })
            }
            _ => Ok(Self::default()),
        }
    }
}

fn string_member(raw: &RawValue) -> Option<String> {
    let text = raw.get();
    if text.starts_with('"') {
        serde_json::from_str(text).ok()
    } else {
        None
    }
}

/// The two members of a body object that matter, kept as raw JSON text.
/// Every other member is skipped without being decoded.
#[derive(Default)]
struct BodyFields<'a> {
    email: Option<&'a RawValue>,
    password: Option<&'a RawValue>,
}

impl<'de> Deserialize<'de> for BodyFields<'de> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = BodyFields<'de>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut fields = BodyFields::default();
                // Later duplicates win, as with any JSON object parse.
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "email" => fields.email = Some(map.next_value()?),
                        "password" => fields.password = Some(map.next_value()?),
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

// Passwords stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Success { token: String },
    Failure,
}
