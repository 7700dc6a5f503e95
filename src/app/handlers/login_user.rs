use crate::adapters::credentials::StaticCredentials;
use crate::domain::model::{AuthResult, Credentials, FunctionEvent, FunctionResponse};
use crate::domain::ports::{CredentialVerifier, Handler};
use crate::utils::error::Result;

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub struct LoginHandler<V: CredentialVerifier> {
    verifier: V,
}

impl<V: CredentialVerifier> LoginHandler<V> {
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }
}

impl Default for LoginHandler<StaticCredentials> {
    fn default() -> Self {
        Self::new(StaticCredentials::default())
    }
}

#[async_trait::async_trait]
impl<V: CredentialVerifier> Handler for LoginHandler<V> {
    fn name(&self) -> &'static str {
        "loginUser"
    }

    async fn handle(&self, event: FunctionEvent) -> Result<FunctionResponse> {
        if !event.is_post() {
            tracing::debug!("Rejecting method {:?}", event.http_method);
            return Ok(FunctionResponse::method_not_allowed());
        }

        let credentials = Credentials::from_body(event.body.as_deref())?;

        match self.verifier.verify(&credentials).await {
            AuthResult::Success { token } => {
                FunctionResponse::message_with_token(200, LOGIN_SUCCESS, &token)
            }
            AuthResult::Failure => FunctionResponse::message(401, INVALID_CREDENTIALS),
        }
    }
}
