use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Request body is missing or null")]
    MissingBody,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },
}

impl AuthError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AuthError::MalformedBody(_) | AuthError::MissingBody => {
                "Send a JSON object body such as {\"email\": \"...\", \"password\": \"...\"}"
            }
            AuthError::IoError(_) => "Check that the event file exists and is readable",
            AuthError::SerializationError { .. } => "This is an internal fault, please report it",
            AuthError::ConfigError { .. } => "Check the environment variables and CLI arguments",
            AuthError::UnknownFunction { .. } => "Use one of: loginUser, registerUser",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
