use crate::domain::model::{Credentials, FunctionEvent, FunctionResponse};
use crate::domain::ports::Handler;
use crate::utils::error::Result;

pub const REGISTER_SUCCESS: &str = "User registered successfully!";

/// Accepts every well-formed registration. Nothing is stored; the email is
/// only written to the log.
#[derive(Debug, Clone, Default)]
pub struct RegisterHandler;

impl RegisterHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Handler for RegisterHandler {
    fn name(&self) -> &'static str {
        "registerUser"
    }

    async fn handle(&self, event: FunctionEvent) -> Result<FunctionResponse> {
        if !event.is_post() {
            tracing::debug!("Rejecting method {:?}", event.http_method);
            return Ok(FunctionResponse::method_not_allowed());
        }

        let Credentials { email, .. } = Credentials::from_body(event.body.as_deref())?;

        tracing::info!(email = email.as_deref().unwrap_or("undefined"), "Registering user");

        FunctionResponse::message(200, REGISTER_SUCCESS)
    }
}
