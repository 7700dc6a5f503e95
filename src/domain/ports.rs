use crate::domain::model::{AuthResult, Credentials, FunctionEvent, FunctionResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait CredentialVerifier: Send + Sync {
    fn verify(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = AuthResult> + Send;
}

#[async_trait]
pub trait Handler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle(&self, event: FunctionEvent) -> Result<FunctionResponse>;
}

#[async_trait]
impl Handler for Box<dyn Handler> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn handle(&self, event: FunctionEvent) -> Result<FunctionResponse> {
        (**self).handle(event).await
    }
}
