use crate::domain::model::{FunctionEvent, FunctionResponse};
use crate::domain::ports::Handler;
use crate::utils::error::Result;

pub struct Invoker<H: Handler> {
    handler: H,
}

impl<H: Handler> Invoker<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn function_name(&self) -> &'static str {
        self.handler.name()
    }

    pub async fn run(&self, event: FunctionEvent) -> Result<FunctionResponse> {
        let function = self.handler.name();
        tracing::debug!(function, method = %event.http_method, "Invoking function");

        match self.handler.handle(event).await {
            Ok(response) => {
                tracing::info!(function, status = response.status_code, "Function completed");
                Ok(response)
            }
            Err(e) => {
                tracing::error!(function, error = %e, "Function failed");
                Err(e)
            }
        }
    }
}
