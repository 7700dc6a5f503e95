#[cfg(feature = "lambda")]
use auth_functions::core::Handler;
#[cfg(feature = "lambda")]
use auth_functions::utils::logger;
#[cfg(feature = "lambda")]
use auth_functions::{FunctionEvent, FunctionResponse, Invoker, LambdaConfig};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler<H: Handler>(
    invoker: &Invoker<H>,
    event: LambdaEvent<FunctionEvent>,
) -> Result<FunctionResponse, Error> {
    let (payload, context) = event.into_parts();
    tracing::debug!(request_id = %context.request_id, "Received event");

    Ok(invoker.run(payload).await?)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger(env!("CARGO_CRATE_NAME"));

    let config = LambdaConfig::from_env()?;
    tracing::info!(function = %config.function, "Starting auth function");

    let invoker = Invoker::new(config.function.handler());
    let invoker = &invoker;

    run(service_fn(move |event: LambdaEvent<FunctionEvent>| async move {
        function_handler(invoker, event).await
    }))
    .await
}
