use auth_functions::utils::logger;
use auth_functions::{CliConfig, Invoker};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(env!("CARGO_CRATE_NAME"), config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let event = match config.to_event() {
        Ok(event) => event,
        Err(e) => {
            tracing::error!("❌ Could not build event: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let invoker = Invoker::new(config.function.handler());

    match invoker.run(event).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Err(e) => {
            // A hosted function would surface this as a 500
            tracing::error!("❌ {} failed: {}", invoker.function_name(), e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
