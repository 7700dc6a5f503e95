use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LIB_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Default directive when `RUST_LOG` is unset: this library and the calling
/// binary log at `level`, everything else stays off.
pub fn default_directives(bin_target: &str, level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    if bin_target == LIB_TARGET {
        format!("{}={}", LIB_TARGET, level)
    } else {
        format!("{}={},{}={}", LIB_TARGET, level, bin_target, level)
    }
}

fn filter_for(bin_target: &str, level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_target, level)))
}

/// Compact human-readable logs on stderr; stdout carries the response document.
pub fn init_cli_logger(bin_target: &str, verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::registry()
        .with(filter_for(bin_target, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger(bin_target: &str) {
    tracing_subscriber::registry()
        .with(filter_for(bin_target, Level::INFO))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json(), // CloudWatch already timestamps each line
        )
        .init();
}
