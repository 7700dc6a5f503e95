pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::LambdaConfig;

pub use app::handlers::{LoginHandler, RegisterHandler};
pub use crate::core::{function::FunctionName, invoker::Invoker};
pub use domain::model::{FunctionEvent, FunctionResponse};
pub use utils::error::{AuthError, Result};
