use crate::core::function::FunctionName;
use crate::domain::model::{FunctionEvent, METHOD_POST};
use crate::utils::error::{AuthError, Result};
use clap::Parser;
use std::fs;

#[derive(Debug, Clone, Parser)]
#[command(name = "auth-functions")]
#[command(about = "Invoke the login and registration functions locally")]
pub struct CliConfig {
    /// Function to invoke: loginUser or registerUser
    #[arg(short, long)]
    pub function: FunctionName,

    /// HTTP method placed on the event
    #[arg(short, long, default_value = METHOD_POST, conflicts_with = "event_file")]
    pub method: String,

    /// Raw request body, usually a JSON document
    #[arg(short, long, conflicts_with = "event_file")]
    pub body: Option<String>,

    /// Path to a complete event document ({"httpMethod": ..., "body": ...})
    #[arg(short, long)]
    pub event_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_event(&self) -> Result<FunctionEvent> {
        match &self.event_file {
            Some(path) => load_event_file(path),
            None => Ok(FunctionEvent::new(self.method.clone(), self.body.clone())),
        }
    }
}

pub fn load_event_file(path: &str) -> Result<FunctionEvent> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| AuthError::ConfigError {
        message: format!("Invalid event file '{}': {}", path, e),
    })
}
