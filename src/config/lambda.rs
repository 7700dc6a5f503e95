use crate::core::function::FunctionName;
use crate::utils::error::{AuthError, Result};
use std::env;

pub const FUNCTION_ENV: &str = "AUTH_FUNCTION";
pub const RUNTIME_FUNCTION_ENV: &str = "AWS_LAMBDA_FUNCTION_NAME";

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub function: FunctionName,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::resolve(env::var(FUNCTION_ENV).ok(), env::var(RUNTIME_FUNCTION_ENV).ok())
    }

    /// An explicit `AUTH_FUNCTION` wins over the name the runtime deployed us under.
    pub fn resolve(explicit: Option<String>, runtime: Option<String>) -> Result<Self> {
        let name = explicit
            .filter(|v| !v.trim().is_empty())
            .or(runtime)
            .ok_or_else(|| AuthError::ConfigError {
                message: format!(
                    "{} or {} environment variable is required",
                    FUNCTION_ENV, RUNTIME_FUNCTION_ENV
                ),
            })?;

        Ok(Self {
            function: name.parse()?,
        })
    }
}
