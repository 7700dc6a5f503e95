use crate::app::handlers::{LoginHandler, RegisterHandler};
use crate::domain::ports::Handler;
use crate::utils::error::AuthError;
use std::fmt;
use std::str::FromStr;

/// Deployable functions, named the way the hosting platform routes to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
    LoginUser,
    RegisterUser,
}

impl FunctionName {
    pub const ALL: [FunctionName; 2] = [FunctionName::LoginUser, FunctionName::RegisterUser];

    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionName::LoginUser => "loginUser",
            FunctionName::RegisterUser => "registerUser",
        }
    }

    pub fn handler(&self) -> Box<dyn Handler> {
        match self {
            FunctionName::LoginUser => Box::new(LoginHandler::default()),
            FunctionName::RegisterUser => Box::new(RegisterHandler::new()),
        }
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunctionName {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FunctionName::ALL
            .into_iter()
            .find(|name| name.as_str() == s.trim())
            .ok_or_else(|| AuthError::UnknownFunction {
                name: s.to_string(),
            })
    }
}
