pub mod function;
pub mod invoker;

pub use crate::domain::model::{FunctionEvent, FunctionResponse};
pub use crate::domain::ports::Handler;
pub use crate::utils::error::Result;
