pub mod calculator;
pub mod evaluator;
pub mod parser;

pub use crate::domain::model::{Evaluation, Limits, Outcome, ParsedInput};
pub use crate::domain::ports::{ConfigProvider, Renderer};
pub use crate::utils::error::Result;
