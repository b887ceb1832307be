pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{OutputFormat, TomlConfig};

pub use app::{Session, SessionSummary};
pub use crate::core::calculator::Calculator;
pub use crate::core::evaluator::{evaluate_intensity, IntensityEvaluator};
pub use crate::core::parser::{check_characters, parse};
pub use domain::model::{
    CharacterCheck, DecibelValue, Evaluation, Limits, Outcome, OutcomeKind, ParsedInput,
    MAX_INTENSITY, MIN_INTENSITY, REFERENCE_INTENSITY,
};
pub use utils::error::{NisError, Result};
