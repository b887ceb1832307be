use serde::{Deserialize, Serialize};
use std::fmt;

pub const REFERENCE_INTENSITY: f64 = 1e-12;
pub const MIN_INTENSITY: f64 = REFERENCE_INTENSITY;
pub const MAX_INTENSITY: f64 = 1.0;
pub const DEFAULT_DECIMALS: usize = 2;

pub const EMPTY_INPUT_MESSAGE: &str = "Enter the intensity level (I).";
pub const INVALID_NUMBER_MESSAGE: &str =
    "Invalid input: enter a single number (scientific notation is allowed, e.g. 1e-6).";
pub const SUSPICIOUS_CHARACTERS_MESSAGE: &str =
    "Invalid characters detected (only numbers and scientific notation are allowed).";

/// Range an intensity must fall in, plus the 0 dB reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub reference_intensity: f64,
    pub min_intensity: f64,
    pub max_intensity: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            reference_intensity: REFERENCE_INTENSITY,
            min_intensity: MIN_INTENSITY,
            max_intensity: MAX_INTENSITY,
        }
    }
}

/// Result of reading raw text, before any range check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    Empty,
    Invalid,
    Value(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterCheck {
    Clean,
    Suspicious,
}

impl CharacterCheck {
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            CharacterCheck::Clean => None,
            CharacterCheck::Suspicious => Some(SUSPICIOUS_CHARACTERS_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecibelValue {
    pub value: f64,
    pub formatted: String,
}

impl fmt::Display for DecibelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    EmptyInput,
    InvalidNumber,
    BelowMinimum { min: f64 },
    AboveMaximum { max: f64 },
    Success(DecibelValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Empty,
    Invalid,
    BelowMin,
    AboveMax,
    Success,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Empty => "empty",
            OutcomeKind::Invalid => "invalid",
            OutcomeKind::BelowMin => "below_min",
            OutcomeKind::AboveMax => "above_max",
            OutcomeKind::Success => "success",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::EmptyInput => OutcomeKind::Empty,
            Outcome::InvalidNumber => OutcomeKind::Invalid,
            Outcome::BelowMinimum { .. } => OutcomeKind::BelowMin,
            Outcome::AboveMaximum { .. } => OutcomeKind::AboveMax,
            Outcome::Success(_) => OutcomeKind::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// User-facing message for rejected input. `None` on success.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::EmptyInput => Some(EMPTY_INPUT_MESSAGE.to_string()),
            Outcome::InvalidNumber => Some(INVALID_NUMBER_MESSAGE.to_string()),
            Outcome::BelowMinimum { min } => Some(format!(
                "The value cannot be less than {:e} ({}).",
                min,
                crate::core::calculator::format_threshold(*min)
            )),
            Outcome::AboveMaximum { max } => Some(format!(
                "The value cannot be greater than {}.",
                crate::core::calculator::format_threshold(*max)
            )),
            Outcome::Success(_) => None,
        }
    }

    pub fn decibels(&self) -> Option<&DecibelValue> {
        match self {
            Outcome::Success(db) => Some(db),
            _ => None,
        }
    }
}

/// Host-facing record of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub kind: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decibels: Option<String>,
}

impl From<&Outcome> for Evaluation {
    fn from(outcome: &Outcome) -> Self {
        Self {
            kind: outcome.kind(),
            message: outcome.message(),
            decibels: outcome.decibels().map(|db| db.formatted.clone()),
        }
    }
}

impl From<Outcome> for Evaluation {
    fn from(outcome: Outcome) -> Self {
        Evaluation::from(&outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_messages_include_thresholds() {
        let below = Outcome::BelowMinimum { min: MIN_INTENSITY }.message().unwrap();
        assert!(below.contains("1×10⁻¹²"));
        assert!(below.contains("1e-12"));

        let above = Outcome::AboveMaximum { max: MAX_INTENSITY }.message().unwrap();
        assert_eq!(above, "The value cannot be greater than 1.");
    }

    #[test]
    fn test_evaluation_json_omits_absent_fields() {
        let evaluation = Evaluation::from(Outcome::EmptyInput);
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["kind"], "empty");
        assert_eq!(json["message"], EMPTY_INPUT_MESSAGE);
        assert!(json.get("decibels").is_none());

        let evaluation = Evaluation::from(Outcome::Success(DecibelValue {
            value: 60.0,
            formatted: "60".to_string(),
        }));
        let json = serde_json::to_string(&evaluation).unwrap();
        assert_eq!(json, r#"{"kind":"success","decibels":"60"}"#);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(OutcomeKind::BelowMin.as_str(), "below_min");
        assert_eq!(
            serde_json::to_string(&OutcomeKind::AboveMax).unwrap(),
            r#""above_max""#
        );
    }
}
