use crate::domain::model::{CharacterCheck, ParsedInput};
use regex::Regex;
use std::sync::LazyLock;

/// Sign, digits with an optional fraction (or a bare fraction), optional exponent.
static NUMBER_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("number grammar is a valid pattern")
});

static ALLOWED_CHARACTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9eE+\-.,\s]*$").expect("character filter is a valid pattern")
});

/// Reads a raw intensity. The value is not range-checked here.
pub fn parse(raw: &str) -> ParsedInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedInput::Empty;
    }

    let normalized = trimmed.replacen(',', ".", 1);
    if !NUMBER_GRAMMAR.is_match(&normalized) {
        tracing::trace!("Rejected '{}': not a number", normalized);
        return ParsedInput::Invalid;
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedInput::Value(value),
        Ok(_) => {
            tracing::trace!("Rejected '{}': value overflows", normalized);
            ParsedInput::Invalid
        }
        Err(_) => ParsedInput::Invalid,
    }
}

/// Advisory filter for text being typed. Never decides acceptance.
pub fn check_characters(raw: &str) -> CharacterCheck {
    if ALLOWED_CHARACTERS.is_match(raw) {
        CharacterCheck::Clean
    } else {
        CharacterCheck::Suspicious
    }
}
