use crate::core::calculator::Calculator;
use crate::core::parser::parse;
use crate::core::ConfigProvider;
use crate::domain::model::{Evaluation, Limits, Outcome, ParsedInput, DEFAULT_DECIMALS};

/// Parser → range check → calculator, for one configured set of limits.
#[derive(Debug, Clone, Default)]
pub struct IntensityEvaluator {
    calculator: Calculator,
}

impl IntensityEvaluator {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            calculator: Calculator::new(config.limits(), config.decimals()),
        }
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            calculator: Calculator::new(limits, DEFAULT_DECIMALS),
        }
    }

    pub fn limits(&self) -> &Limits {
        self.calculator.limits()
    }

    pub fn handle(&self, raw: &str) -> Outcome {
        let outcome = match parse(raw) {
            ParsedInput::Empty => Outcome::EmptyInput,
            ParsedInput::Invalid => Outcome::InvalidNumber,
            ParsedInput::Value(value) => self.calculator.evaluate(value),
        };

        tracing::debug!(input = raw, kind = %outcome.kind(), "Evaluated intensity");
        outcome
    }

    pub fn evaluate(&self, raw: &str) -> Evaluation {
        Evaluation::from(self.handle(raw))
    }
}

/// Evaluates `raw` against the default limits (1e-12 to 1, reference 1e-12).
pub fn evaluate_intensity(raw: &str) -> Evaluation {
    IntensityEvaluator::default().evaluate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OutcomeKind;

    #[test]
    fn test_handle_selects_one_outcome() {
        let evaluator = IntensityEvaluator::default();
        assert_eq!(evaluator.handle(""), Outcome::EmptyInput);
        assert_eq!(evaluator.handle("   "), Outcome::EmptyInput);
        assert_eq!(evaluator.handle("abc"), Outcome::InvalidNumber);
        assert_eq!(evaluator.handle("2"), Outcome::AboveMaximum { max: 1.0 });
        assert_eq!(evaluator.handle("1e-13"), Outcome::BelowMinimum { min: 1e-12 });
        assert!(evaluator.handle("1e-6").is_success());
    }

    #[test]
    fn test_evaluate_intensity_success_shape() {
        let evaluation = evaluate_intensity("1e-6");
        assert_eq!(evaluation.kind, OutcomeKind::Success);
        assert_eq!(evaluation.decibels.as_deref(), Some("60"));
        assert!(evaluation.message.is_none());
    }

    #[test]
    fn test_evaluate_intensity_error_shape() {
        let evaluation = evaluate_intensity("1e-6x");
        assert_eq!(evaluation.kind, OutcomeKind::Invalid);
        assert!(evaluation.decibels.is_none());
        assert!(evaluation.message.unwrap().contains("1e-6"));
    }

    #[test]
    fn test_configured_limits() {
        let evaluator = IntensityEvaluator::with_limits(Limits {
            reference_intensity: 1e-12,
            min_intensity: 1e-6,
            max_intensity: 1e-3,
        });
        assert_eq!(evaluator.handle("1e-7"), Outcome::BelowMinimum { min: 1e-6 });
        assert_eq!(evaluator.evaluate("1e-3").decibels.as_deref(), Some("90"));
    }
}
