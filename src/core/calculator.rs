use crate::domain::model::{DecibelValue, Limits, Outcome, DEFAULT_DECIMALS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculator {
    limits: Limits,
    decimals: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Limits::default(), DEFAULT_DECIMALS)
    }
}

impl Calculator {
    pub fn new(limits: Limits, decimals: usize) -> Self {
        Self { limits, decimals }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Range check followed by `10 * log10(value / reference)`.
    pub fn evaluate(&self, value: f64) -> Outcome {
        if value < self.limits.min_intensity {
            return Outcome::BelowMinimum {
                min: self.limits.min_intensity,
            };
        }

        if value > self.limits.max_intensity {
            return Outcome::AboveMaximum {
                max: self.limits.max_intensity,
            };
        }

        let db = to_decibels(value, self.limits.reference_intensity);
        Outcome::Success(DecibelValue {
            value: db,
            formatted: format_db(db, self.decimals),
        })
    }
}

pub fn to_decibels(intensity: f64, reference: f64) -> f64 {
    10.0 * (intensity / reference).log10()
}

/// Rounds to `decimals` places (exact ties away from zero) and drops trailing
/// zeros and a dangling point. Non-finite values keep their plain textual form.
pub fn format_db(db: f64, decimals: usize) -> String {
    if !db.is_finite() {
        return db.to_string();
    }

    let mut text = format!("{:.*}", decimals, round_half_away(db, decimals));
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }

    if text == "-0" {
        text = "0".to_string();
    }
    text
}

// `{:.N}` alone breaks exact ties to the even digit.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Superscript scientific notation for thresholds, e.g. `1×10⁻¹²`.
pub fn format_threshold(value: f64) -> String {
    let sci = format!("{:e}", value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };

    match exponent.parse::<i32>() {
        Ok(0) => mantissa.to_string(),
        Ok(exp) => format!("{}×10{}", mantissa, superscript(exp)),
        Err(_) => sci,
    }
}

fn superscript(exp: i32) -> String {
    let mut out = String::new();
    if exp < 0 {
        out.push('⁻');
    }
    for digit in exp.unsigned_abs().to_string().chars() {
        out.push(match digit {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            _ => '⁹',
        });
    }
    out
}
