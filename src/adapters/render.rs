use crate::config::OutputFormat;
use crate::core::Renderer;
use crate::domain::model::Evaluation;
use crate::utils::error::Result;
use serde_json::json;

/// One human-readable line per evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, evaluation: &Evaluation) -> Result<String> {
        let line = match (&evaluation.decibels, &evaluation.message) {
            (Some(db), _) => format!("Your NIS is: {} dB", db),
            (None, Some(message)) => format!("Error: {}", message),
            (None, None) => format!("Error: {}", evaluation.kind),
        };
        Ok(line)
    }

    fn render_advisory(&self, message: &str) -> Result<String> {
        Ok(format!("Warning: {}", message))
    }
}

/// One JSON object per evaluation, suitable for line-delimited output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, evaluation: &Evaluation) -> Result<String> {
        Ok(serde_json::to_string(evaluation)?)
    }

    fn render_advisory(&self, message: &str) -> Result<String> {
        Ok(serde_json::to_string(&json!({
            "kind": "advisory",
            "message": message,
        }))?)
    }
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
