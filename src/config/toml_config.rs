use crate::core::ConfigProvider;
use crate::domain::model::{Limits, DEFAULT_DECIMALS};
use crate::utils::error::{NisError, Result};
use crate::utils::validation::{validate_ordered, validate_positive_finite, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const MAX_DECIMALS: usize = 12;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Every section is optional; missing keys take the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub limits: Limits,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub decimals: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NisError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NisError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable.
    fn substitute_env_vars(content: &str) -> Result<String> {
        if let Some(missing) = ENV_VAR
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .find(|name| std::env::var(name).is_err())
        {
            return Err(NisError::MissingConfigError {
                field: format!("environment variable {}", missing),
            });
        }

        let result = ENV_VAR.replace_all(content, |caps: &regex::Captures<'_>| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.into_owned())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format
    }
}

impl ConfigProvider for TomlConfig {
    fn limits(&self) -> Limits {
        self.limits
    }

    fn decimals(&self) -> usize {
        self.output.decimals
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_finite("limits.reference_intensity", self.limits.reference_intensity)?;
        validate_positive_finite("limits.min_intensity", self.limits.min_intensity)?;
        validate_positive_finite("limits.max_intensity", self.limits.max_intensity)?;
        validate_ordered(
            "limits.min_intensity",
            self.limits.min_intensity,
            "limits.max_intensity",
            self.limits.max_intensity,
        )?;
        validate_range("output.decimals", self.output.decimals, 0, MAX_DECIMALS)?;
        Ok(())
    }
}
