use super::toml_config::{OutputFormat, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "nis-calc")]
#[command(about = "Compute the noise intensity level (dB) of a linear intensity")]
pub struct CliConfig {
    /// Intensity to evaluate; omit it to read one value per line from stdin
    pub intensity: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the reference intensity (0 dB point)
    #[arg(long)]
    pub reference: Option<f64>,

    /// Override the minimum accepted intensity
    #[arg(long)]
    pub min: Option<f64>,

    /// Override the maximum accepted intensity
    #[arg(long)]
    pub max: Option<f64>,

    /// Decimal places kept in the result
    #[arg(long)]
    pub decimals: Option<usize>,

    /// Output format for results
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file (or defaults) and applies command line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(reference) = self.reference {
            config.limits.reference_intensity = reference;
        }
        if let Some(min) = self.min {
            config.limits.min_intensity = min;
        }
        if let Some(max) = self.max {
            config.limits.max_intensity = max;
        }
        if let Some(decimals) = self.decimals {
            config.output.decimals = decimals;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config.logging.verbose |= self.verbose;
        config.logging.json |= self.log_json;

        config.validate()?;
        Ok(config)
    }
}
