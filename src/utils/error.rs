use thiserror::Error;

#[derive(Error, Debug)]
pub enum NisError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file is not valid TOML: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl NisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NisError::IoError(_) => ErrorCategory::Io,
            NisError::SerializationError(_) => ErrorCategory::Output,
            NisError::ConfigParseError { .. }
            | NisError::InvalidConfigValueError { .. }
            | NisError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NisError::IoError(_) => {
                "Check that the file exists and that stdin/stdout are available".to_string()
            }
            NisError::SerializationError(_) => "Retry with --format text".to_string(),
            NisError::ConfigParseError { .. } => {
                "Check the config file for TOML syntax errors".to_string()
            }
            NisError::InvalidConfigValueError { field, .. } => {
                format!("Set '{}' to a valid value or remove it to use the default", field)
            }
            NisError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("Input/output failure: {}", self),
            ErrorCategory::Output => format!("Could not render the result: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, NisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = NisError::InvalidConfigValueError {
            field: "limits.min_intensity".to_string(),
            value: "-1".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("limits.min_intensity"));
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
    }

    #[test]
    fn test_parse_error_suggestion_names_the_file() {
        let err = NisError::ConfigParseError {
            message: "expected `]`".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.recovery_suggestion(),
            "Check the config file for TOML syntax errors"
        );
        assert!(err.to_string().contains("expected `]`"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: NisError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
