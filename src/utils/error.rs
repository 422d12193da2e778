use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualifierError {
    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Cannot access {path}: {message}")]
    FileAccess { path: String, message: String },

    #[error("Malformed input: {message}")]
    InputFormat { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, QualifierError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InputFormat,
    FileAccess,
    Validation,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QualifierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QualifierError::Csv(_) | QualifierError::InputFormat { .. } => {
                ErrorCategory::InputFormat
            }
            QualifierError::Io(_) | QualifierError::FileAccess { .. } => ErrorCategory::FileAccess,
            QualifierError::Validation { .. } => ErrorCategory::Validation,
            QualifierError::Toml(_)
            | QualifierError::Config { .. }
            | QualifierError::MissingConfig { .. }
            | QualifierError::InvalidConfigValue { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::InputFormat => ErrorSeverity::High,
            ErrorCategory::FileAccess => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QualifierError::Csv(e) => format!("The rate sheet could not be parsed: {}", e),
            QualifierError::Io(e) => format!("A file operation failed: {}", e),
            QualifierError::Toml(e) => format!("The config file could not be parsed: {}", e),
            QualifierError::FileAccess { path, message } => {
                format!("Cannot access '{}': {}", path, message)
            }
            QualifierError::InputFormat { message } => message.clone(),
            QualifierError::Validation { field, reason, .. } => {
                format!("{} {}", field.replace('_', " "), reason)
            }
            QualifierError::Config { message } => message.clone(),
            QualifierError::MissingConfig { field } => {
                format!("Configuration is missing '{}'", field)
            }
            QualifierError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::InputFormat => {
                "Check that the rate sheet has the expected columns and numeric values".to_string()
            }
            ErrorCategory::FileAccess => {
                "Verify the file path exists and is readable (or writable for output)".to_string()
            }
            ErrorCategory::Validation => {
                "Re-run and enter a valid number for each question".to_string()
            }
            ErrorCategory::Config => {
                "Review the CLI flags and the config file contents".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        let err = QualifierError::InputFormat {
            message: "row 3: bad number".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::InputFormat);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = QualifierError::FileAccess {
            path: "missing.csv".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::FileAccess);

        let err = QualifierError::Validation {
            field: "monthly_income".to_string(),
            value: "-1".to_string(),
            reason: "must be greater than zero".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = QualifierError::MissingConfig {
            field: "output.path".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_friendly_message_names_the_field() {
        let err = QualifierError::Validation {
            field: "home_value".to_string(),
            value: "0".to_string(),
            reason: "must be greater than zero".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "home value must be greater than zero");
    }
}
