use crate::utils::error::{QualifierError, Result};
use crate::utils::validation::{validate_csv_extension, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk defaults for the CLI. All sections are optional; anything left
/// out falls back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub rate_sheet: Option<RateSheetConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSheetConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| QualifierError::FileAccess {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn rate_sheet_path(&self) -> Option<String> {
        self.rate_sheet.as_ref().map(|c| c.path.clone())
    }

    pub fn output_path(&self) -> Option<String> {
        self.output.as_ref().map(|c| c.path.clone())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(rate_sheet) = &self.rate_sheet {
            validate_non_empty_string("rate_sheet.path", &rate_sheet.path)?;
            validate_csv_extension("rate_sheet.path", &rate_sheet.path)?;
        }
        if let Some(output) = &self.output {
            validate_non_empty_string("output.path", &output.path)?;
            validate_csv_extension("output.path", &output.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_full_config() {
        let config = TomlConfig::from_str(
            r#"
[rate_sheet]
path = "./data/daily_rate_sheet.csv"

[output]
path = "./my_loans.csv"
"#,
        )
        .unwrap();

        assert_eq!(
            config.rate_sheet_path().as_deref(),
            Some("./data/daily_rate_sheet.csv")
        );
        assert_eq!(config.output_path().as_deref(), Some("./my_loans.csv"));
    }

    #[test]
    fn test_from_str_empty_config() {
        let config = TomlConfig::from_str("").unwrap();
        assert!(config.rate_sheet_path().is_none());
        assert!(config.output_path().is_none());
    }

    #[test]
    fn test_from_str_rejects_invalid_toml() {
        assert!(TomlConfig::from_str("rate_sheet = [").is_err());
    }

    #[test]
    fn test_from_str_rejects_non_csv_path() {
        let result = TomlConfig::from_str(
            r#"
[rate_sheet]
path = "./data/rates.xlsx"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = TomlConfig::from_file("definitely/not/here.toml");
        assert!(matches!(
            result,
            Err(QualifierError::FileAccess { .. })
        ));
    }
}
