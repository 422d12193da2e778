pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_csv_extension, validate_non_empty_string, Validate};
use clap::Parser;

use crate::config::toml_config::TomlConfig;

pub const DEFAULT_RATE_SHEET_PATH: &str = "./data/daily_rate_sheet.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./qualifying_loans.csv";

#[derive(Debug, Clone, Parser)]
#[command(name = "loan-qualifier")]
#[command(about = "Match loan applicants with qualifying loan products")]
pub struct CliConfig {
    /// Path to the rate-sheet CSV with the available loan products
    #[arg(long)]
    pub rate_sheet: Option<String>,

    /// Default path for saving the qualifying loans
    #[arg(long)]
    pub output: Option<String>,

    /// Optional TOML config file with rate-sheet and output defaults
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

/// Effective configuration after merging CLI flags, the optional config
/// file and the built-in defaults. CLI flags win over the file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub rate_sheet_path: String,
    pub output_path: String,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file_config = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        Ok(Self::merge(cli, file_config.as_ref()))
    }

    fn merge(cli: &CliConfig, file_config: Option<&TomlConfig>) -> Self {
        let rate_sheet_path = cli
            .rate_sheet
            .clone()
            .or_else(|| file_config.and_then(|c| c.rate_sheet_path()))
            .unwrap_or_else(|| DEFAULT_RATE_SHEET_PATH.to_string());

        let output_path = cli
            .output
            .clone()
            .or_else(|| file_config.and_then(|c| c.output_path()))
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        Self {
            rate_sheet_path,
            output_path,
        }
    }
}

impl ConfigProvider for Settings {
    fn rate_sheet_path(&self) -> &str {
        &self.rate_sheet_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("rate_sheet_path", &self.rate_sheet_path)?;
        validate_csv_extension("rate_sheet_path", &self.rate_sheet_path)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        validate_csv_extension("output_path", &self.output_path)?;
        Ok(())
    }
}
