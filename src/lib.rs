pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::{ConsolePrompter, LocalStorage};
pub use config::{CliConfig, Settings};
pub use core::{engine::QualifierEngine, pipeline::QualifierPipeline};
pub use domain::model::{BorrowerProfile, LoanOffer, QualificationResult};
pub use utils::error::{QualifierError, Result};
