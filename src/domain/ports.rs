use crate::domain::model::{LoanOffer, QualificationResult};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn rate_sheet_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// Interactive question/answer channel. Implementations return one trimmed
/// line per question; running out of input is an error, not a retry.
pub trait Prompter: Send + Sync {
    fn ask_text(&self, prompt: &str) -> Result<String>;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<LoanOffer>>;
    fn transform(&self, offers: Vec<LoanOffer>) -> Result<QualificationResult>;
    fn load(&self, result: QualificationResult) -> Result<Option<String>>;
}
