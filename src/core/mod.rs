pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{BorrowerProfile, LoanOffer, QualificationResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Prompter, Storage};
pub use crate::utils::error::Result;
