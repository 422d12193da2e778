use serde::{Deserialize, Serialize};

use crate::utils::error::{QualifierError, Result};

/// Column order of the rate-sheet CSV. Writing uses this exact order;
/// reading matches columns by header name.
pub const RATE_SHEET_COLUMNS: [&str; 6] = [
    "Lender",
    "Max Loan Amount",
    "Max DTI",
    "Min Credit Score",
    "Interest Rate",
    "Max LTV",
];

/// One loan product from the rate sheet. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    #[serde(rename = "Lender")]
    pub lender: String,
    #[serde(rename = "Max Loan Amount")]
    pub max_loan_amount: f64,
    #[serde(rename = "Max DTI")]
    pub max_dti: f64,
    #[serde(rename = "Min Credit Score")]
    pub min_credit_score: u32,
    #[serde(rename = "Interest Rate")]
    pub interest_rate: f64,
    #[serde(rename = "Max LTV")]
    pub max_ltv: f64,
}

/// The applicant's financial information, gathered once from interactive
/// input and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BorrowerProfile {
    pub credit_score: u32,
    pub monthly_debt: f64,
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub home_value: f64,
}

impl BorrowerProfile {
    pub fn new(
        credit_score: u32,
        monthly_debt: f64,
        monthly_income: f64,
        loan_amount: f64,
        home_value: f64,
    ) -> Result<Self> {
        let profile = Self {
            credit_score,
            monthly_debt,
            monthly_income,
            loan_amount,
            home_value,
        };
        profile.check()?;
        Ok(profile)
    }

    /// Monthly debt divided by monthly income.
    pub fn debt_to_income(&self) -> f64 {
        self.monthly_debt / self.monthly_income
    }

    /// Desired loan amount divided by home value.
    pub fn loan_to_value(&self) -> f64 {
        self.loan_amount / self.home_value
    }

    fn check(&self) -> Result<()> {
        if self.monthly_debt < 0.0 {
            return Err(field_error("monthly_debt", self.monthly_debt, "cannot be negative"));
        }
        if self.loan_amount < 0.0 {
            return Err(field_error("loan_amount", self.loan_amount, "cannot be negative"));
        }
        // Both are ratio denominators.
        if self.monthly_income <= 0.0 {
            return Err(field_error("monthly_income", self.monthly_income, "must be greater than zero"));
        }
        if self.home_value <= 0.0 {
            return Err(field_error("home_value", self.home_value, "must be greater than zero"));
        }
        Ok(())
    }
}

fn field_error(field: &str, value: f64, reason: &str) -> QualifierError {
    QualifierError::Validation {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Output of the qualification stage: the ordered subset of offers the
/// applicant qualifies for, the profile it was computed from, and the
/// CSV rendering handed to the load stage.
#[derive(Debug, Clone)]
pub struct QualificationResult {
    pub profile: BorrowerProfile,
    pub qualifying: Vec<LoanOffer>,
    pub csv_output: String,
}
