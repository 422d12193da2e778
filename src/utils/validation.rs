use crate::utils::error::{QualifierError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QualifierError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_csv_extension(field_name: &str, path: &str) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some("csv") => Ok(()),
        Some(extension) => Err(QualifierError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!("Unsupported file extension: {}. Expected: csv", extension),
        }),
        None => Err(QualifierError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

/// Parse an interactive answer as a credit score (non-negative integer).
pub fn parse_credit_score(field_name: &str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| QualifierError::InputFormat {
            message: format!(
                "'{}' is not a whole number; please enter your {}",
                raw.trim(),
                field_name.replace('_', " ")
            ),
        })
}

/// Parse an interactive answer as a non-negative amount.
pub fn parse_non_negative_amount(field_name: &str, raw: &str) -> Result<f64> {
    let value = parse_amount(field_name, raw)?;
    if value < 0.0 {
        return Err(QualifierError::Validation {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "cannot be negative".to_string(),
        });
    }
    Ok(value)
}

/// Parse an interactive answer as a strictly positive amount. Used for the
/// ratio denominators (income, home value).
pub fn parse_positive_amount(field_name: &str, raw: &str) -> Result<f64> {
    let value = parse_amount(field_name, raw)?;
    if value <= 0.0 {
        return Err(QualifierError::Validation {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

fn parse_amount(field_name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| QualifierError::InputFormat {
            message: format!(
                "'{}' is not a number; please enter your {}",
                raw.trim(),
                field_name.replace('_', " ")
            ),
        })
}

/// Parse a yes/no confirmation answer.
pub fn parse_yes_no(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(QualifierError::InputFormat {
            message: format!("'{}' is not a yes/no answer; please enter y or n", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("output_path", "loans.csv").is_ok());
        assert!(validate_non_empty_string("output_path", "").is_err());
        assert!(validate_non_empty_string("output_path", "   ").is_err());
    }

    #[test]
    fn test_validate_csv_extension() {
        assert!(validate_csv_extension("rate_sheet_path", "data/daily_rate_sheet.csv").is_ok());
        assert!(validate_csv_extension("rate_sheet_path", "data/rates.txt").is_err());
        assert!(validate_csv_extension("rate_sheet_path", "data/rates").is_err());
    }

    #[test]
    fn test_parse_credit_score() {
        assert_eq!(parse_credit_score("credit_score", "720").unwrap(), 720);
        assert_eq!(parse_credit_score("credit_score", "  720 ").unwrap(), 720);
        assert!(parse_credit_score("credit_score", "seven").is_err());
        assert!(parse_credit_score("credit_score", "-5").is_err());
        assert!(parse_credit_score("credit_score", "7.5").is_err());
    }

    #[test]
    fn test_parse_non_negative_amount() {
        assert_eq!(parse_non_negative_amount("monthly_debt", "0").unwrap(), 0.0);
        assert_eq!(parse_non_negative_amount("monthly_debt", "500.5").unwrap(), 500.5);
        assert!(parse_non_negative_amount("monthly_debt", "-1").is_err());
        assert!(parse_non_negative_amount("monthly_debt", "abc").is_err());
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("monthly_income", "5000").unwrap(), 5000.0);
        assert!(parse_positive_amount("monthly_income", "0").is_err());
        assert!(parse_positive_amount("monthly_income", "-100").is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("y").unwrap());
        assert!(parse_yes_no("YES").unwrap());
        assert!(!parse_yes_no("n").unwrap());
        assert!(!parse_yes_no(" No ").unwrap());
        assert!(parse_yes_no("maybe").is_err());
    }
}
