use crate::core::{
    BorrowerProfile, ConfigProvider, LoanOffer, Pipeline, Prompter, QualificationResult, Storage,
};
use crate::domain::model::RATE_SHEET_COLUMNS;
use crate::domain::services;
use crate::utils::error::{QualifierError, Result};
use crate::utils::validation;

pub struct QualifierPipeline<S: Storage, C: ConfigProvider, P: Prompter> {
    storage: S,
    config: C,
    prompter: P,
}

impl<S: Storage, C: ConfigProvider, P: Prompter> QualifierPipeline<S, C, P> {
    pub fn new(storage: S, prompter: P, config: C) -> Self {
        Self {
            storage,
            config,
            prompter,
        }
    }

    fn gather_profile(&self) -> Result<BorrowerProfile> {
        let credit_score = self.ask_field("What's your credit score?", |raw| {
            validation::parse_credit_score("credit_score", raw)
        })?;
        let monthly_debt = self.ask_field("What's your current amount of monthly debt?", |raw| {
            validation::parse_non_negative_amount("monthly_debt", raw)
        })?;
        let monthly_income = self.ask_field("What's your total monthly income?", |raw| {
            validation::parse_positive_amount("monthly_income", raw)
        })?;
        let loan_amount = self.ask_field("What's your desired loan amount?", |raw| {
            validation::parse_non_negative_amount("loan_amount", raw)
        })?;
        let home_value = self.ask_field("What's your home value?", |raw| {
            validation::parse_positive_amount("home_value", raw)
        })?;

        BorrowerProfile::new(
            credit_score,
            monthly_debt,
            monthly_income,
            loan_amount,
            home_value,
        )
    }

    /// Ask until the answer parses. Only parse/validation failures loop;
    /// a broken input channel propagates.
    fn ask_field<T, F>(&self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            let raw = self.prompter.ask_text(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => println!("{}", e.user_friendly_message()),
            }
        }
    }

    fn ask_yes_no(&self, prompt: &str) -> Result<bool> {
        self.ask_field(prompt, validation::parse_yes_no)
    }

    fn ask_save_path(&self) -> Result<String> {
        loop {
            let answer = self.prompter.ask_text(&format!(
                "Enter a file path for the results (.csv), blank for {}:",
                self.config.output_path()
            ))?;
            if answer.is_empty() {
                return Ok(self.config.output_path().to_string());
            }
            match validation::validate_csv_extension("output_path", &answer) {
                Ok(()) => return Ok(answer),
                Err(e) => println!("{}", e.user_friendly_message()),
            }
        }
    }
}

impl<S: Storage, C: ConfigProvider, P: Prompter> Pipeline for QualifierPipeline<S, C, P> {
    fn extract(&self) -> Result<Vec<LoanOffer>> {
        let path = self.config.rate_sheet_path();
        tracing::debug!("Reading rate sheet from: {}", path);
        let bytes = self.storage.read_file(path)?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes.as_slice());

        let headers = reader.headers()?.clone();
        for column in RATE_SHEET_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(QualifierError::InputFormat {
                    message: format!("Rate sheet is missing the '{}' column", column),
                });
            }
        }

        let mut offers = Vec::new();
        for (index, row) in reader.deserialize::<LoanOffer>().enumerate() {
            // Row numbers are 1-based and include the header row.
            let offer = row.map_err(|e| QualifierError::InputFormat {
                message: format!("Rate sheet row {}: {}", index + 2, e),
            })?;
            offers.push(offer);
        }

        tracing::debug!("Parsed {} loan products", offers.len());
        Ok(offers)
    }

    fn transform(&self, offers: Vec<LoanOffer>) -> Result<QualificationResult> {
        let profile = self.gather_profile()?;

        println!(
            "The monthly debt-to-income ratio is {:.2}",
            profile.debt_to_income()
        );
        println!("The loan-to-value ratio is {:.2}", profile.loan_to_value());

        let qualifying = services::qualifying_offers(&profile, offers);
        let csv_output = render_csv(&qualifying)?;

        Ok(QualificationResult {
            profile,
            qualifying,
            csv_output,
        })
    }

    fn load(&self, result: QualificationResult) -> Result<Option<String>> {
        if result.qualifying.is_empty() {
            println!("Sorry, there are no qualifying loans for this profile.");
            return Ok(None);
        }

        print_offer_table(&result.qualifying);

        if !self.ask_yes_no("Do you want to save the qualifying loans? [y/n]")? {
            return Ok(None);
        }

        let path = self.ask_save_path()?;
        tracing::debug!(
            "Writing {} qualifying loans to: {}",
            result.qualifying.len(),
            path
        );
        self.storage.write_file(&path, result.csv_output.as_bytes())?;
        println!("Saved the qualifying loans to: {}", path);
        Ok(Some(path))
    }
}

/// Render offers as CSV with the rate-sheet column order. The header row is
/// written even when there are no offers.
pub fn render_csv(offers: &[LoanOffer]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if offers.is_empty() {
        writer.write_record(RATE_SHEET_COLUMNS)?;
    }
    for offer in offers {
        writer.serialize(offer)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| QualifierError::InputFormat {
            message: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|e| QualifierError::InputFormat {
        message: e.to_string(),
    })
}

fn print_offer_table(offers: &[LoanOffer]) {
    println!();
    println!(
        "{:<42} {:>14} {:>9} {:>11} {:>7} {:>9}",
        "Lender", "Max Loan", "Max DTI", "Min Score", "Rate", "Max LTV"
    );
    for offer in offers {
        println!(
            "{:<42} {:>14.2} {:>9.2} {:>11} {:>7.2} {:>9.2}",
            offer.lender,
            offer.max_loan_amount,
            offer.max_dti,
            offer.min_credit_score,
            offer.interest_rate,
            offer.max_ltv
        );
    }
    println!();
}
