//! Qualification rules. Each filter is a pure, order-preserving pass over
//! the offer list; all thresholds are inclusive.

use crate::domain::model::{BorrowerProfile, LoanOffer};

pub fn filter_max_loan_size(loan_amount: f64, offers: Vec<LoanOffer>) -> Vec<LoanOffer> {
    offers
        .into_iter()
        .filter(|offer| loan_amount <= offer.max_loan_amount)
        .collect()
}

pub fn filter_credit_score(credit_score: u32, offers: Vec<LoanOffer>) -> Vec<LoanOffer> {
    offers
        .into_iter()
        .filter(|offer| credit_score >= offer.min_credit_score)
        .collect()
}

pub fn filter_debt_to_income(debt_to_income: f64, offers: Vec<LoanOffer>) -> Vec<LoanOffer> {
    offers
        .into_iter()
        .filter(|offer| debt_to_income <= offer.max_dti)
        .collect()
}

pub fn filter_loan_to_value(loan_to_value: f64, offers: Vec<LoanOffer>) -> Vec<LoanOffer> {
    offers
        .into_iter()
        .filter(|offer| loan_to_value <= offer.max_ltv)
        .collect()
}

/// Run all four filters against the profile. The result is an ordered
/// subsequence of `offers`; no offer is mutated.
pub fn qualifying_offers(profile: &BorrowerProfile, offers: Vec<LoanOffer>) -> Vec<LoanOffer> {
    let offers = filter_max_loan_size(profile.loan_amount, offers);
    let offers = filter_credit_score(profile.credit_score, offers);
    let offers = filter_debt_to_income(profile.debt_to_income(), offers);
    filter_loan_to_value(profile.loan_to_value(), offers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(lender: &str, min_score: u32, max_dti: f64, max_loan: f64, max_ltv: f64) -> LoanOffer {
        LoanOffer {
            lender: lender.to_string(),
            max_loan_amount: max_loan,
            max_dti,
            min_credit_score: min_score,
            interest_rate: 4.0,
            max_ltv,
        }
    }

    fn sample_profile() -> BorrowerProfile {
        // DTI = 0.1, LTV = 0.8
        BorrowerProfile::new(720, 500.0, 5000.0, 200_000.0, 250_000.0).unwrap()
    }

    #[test]
    fn test_offer_within_all_thresholds_is_included() {
        let offers = vec![offer("Lender A", 650, 0.45, 300_000.0, 0.85)];
        let qualifying = qualifying_offers(&sample_profile(), offers.clone());
        assert_eq!(qualifying, offers);
    }

    #[test]
    fn test_offer_above_min_credit_score_is_excluded() {
        let offers = vec![offer("Lender A", 750, 0.45, 300_000.0, 0.85)];
        let qualifying = qualifying_offers(&sample_profile(), offers);
        assert!(qualifying.is_empty());
    }

    #[test]
    fn test_each_threshold_excludes_on_its_own() {
        let profile = sample_profile();
        let too_small_loan = vec![offer("A", 650, 0.45, 100_000.0, 0.85)];
        let too_strict_dti = vec![offer("B", 650, 0.05, 300_000.0, 0.85)];
        let too_strict_ltv = vec![offer("C", 650, 0.45, 300_000.0, 0.5)];

        assert!(qualifying_offers(&profile, too_small_loan).is_empty());
        assert!(qualifying_offers(&profile, too_strict_dti).is_empty());
        assert!(qualifying_offers(&profile, too_strict_ltv).is_empty());
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        // Every threshold sits exactly on the profile's values.
        let offers = vec![offer("Edge", 720, 0.1, 200_000.0, 0.8)];
        let qualifying = qualifying_offers(&sample_profile(), offers.clone());
        assert_eq!(qualifying, offers);
    }

    #[test]
    fn test_result_preserves_input_order() {
        let offers = vec![
            offer("First", 600, 0.45, 300_000.0, 0.85),
            offer("Rejected", 800, 0.45, 300_000.0, 0.85),
            offer("Second", 650, 0.45, 300_000.0, 0.85),
            offer("Third", 700, 0.45, 300_000.0, 0.85),
        ];
        let qualifying = qualifying_offers(&sample_profile(), offers);
        let lenders: Vec<&str> = qualifying.iter().map(|o| o.lender.as_str()).collect();
        assert_eq!(lenders, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_offer_list_yields_empty_result() {
        let qualifying = qualifying_offers(&sample_profile(), Vec::new());
        assert!(qualifying.is_empty());
    }

    #[test]
    fn test_individual_filters() {
        let offers = vec![
            offer("Low", 600, 0.3, 250_000.0, 0.8),
            offer("High", 740, 0.5, 400_000.0, 0.9),
        ];

        assert_eq!(filter_credit_score(700, offers.clone()).len(), 1);
        assert_eq!(filter_max_loan_size(300_000.0, offers.clone()).len(), 1);
        assert_eq!(filter_debt_to_income(0.4, offers.clone()).len(), 1);
        assert_eq!(filter_loan_to_value(0.85, offers).len(), 1);
    }
}
