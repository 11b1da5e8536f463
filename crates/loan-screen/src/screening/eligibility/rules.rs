use super::config::EligibilityConfig;
use crate::screening::domain::{CrimeGrade, LoanApplicationInput};

pub(crate) fn credit_check(application: &LoanApplicationInput, config: &EligibilityConfig) -> bool {
    application.credit_score >= config.minimum_credit_score
}

/// Required income is the per-month repayment scaled by the coverage multiplier.
/// Income exactly at the requirement fails; `loan_term_months >= 1` is guaranteed
/// by intake validation.
pub(crate) fn income_check(application: &LoanApplicationInput, config: &EligibilityConfig) -> bool {
    let per_month = application.requested_amount / f64::from(application.loan_term_months);
    let required = per_month * config.income_coverage_multiplier;
    application.monthly_income > required
}

pub(crate) fn crime_check(grade: CrimeGrade, config: &EligibilityConfig) -> bool {
    grade != config.disqualifying_grade
}
