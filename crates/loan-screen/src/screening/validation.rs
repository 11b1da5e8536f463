use super::domain::{LoanApplicationInput, LoanSubmission};

pub const MIN_CREDIT_SCORE: i64 = 300;
pub const MAX_CREDIT_SCORE: i64 = 850;
pub const MAX_LOAN_TERM_MONTHS: i64 = 480;

/// Intake rejection raised before any screening logic runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("applicant_name must not be empty")]
    EmptyApplicantName,
    #[error("property_address must not be empty")]
    EmptyPropertyAddress,
    #[error("credit_score must be within {MIN_CREDIT_SCORE}..={MAX_CREDIT_SCORE} (got {value})")]
    CreditScoreOutOfRange { value: i64 },
    #[error("monthly_income must be a positive amount (got {value})")]
    NonPositiveMonthlyIncome { value: f64 },
    #[error("requested_amount must be a positive amount (got {value})")]
    NonPositiveRequestedAmount { value: f64 },
    #[error("loan_term_months must be within 1..={MAX_LOAN_TERM_MONTHS} (got {value})")]
    LoanTermOutOfRange { value: i64 },
}

/// Turn a raw submission into validated application data, trimming free-text
/// fields and enforcing the numeric ranges the screening core relies on.
pub fn validate(submission: LoanSubmission) -> Result<LoanApplicationInput, ValidationError> {
    let applicant_name = submission.applicant_name.trim().to_string();
    if applicant_name.is_empty() {
        return Err(ValidationError::EmptyApplicantName);
    }

    let property_address = submission.property_address.trim().to_string();
    if property_address.is_empty() {
        return Err(ValidationError::EmptyPropertyAddress);
    }

    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&submission.credit_score) {
        return Err(ValidationError::CreditScoreOutOfRange {
            value: submission.credit_score,
        });
    }

    // `!(x > 0.0)` also rejects NaN.
    if !(submission.monthly_income > 0.0) || !submission.monthly_income.is_finite() {
        return Err(ValidationError::NonPositiveMonthlyIncome {
            value: submission.monthly_income,
        });
    }

    if !(submission.requested_amount > 0.0) || !submission.requested_amount.is_finite() {
        return Err(ValidationError::NonPositiveRequestedAmount {
            value: submission.requested_amount,
        });
    }

    if !(1..=MAX_LOAN_TERM_MONTHS).contains(&submission.loan_term_months) {
        return Err(ValidationError::LoanTermOutOfRange {
            value: submission.loan_term_months,
        });
    }

    Ok(LoanApplicationInput {
        applicant_name,
        property_address,
        credit_score: submission.credit_score as u16,
        monthly_income: submission.monthly_income,
        requested_amount: submission.requested_amount,
        loan_term_months: submission.loan_term_months as u32,
    })
}
