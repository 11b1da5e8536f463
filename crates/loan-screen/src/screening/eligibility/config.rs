use crate::screening::domain::CrimeGrade;
use serde::{Deserialize, Serialize};

/// Policy thresholds applied by the eligibility engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub minimum_credit_score: u16,
    /// Monthly income must strictly exceed the per-month repayment times this factor.
    pub income_coverage_multiplier: f64,
    pub disqualifying_grade: CrimeGrade,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            minimum_credit_score: 700,
            income_coverage_multiplier: 1.5,
            disqualifying_grade: CrimeGrade::F,
        }
    }
}
