mod config;
mod rules;

pub use config::EligibilityConfig;

use crate::screening::domain::{CrimeGrade, LoanApplicationInput};
use serde::{Deserialize, Serialize};

pub const PASSED_ALL_CHECKS: &str = "Passed all checks";
pub const CREDIT_FAILURE: &str = "Credit score too low";
pub const INCOME_FAILURE: &str = "Monthly income too low";
pub const CRIME_FAILURE: &str = "Property location has high crime rate";

/// Stateless evaluator applying the three screening checks to an application.
///
/// This is the only place loan policy lives; request handling composes it but
/// never embeds policy of its own.
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    /// Run the checks against a validated application and its resolved crime
    /// grade. Never fails: the result is always a verdict with a reason.
    pub fn evaluate(
        &self,
        application: &LoanApplicationInput,
        grade: CrimeGrade,
    ) -> EligibilityOutcome {
        EligibilityOutcome::from_checks(EligibilityChecks {
            credit_score: rules::credit_check(application, &self.config),
            income: rules::income_check(application, &self.config),
            crime_grade: rules::crime_check(grade, &self.config),
        })
    }
}

/// Individual verdicts of the three independent checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityChecks {
    pub credit_score: bool,
    pub income: bool,
    pub crime_grade: bool,
}

/// Composite screening verdict. `eligible` is always the conjunction of the
/// checks it was built from; the reason lists failed checks in the fixed
/// credit, income, crime order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub checks: EligibilityChecks,
    pub eligible: bool,
    pub reason: String,
}

impl EligibilityOutcome {
    pub fn from_checks(checks: EligibilityChecks) -> Self {
        let eligible = checks.credit_score && checks.income && checks.crime_grade;

        let reason = if eligible {
            PASSED_ALL_CHECKS.to_string()
        } else {
            let mut failures = Vec::new();
            if !checks.credit_score {
                failures.push(CREDIT_FAILURE);
            }
            if !checks.income {
                failures.push(INCOME_FAILURE);
            }
            if !checks.crime_grade {
                failures.push(CRIME_FAILURE);
            }
            failures.join(", ")
        };

        Self {
            checks,
            eligible,
            reason,
        }
    }
}
