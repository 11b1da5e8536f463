//! Loan application screening: intake validation, the three-check eligibility
//! engine, crime-grade resolution, and the surrounding persistence/HTTP seams.

pub mod crime;
pub mod domain;
pub mod eligibility;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use crime::{
    classify_address, normalize_address, CrimeDataSource, GradeCache, GradeResolver, LookupError,
    SimulatedCrimeDataSource,
};
pub use domain::{CrimeGrade, LoanApplicationInput, LoanId, LoanRecord, LoanSubmission};
pub use eligibility::{EligibilityChecks, EligibilityConfig, EligibilityEngine, EligibilityOutcome};
pub use repository::{LoanRepository, RepositoryError};
pub use router::loan_router;
pub use service::{LoanScreeningService, ScreeningServiceError};
pub use validation::ValidationError;
