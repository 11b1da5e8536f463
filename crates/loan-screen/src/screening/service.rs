use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::crime::{CrimeDataSource, GradeResolver};
use super::domain::{LoanId, LoanRecord, LoanSubmission};
use super::eligibility::{EligibilityConfig, EligibilityEngine};
use super::repository::{LoanRepository, RepositoryError};
use super::validation::{self, ValidationError};

/// Service composing intake validation, grade resolution, the eligibility
/// engine, and the repository.
///
/// The id sequence is owned per service instance, not process-wide, so
/// independently constructed services number their loans independently.
pub struct LoanScreeningService<R, S> {
    repository: Arc<R>,
    resolver: Arc<GradeResolver<S>>,
    engine: Arc<EligibilityEngine>,
    sequence: AtomicU64,
}

impl<R, S> LoanScreeningService<R, S>
where
    R: LoanRepository + 'static,
    S: CrimeDataSource + 'static,
{
    pub fn new(
        repository: Arc<R>,
        resolver: Arc<GradeResolver<S>>,
        config: EligibilityConfig,
    ) -> Self {
        Self {
            repository,
            resolver,
            engine: Arc::new(EligibilityEngine::new(config)),
            sequence: AtomicU64::new(1),
        }
    }

    fn next_loan_id(&self) -> LoanId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        LoanId(format!("loan-{id:06}"))
    }

    /// Screen a new application and persist the resulting decision record.
    pub async fn submit(
        &self,
        submission: LoanSubmission,
    ) -> Result<LoanRecord, ScreeningServiceError> {
        let application = validation::validate(submission)?;

        let grade = self.resolver.resolve(&application.property_address).await;
        let outcome = self.engine.evaluate(&application, grade);

        let now = Utc::now();
        let record = LoanRecord {
            id: self.next_loan_id(),
            application,
            eligible: outcome.eligible,
            reason: outcome.reason,
            crime_grade: grade,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        info!(
            loan_id = %stored.id.0,
            eligible = stored.eligible,
            grade = %stored.crime_grade,
            "loan application screened"
        );
        Ok(stored)
    }

    /// Fetch a stored decision record.
    pub fn get(&self, id: &LoanId) -> Result<LoanRecord, ScreeningServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<LoanRecord>, ScreeningServiceError> {
        Ok(self.repository.list()?)
    }

    /// Replace an application's data and re-screen it. The decision is always
    /// recomputed from the new fields and a freshly resolved grade; only the
    /// identifier and creation timestamp survive.
    pub async fn update(
        &self,
        id: &LoanId,
        submission: LoanSubmission,
    ) -> Result<LoanRecord, ScreeningServiceError> {
        let existing = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let application = validation::validate(submission)?;
        let grade = self.resolver.resolve(&application.property_address).await;
        let outcome = self.engine.evaluate(&application, grade);

        let record = LoanRecord {
            id: existing.id,
            application,
            eligible: outcome.eligible,
            reason: outcome.reason,
            crime_grade: grade,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        Ok(self.repository.update(record)?)
    }

    pub fn delete(&self, id: &LoanId) -> Result<(), ScreeningServiceError> {
        Ok(self.repository.delete(id)?)
    }

    /// Resolver access for cache inspection and operational reset.
    pub fn resolver(&self) -> &GradeResolver<S> {
        &self.resolver
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
