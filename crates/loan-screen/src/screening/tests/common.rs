use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::screening::crime::{CrimeDataSource, GradeResolver, LookupError};
use crate::screening::domain::{LoanId, LoanRecord, LoanSubmission};
use crate::screening::repository::{LoanRepository, RepositoryError};
use crate::screening::{EligibilityConfig, LoanScreeningService, SimulatedCrimeDataSource};

pub(super) fn submission() -> LoanSubmission {
    LoanSubmission {
        applicant_name: "Ada Applicant".to_string(),
        property_address: "100 Hills Drive".to_string(),
        credit_score: 750,
        monthly_income: 10_000.0,
        requested_amount: 150_000.0,
        loan_term_months: 24,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<LoanId, LoanRecord>>>,
}

impl LoanRepository for MemoryRepository {
    fn insert(&self, record: LoanRecord) -> Result<LoanRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: LoanRecord) -> Result<LoanRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record.clone());
            Ok(record)
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &LoanId) -> Result<Option<LoanRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &LoanId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<LoanRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(records)
    }
}

/// Repository that rejects every insert, for conflict-path tests.
pub(super) struct ConflictRepository;

impl LoanRepository for ConflictRepository {
    fn insert(&self, _record: LoanRecord) -> Result<LoanRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: LoanRecord) -> Result<LoanRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &LoanId) -> Result<Option<LoanRecord>, RepositoryError> {
        Ok(None)
    }

    fn delete(&self, _id: &LoanId) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<LoanRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Repository that is always down, for failure-path tests.
pub(super) struct UnavailableRepository;

impl LoanRepository for UnavailableRepository {
    fn insert(&self, _record: LoanRecord) -> Result<LoanRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _record: LoanRecord) -> Result<LoanRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &LoanId) -> Result<Option<LoanRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn delete(&self, _id: &LoanId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<LoanRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

/// External source returning a fixed raw payload, for grade-validation tests.
#[derive(Clone)]
pub(super) struct FixedSource(pub(super) String);

impl CrimeDataSource for FixedSource {
    async fn lookup(&self, _address: &str) -> Result<String, LookupError> {
        Ok(self.0.clone())
    }
}

/// External source that never answers within any reasonable timeout.
pub(super) struct StalledSource;

impl CrimeDataSource for StalledSource {
    async fn lookup(&self, _address: &str) -> Result<String, LookupError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(LookupError::Unavailable)
    }
}

pub(super) fn simulated_resolver() -> GradeResolver<SimulatedCrimeDataSource> {
    GradeResolver::new(SimulatedCrimeDataSource)
}

pub(super) fn build_service() -> (
    LoanScreeningService<MemoryRepository, SimulatedCrimeDataSource>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = LoanScreeningService::new(
        repository.clone(),
        Arc::new(simulated_resolver()),
        EligibilityConfig::default(),
    );
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
