use super::cache::{normalize_address, GradeCache};
use super::source::{classify_address, CrimeDataSource};
use crate::screening::domain::CrimeGrade;
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on a single external lookup before resolution degrades to the
/// keyword classifier.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Maps property addresses to crime grades, memoizing results per normalized
/// address for the cache's freshness window.
///
/// Resolution is infallible by construction: external failures, timeouts, and
/// malformed grades all degrade to a deterministic valid grade, never an error.
pub struct GradeResolver<S> {
    cache: GradeCache,
    source: S,
    lookup_timeout: Duration,
}

impl<S> GradeResolver<S>
where
    S: CrimeDataSource,
{
    pub fn new(source: S) -> Self {
        Self::with_cache(source, GradeCache::new())
    }

    pub fn with_cache(source: S, cache: GradeCache) -> Self {
        Self {
            cache,
            source,
            lookup_timeout: LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    /// Resolve the grade for a raw address. Cache hits within the freshness
    /// window return immediately; otherwise the external source is consulted
    /// under the lookup timeout, falling back to keyword classification, and
    /// the fresh grade is cached.
    pub async fn resolve(&self, address: &str) -> CrimeGrade {
        let key = normalize_address(address);
        if let Some(grade) = self.cache.get(&key) {
            debug!(%grade, "crime grade served from cache");
            return grade;
        }

        let grade = match tokio::time::timeout(self.lookup_timeout, self.source.lookup(address))
            .await
        {
            Ok(Ok(raw)) => CrimeGrade::from_external(&raw),
            Ok(Err(err)) => {
                debug!(%err, "crime data lookup failed, classifying by keywords");
                classify_address(&key)
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.lookup_timeout.as_secs(),
                    "crime data lookup timed out, classifying by keywords"
                );
                classify_address(&key)
            }
        };

        self.cache.insert(key, grade);
        grade
    }

    /// Cache access for operational inspection and reset.
    pub fn cache(&self) -> &GradeCache {
        &self.cache
    }
}
