//! Address-to-crime-grade resolution with a freshness-bounded cache.

mod cache;
mod resolver;
mod source;

pub use cache::{normalize_address, GradeCache, FRESHNESS_WINDOW};
pub use resolver::{GradeResolver, LOOKUP_TIMEOUT};
pub use source::{classify_address, CrimeDataSource, LookupError, SimulatedCrimeDataSource};
