use crate::screening::domain::CrimeGrade;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How long a resolved grade stays valid before it must be recomputed.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Reduce a free-text address to its stable cache key: lowercase, punctuation
/// stripped, whitespace runs collapsed to single spaces, trimmed. Idempotent.
pub fn normalize_address(address: &str) -> String {
    let mut normalized = String::with_capacity(address.len());
    let mut pending_space = false;

    for ch in address.chars() {
        if ch.is_whitespace() {
            pending_space = true;
        } else if ch.is_alphanumeric() {
            if pending_space && !normalized.is_empty() {
                normalized.push(' ');
            }
            pending_space = false;
            normalized.extend(ch.to_lowercase());
        }
        // Everything else (punctuation, symbols) is dropped without leaving a gap.
    }

    normalized
}

struct CacheEntry {
    grade: CrimeGrade,
    resolved_at: Instant,
}

/// Grade cache keyed by normalized address, with lazy expiry.
///
/// Owned by whoever constructs the resolver rather than living in a process
/// global, so tests can build a fresh instance and assert on its size. The
/// mutex keeps concurrent resolutions from corrupting the map; a racing
/// duplicate computation for the same key is acceptable.
pub struct GradeCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    freshness_window: Duration,
}

impl Default for GradeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeCache {
    pub fn new() -> Self {
        Self::with_freshness_window(FRESHNESS_WINDOW)
    }

    pub fn with_freshness_window(freshness_window: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            freshness_window,
        }
    }

    /// Fetch the cached grade for a normalized key. An entry older than the
    /// freshness window is evicted and reported as absent.
    pub fn get(&self, key: &str) -> Option<CrimeGrade> {
        let mut entries = self.entries.lock().expect("grade cache mutex poisoned");
        match entries.get(key) {
            Some(entry) if entry.resolved_at.elapsed() < self.freshness_window => Some(entry.grade),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a freshly resolved grade, replacing any previous entry for the key.
    pub fn insert(&self, key: String, grade: CrimeGrade) {
        let mut entries = self.entries.lock().expect("grade cache mutex poisoned");
        entries.insert(
            key,
            CacheEntry {
                grade,
                resolved_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("grade cache mutex poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .expect("grade cache mutex poisoned")
            .clear();
    }
}
