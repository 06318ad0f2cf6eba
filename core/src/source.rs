//! Record source seam and the time-bounded fetch cache.
//!
//! RULE: only the cache talks to the source. The pipeline reads rows
//! through `CachedSource` and never fetches directly.

use crate::error::DashResult;
use crate::record::RawRow;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Where raw rows come from. The production collaborator is a hosted
/// spreadsheet client; tests use in-memory vectors and the runner a
/// JSON file.
pub trait RecordSource {
    fn fetch(&self) -> DashResult<Vec<RawRow>>;
}

struct CacheSlot {
    rows: Arc<Vec<RawRow>>,
    fetched_at: Instant,
}

impl CacheSlot {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Explicit fetch cache: value + fetch timestamp + validity window.
///
/// Many readers may hold the returned `Arc` while one writer refreshes;
/// a reader never observes a half-written slot. Fetch errors propagate
/// to the caller (whose refresh policy retries) and are never cached.
pub struct CachedSource<S: RecordSource> {
    source: S,
    ttl: Duration,
    slot: RwLock<Option<CacheSlot>>,
}

impl<S: RecordSource> CachedSource<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Return the cached rows, re-fetching synchronously when the
    /// validity window has expired or nothing has been fetched yet.
    pub fn rows(&self) -> DashResult<Arc<Vec<RawRow>>> {
        if let Some(slot) = self.slot.read().expect("cache lock poisoned").as_ref() {
            if slot.is_fresh(self.ttl) {
                return Ok(Arc::clone(&slot.rows));
            }
        }

        let mut guard = self.slot.write().expect("cache lock poisoned");
        // Another writer may have refreshed while we waited on the lock.
        if let Some(slot) = guard.as_ref() {
            if slot.is_fresh(self.ttl) {
                return Ok(Arc::clone(&slot.rows));
            }
        }

        let rows = Arc::new(self.source.fetch()?);
        log::info!("record source refreshed: {} rows", rows.len());
        *guard = Some(CacheSlot {
            rows: Arc::clone(&rows),
            fetched_at: Instant::now(),
        });
        Ok(rows)
    }

    /// Drop the cached fetch; the next read hits the source.
    pub fn invalidate(&self) {
        *self.slot.write().expect("cache lock poisoned") = None;
    }
}
