use std::time::{SystemTime, UNIX_EPOCH};

use lineq_ast::{Difficulty, PracticeMode};
use lineq_engine::ValidationResult;
use tracing::{debug, info, warn};

use crate::record::ProgressRecord;
use crate::store::ProgressStore;

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// A learner's record bound to the store it came from.
///
/// Loaded once at [`open`](Self::open), saved after every attempt and again on
/// [`flush`](Self::flush). Storage failures are logged and never surface to
/// the learner: an unreadable record is replaced by a fresh one and a failed
/// save leaves the in-memory record intact.
pub struct ProgressTracker<S: ProgressStore> {
    store: S,
    key: String,
    record: ProgressRecord,
    clock: fn() -> u64,
}

impl<S: ProgressStore> ProgressTracker<S> {
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let record = match store.load(&key) {
            Ok(Some(record)) => {
                debug!(
                    target: "lineq::progress",
                    key = %key,
                    attempts = record.total_attempts,
                    "loaded progress"
                );
                record
            }
            Ok(None) => {
                info!(target: "lineq::progress", key = %key, "no saved progress, starting fresh");
                ProgressRecord::new()
            }
            Err(e) => {
                warn!(
                    target: "lineq::progress",
                    key = %key,
                    error = %e,
                    "discarding unreadable progress"
                );
                ProgressRecord::new()
            }
        };
        Self {
            store,
            key,
            record,
            clock: unix_now,
        }
    }

    /// Replace the timestamp source used for `last_seen`.
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fold one attempt into the record and persist it.
    pub fn record_attempt(
        &mut self,
        mode: PracticeMode,
        difficulty: Difficulty,
        result: &ValidationResult,
    ) -> &ProgressRecord {
        self.record = self
            .record
            .record(mode, difficulty, result, (self.clock)());
        self.persist();
        &self.record
    }

    pub fn set_external_signals(
        &mut self,
        concept_understanding: Option<f64>,
        application_ability: Option<f64>,
    ) {
        self.record
            .set_external_signals(concept_understanding, application_ability);
        self.persist();
    }

    /// Save at session end. Returns whether the save succeeded.
    pub fn flush(&mut self) -> bool {
        self.persist()
    }

    fn persist(&mut self) -> bool {
        match self.store.save(&self.key, &self.record) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    target: "lineq::progress",
                    key = %self.key,
                    error = %e,
                    "failed to save progress"
                );
                false
            }
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
