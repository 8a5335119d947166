//! Learner progress: attempt tallies, mistake frequencies and mastery scores.
//!
//! [`ProgressRecord`] is a plain value updated by [`ProgressRecord::record`].
//! Storage goes through the [`ProgressStore`] trait; [`ProgressTracker`]
//! gives a record its session lifecycle (load at start, save after every
//! attempt and at the end) and absorbs storage failures.

pub mod error;
pub mod record;
pub mod store;
pub mod tracker;

pub use error::ProgressError;
pub use record::{Mastery, MistakeStat, ProgressRecord, Tally};
pub use store::{JsonFileProgressStore, MemoryProgressStore, ProgressStore, SnapshotHeader};
pub use tracker::ProgressTracker;
