//! Persistence boundary for progress records.
//!
//! Records are stored as a small JSON envelope: a [`SnapshotHeader`] for
//! format checks followed by the record itself. Both stores share the same
//! encoding, so a record written by one can be read by the other.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;
use crate::record::ProgressRecord;

/// Load and save progress records by learner key.
pub trait ProgressStore {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn load(&self, key: &str) -> Result<Option<ProgressRecord>, ProgressError>;

    fn save(&mut self, key: &str, record: &ProgressRecord) -> Result<(), ProgressError>;
}

/// Header for format checking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub magic: String,
    pub version: u32,
}

impl SnapshotHeader {
    pub const MAGIC: &'static str = "LINEQPRG";
    pub const VERSION: u32 = 1;

    pub fn current() -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: Self::VERSION,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.magic == Self::MAGIC && self.version == Self::VERSION
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    header: SnapshotHeader,
    record: &'a ProgressRecord,
}

#[derive(Deserialize)]
struct Envelope {
    header: SnapshotHeader,
    record: ProgressRecord,
}

pub(crate) fn encode(record: &ProgressRecord) -> Result<String, ProgressError> {
    let envelope = EnvelopeRef {
        header: SnapshotHeader::current(),
        record,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Parse and check a stored record. Anything unreadable is reported as corrupted.
pub(crate) fn decode(text: &str) -> Result<ProgressRecord, ProgressError> {
    let envelope: Envelope = serde_json::from_str(text)
        .map_err(|e| ProgressError::CorruptedProgressRecord(e.to_string()))?;
    if !envelope.header.is_valid() {
        return Err(ProgressError::CorruptedProgressRecord(format!(
            "unsupported header {} v{}",
            envelope.header.magic, envelope.header.version
        )));
    }
    envelope
        .record
        .check_consistency()
        .map_err(ProgressError::CorruptedProgressRecord)?;
    Ok(envelope.record)
}

/// Keeps encoded records in memory. Useful for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryProgressStore {
    entries: HashMap<String, String>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under `key`, bypassing encoding.
    pub fn insert_raw(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self, key: &str) -> Result<Option<ProgressRecord>, ProgressError> {
        self.entries.get(key).map(|text| decode(text)).transpose()
    }

    fn save(&mut self, key: &str, record: &ProgressRecord) -> Result<(), ProgressError> {
        let text = encode(record)?;
        self.entries.insert(key.to_string(), text);
        Ok(())
    }
}

/// One `<key>.progress.json` file per learner inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileProgressStore {
    dir: PathBuf,
}

impl JsonFileProgressStore {
    pub const EXTENSION: &'static str = "progress.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File used for `key`.
    ///
    /// Bytes outside `[A-Za-z0-9_-]` are written as `%XX`, so distinct keys
    /// never share a file. The empty key maps to `%`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut stem = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                stem.push(char::from(byte));
            } else {
                stem.push_str(&format!("%{:02X}", byte));
            }
        }
        if stem.is_empty() {
            stem.push('%');
        }
        self.dir.join(format!("{}.{}", stem, Self::EXTENSION))
    }
}

impl ProgressStore for JsonFileProgressStore {
    fn load(&self, key: &str) -> Result<Option<ProgressRecord>, ProgressError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        decode(&text).map(Some)
    }

    /// Atomic save: write to a temp file then rename.
    fn save(&mut self, key: &str, record: &ProgressRecord) -> Result<(), ProgressError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = tmp_path(&path);
        fs::write(&tmp, encode(record)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineq_ast::{Difficulty, PracticeMode};
    use lineq_engine::Validator;

    fn sample() -> ProgressRecord {
        let v = Validator::new();
        ProgressRecord::new()
            .record(PracticeMode::Guided, Difficulty::Easy, &v.validate_answer(4.0, 4.0), 1)
            .record(PracticeMode::Challenge, Difficulty::Hard, &v.validate_answer(4.0, -4.0), 2)
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryProgressStore::new();
        assert!(store.load("ana").unwrap().is_none());
        store.save("ana", &sample()).unwrap();
        assert_eq!(store.load("ana").unwrap(), Some(sample()));
        assert!(store.raw("ana").unwrap().contains(SnapshotHeader::MAGIC));
    }

    #[test]
    fn garbage_is_corrupted() {
        let mut store = MemoryProgressStore::new();
        store.insert_raw("ana", "{not json");
        assert!(matches!(
            store.load("ana"),
            Err(ProgressError::CorruptedProgressRecord(_))
        ));
    }

    #[test]
    fn wrong_header_is_corrupted() {
        let text = encode(&sample()).unwrap().replace(SnapshotHeader::MAGIC, "OTHERAPP");
        assert!(matches!(
            decode(&text),
            Err(ProgressError::CorruptedProgressRecord(msg)) if msg.contains("OTHERAPP")
        ));
    }

    #[test]
    fn inconsistent_record_is_corrupted() {
        let text = r#"{
            "header": {"magic": "LINEQPRG", "version": 1},
            "record": {"total_attempts": 1, "correct_attempts": 5}
        }"#;
        assert!(matches!(
            decode(text),
            Err(ProgressError::CorruptedProgressRecord(_))
        ));
    }

    #[test]
    fn keys_are_escaped_into_file_names() {
        let store = JsonFileProgressStore::new("/data");
        assert_eq!(
            store.path_for("../ana b"),
            PathBuf::from("/data/%2E%2E%2Fana%20b.progress.json")
        );
        assert_eq!(store.path_for("ana_b"), PathBuf::from("/data/ana_b.progress.json"));
        assert_eq!(store.path_for(""), PathBuf::from("/data/%.progress.json"));
    }

    #[test]
    fn similar_keys_get_separate_files() {
        let store = JsonFileProgressStore::new("/data");
        let keys = ["ana.b", "ana_b", "ana%2Eb", "ana b", "", "_", "%"];
        let paths: std::collections::HashSet<_> = keys.iter().map(|k| store.path_for(k)).collect();
        assert_eq!(paths.len(), keys.len());
    }
}
