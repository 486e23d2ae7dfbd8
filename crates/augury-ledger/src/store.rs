//! Durable key-value slots for ledger state.
//!
//! The whole ledger is stored as a single JSON blob under one key, wrapped in
//! a versioned envelope:
//!
//! ```json
//! {"state": {"history": {"2024-03-01": {"love": {...}}}, "currentFortune": null}, "version": 0}
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use augury_core::Reading;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{History, Ledger};

/// Envelope version this build reads and writes.
pub const STATE_VERSION: u32 = 0;

/// A durable key-value slot.
pub trait Storage: Send {
    /// Read the value stored under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateRef<'a> {
    history: &'a History,
    current_fortune: Option<&'a Reading>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: StateRef<'a>,
    version: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct State {
    #[serde(default)]
    history: History,
    #[serde(default)]
    current_fortune: Option<Reading>,
}

#[derive(Deserialize)]
struct Envelope {
    state: State,
    #[serde(default)]
    version: u32,
}

/// Serialize the ledger's history and current fortune.
pub fn encode(ledger: &Ledger) -> LedgerResult<String> {
    let envelope = EnvelopeRef {
        state: StateRef {
            history: ledger.history(),
            current_fortune: ledger.current_fortune(),
        },
        version: STATE_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Rebuild a ledger from a blob produced by [`encode`].
pub fn decode(blob: &str) -> LedgerResult<Ledger> {
    let envelope: Envelope = serde_json::from_str(blob)?;
    if envelope.version != STATE_VERSION {
        return Err(LedgerError::UnsupportedVersion {
            found: envelope.version,
            expected: STATE_VERSION,
        });
    }
    check_consistency(&envelope.state)?;
    Ok(Ledger::from_parts(
        envelope.state.history,
        envelope.state.current_fortune,
    ))
}

/// Every reading must sit under its own day and category, and the current
/// fortune must be one of the recorded readings.
fn check_consistency(state: &State) -> LedgerResult<()> {
    for (day, bucket) in &state.history {
        for (category, reading) in bucket {
            if reading.date != *day || reading.category != *category {
                return Err(LedgerError::Inconsistent(format!(
                    "reading {} ({} on {}) filed under {category} on {day}",
                    reading.id, reading.category, reading.date
                )));
            }
        }
    }

    if let Some(current) = &state.current_fortune {
        let recorded = state
            .history
            .get(&current.date)
            .and_then(|bucket| bucket.get(&current.category));
        if recorded != Some(current) {
            return Err(LedgerError::Inconsistent(format!(
                "current fortune {} is not in the history",
                current.id
            )));
        }
    }
    Ok(())
}

/// In-process storage. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per slot inside a directory.
///
/// Writes land in a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous state intact.
#[derive(Debug, Clone)]
pub struct JsonDirStorage {
    dir: PathBuf,
}

impl JsonDirStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file backing `key`.
    pub fn path_for(&self, key: &str) -> LedgerResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(LedgerError::Unavailable(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for JsonDirStorage {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(LedgerError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| LedgerError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| LedgerError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| LedgerError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augury_core::Category;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        let mut rng = StdRng::seed_from_u64(7);
        let d1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        for (day, category) in [
            (d1, Category::Love),
            (d1, Category::Wealth),
            (d2, Category::Career),
        ] {
            let instant = day.and_hms_opt(9, 30, 0).unwrap().and_utc();
            ledger.read_fortune(category, day, instant, &mut rng);
        }
        ledger
    }

    #[test]
    fn encode_decode_roundtrip() {
        let ledger = sample_ledger();
        let restored = decode(&encode(&ledger).unwrap()).unwrap();
        assert_eq!(restored.history(), ledger.history());
        assert_eq!(restored.current_fortune(), ledger.current_fortune());
    }

    #[test]
    fn encoded_shape() {
        let ledger = sample_ledger();
        let value: serde_json::Value = serde_json::from_str(&encode(&ledger).unwrap()).unwrap();
        assert_eq!(value["version"], 0);
        let love = &value["state"]["history"]["2024-03-01"]["love"];
        assert_eq!(love["category"], "love");
        assert!(love["luckyColor"].is_string());
        assert_eq!(value["state"]["currentFortune"]["category"], "career");
    }

    #[test]
    fn decode_empty_state() {
        let ledger = decode(r#"{"state":{"history":{},"currentFortune":null},"version":0}"#).unwrap();
        assert!(ledger.is_empty());
        assert!(ledger.current_fortune().is_none());
    }

    #[test]
    fn decode_rejects_bad_rating() {
        let blob = r#"{"state":{"history":{"2024-03-01":{"love":{
            "id":"love-2024-03-01-1","category":"love","message":"m","advice":"a",
            "luckyColor":"c","rating":9,"date":"2024-03-01"}}}},"version":0}"#;
        assert!(matches!(decode(blob), Err(LedgerError::Json(_))));
    }

    #[test]
    fn decode_rejects_future_version() {
        let err = decode(r#"{"state":{},"version":3}"#).unwrap_err();
        assert!(matches!(err, LedgerError::UnsupportedVersion { found: 3, .. }));
    }

    fn love_entry(key_day: &str, category: &str, date: &str, id: &str) -> String {
        format!(
            r#"{{"state":{{"history":{{"{key_day}":{{"love":{{
            "id":"{id}","category":"{category}","message":"m","advice":"a",
            "luckyColor":"c","rating":4,"date":"{date}"}}}}}}}},"version":0}}"#
        )
    }

    #[test]
    fn decode_rejects_reading_under_wrong_category() {
        let blob = love_entry("2024-03-01", "career", "2024-03-01", "career-2024-03-01-1");
        assert!(matches!(decode(&blob), Err(LedgerError::Inconsistent(_))));
    }

    #[test]
    fn decode_rejects_reading_under_wrong_day() {
        let blob = love_entry("2024-03-01", "love", "2024-02-11", "love-2024-02-11-1");
        assert!(matches!(decode(&blob), Err(LedgerError::Inconsistent(_))));
    }

    #[test]
    fn decode_rejects_dangling_current_fortune() {
        let blob = r#"{"state":{"history":{},"currentFortune":{
            "id":"love-2024-03-01-1","category":"love","message":"m","advice":"a",
            "luckyColor":"c","rating":4,"date":"2024-03-01"}},"version":0}"#;
        assert!(matches!(decode(blob), Err(LedgerError::Inconsistent(_))));
    }

    #[test]
    fn decode_accepts_extreme_stamp_and_keeps_reading() {
        let blob = love_entry(
            "2024-02-29",
            "love",
            "2024-02-29",
            "love-2024-02-29-9223372036854775807",
        );
        let mut ledger = decode(&blob).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let instant = today.and_hms_opt(8, 0, 0).unwrap().and_utc();

        let reading = ledger.read_fortune(Category::Love, today, instant, &mut rng);
        assert_eq!(reading.category, Category::Love);
        assert_eq!(reading.date, today);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn memory_storage_shares_slots() {
        let mut storage = MemoryStorage::new();
        let view = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(view.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(view.len(), 1);
        assert!(view.get("missing").unwrap().is_none());
    }

    #[test]
    fn json_dir_storage_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonDirStorage::new(dir.path().join("nested"));
        assert!(storage.get("fortune-storage").unwrap().is_none());

        storage.set("fortune-storage", "{\"a\":1}").unwrap();
        storage.set("fortune-storage", "{\"a\":2}").unwrap();
        assert_eq!(
            storage.get("fortune-storage").unwrap().as_deref(),
            Some("{\"a\":2}")
        );
        assert!(dir.path().join("nested/fortune-storage.json").exists());
        assert!(!dir.path().join("nested/.fortune-storage.json.tmp").exists());
    }

    #[test]
    fn json_dir_storage_rejects_path_keys() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonDirStorage::new(dir.path());
        assert!(storage.set("../escape", "x").is_err());
        assert!(storage.get("").is_err());
    }
}
