use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::paste::{normalize_record, parse_collection, timestamp, Paste};
use crate::storage::Storage;
use crate::{AppError, AppResult};

/// Key holding the serialized paste collection.
pub const STORAGE_KEY: &str = "save-text.pastes";

/// Scratch key written and removed by [`PasteStore::storage_available`].
pub const PROBE_KEY: &str = "save-text.pastes.__probe__";

/// How new paste ids are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4.
    #[default]
    Uuid,
    /// `paste-{unix millis}-{random hex}`.
    Timestamp,
}

impl IdStrategy {
    pub fn generate(self, now: DateTime<Utc>) -> String {
        match self {
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
            IdStrategy::Timestamp => {
                let suffix: u64 = rand::thread_rng().gen();
                format!("paste-{}-{suffix:x}", now.timestamp_millis())
            }
        }
    }
}

/// Paste collection persisted as one JSON array under [`STORAGE_KEY`].
///
/// Every mutation reads the whole collection and writes it back, with no
/// check for concurrent writers sharing the same storage.
#[derive(Debug, Clone)]
pub struct PasteStore<S> {
    storage: S,
    ids: IdStrategy,
}

impl<S: Storage> PasteStore<S> {
    pub fn new(storage: S) -> Self {
        PasteStore {
            storage,
            ids: IdStrategy::default(),
        }
    }

    pub fn with_id_strategy(storage: S, ids: IdStrategy) -> Self {
        PasteStore { storage, ids }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Check that the storage accepts writes by setting and removing a probe key.
    pub fn storage_available(&mut self) -> bool {
        let probe = self
            .storage
            .set_item(PROBE_KEY, "ok")
            .and_then(|()| self.storage.remove_item(PROBE_KEY));

        match probe {
            Ok(()) => true,
            Err(e) => {
                error!("storage is not available: {e}");
                false
            }
        }
    }

    /// All pastes, most recently created first.
    pub fn list_pastes(&self) -> Vec<Paste> {
        let mut pastes = self.read_all();
        pastes.sort_by(|a, b| newest_first(a.created_instant(), b.created_instant()));
        pastes
    }

    /// Create a paste from `content`, trimmed, stamped with the current time.
    pub fn create_paste(&mut self, content: &str) -> AppResult<Paste> {
        self.create_paste_at(content, Utc::now())
    }

    pub fn create_paste_at(&mut self, content: &str, now: DateTime<Utc>) -> AppResult<Paste> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::EmptyContent);
        }

        let paste = Paste {
            id: self.ids.generate(now),
            content: content.to_owned(),
            created_at: timestamp(now),
        };

        let mut pastes = self.read_all();
        pastes.push(paste.clone());
        self.write_all(&pastes)?;

        info!(
            "new paste: id='{id}', size={size}",
            id = paste.id,
            size = paste.content.len()
        );

        Ok(paste)
    }

    pub fn get_paste(&self, id: &str) -> Option<Paste> {
        self.read_all().into_iter().find(|paste| paste.id == id)
    }

    /// Remove every paste with this id. Returns `false` if none matched.
    pub fn delete_paste(&mut self, id: &str) -> AppResult<bool> {
        let pastes = self.read_all();
        let before = pastes.len();
        let remaining: Vec<Paste> = pastes.into_iter().filter(|paste| paste.id != id).collect();

        if remaining.len() == before {
            return Ok(false);
        }

        self.write_all(&remaining)?;
        info!("deleted paste: id='{id}'");
        Ok(true)
    }

    fn read_all(&self) -> Vec<Paste> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("unable to read saved pastes: {e}");
                return Vec::new();
            }
        };

        let Some(records) = parse_collection(&raw) else {
            return Vec::new();
        };

        let now = Utc::now();
        let pastes: Vec<Paste> = records
            .iter()
            .map(|record| normalize_record(record, now))
            .collect();
        debug!("read {} pastes", pastes.len());
        pastes
    }

    fn write_all(&mut self, pastes: &[Paste]) -> AppResult<()> {
        let raw = serde_json::to_string(pastes)?;
        self.storage.set_item(STORAGE_KEY, &raw)
    }
}

/// Descending by instant; unparseable timestamps go last.
fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
