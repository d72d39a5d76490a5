//! Resume state persistence
//!
//! Saves and restores the `{ resumeData, selectedTemplate }` pair under a
//! single fixed key of a [`KeyValueStorage`] medium. Every save overwrites
//! the previous value.
//!
//! Loading is forgiving:
//! - no stored value: defaults
//! - unparseable value: defaults; the raw value is copied to
//!   `<key>.corrupt` so the next save does not destroy it
//! - unknown `selectedTemplate`: document kept, template reset to `modern`
//! - missing or unknown fields inside the document: defaulted / ignored

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::backend::KeyValueStorage;
use super::error::{StorageError, StorageResult};
use crate::models::ResumeDocument;
use crate::snapshot::Snapshot;
use crate::template::TemplateId;

/// Default storage key
pub const DEFAULT_STORAGE_KEY: &str = "resume-storage";

/// Stored shape, with the template kept as a raw string so an unknown value
/// does not invalidate the whole document
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredState {
    #[serde(default)]
    resume_data: ResumeDocument,
    /// Any JSON value; only a known template name is used
    #[serde(default)]
    selected_template: Option<Value>,
}

impl From<StoredState> for Snapshot {
    fn from(stored: StoredState) -> Self {
        let template = match stored.selected_template {
            Some(Value::String(name)) => match name.parse::<TemplateId>() {
                Ok(id) => id,
                Err(e) => {
                    warn!("{}; falling back to {}", e, TemplateId::default());
                    TemplateId::default()
                }
            },
            None | Some(Value::Null) => TemplateId::default(),
            Some(other) => {
                warn!(
                    "Stored template {} is not a name; falling back to {}",
                    other,
                    TemplateId::default()
                );
                TemplateId::default()
            }
        };
        Snapshot::new(stored.resume_data, template)
    }
}

/// Persistence adapter for resume state
pub struct Persistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> Persistence<S> {
    /// Create an adapter storing under `key`
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Create an adapter storing under [`DEFAULT_STORAGE_KEY`]
    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY)
    }

    /// Storage key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying medium
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Key that receives a copy of unparseable state
    pub fn backup_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    /// Check whether state has been saved
    pub fn exists(&self) -> StorageResult<bool> {
        Ok(self.storage.read(&self.key)?.is_some())
    }

    /// Serialize and store the full state, replacing any previous value
    pub fn save(&self, state: &Snapshot) -> StorageResult<()> {
        let json = serde_json::to_string(state)?;
        self.storage.write(&self.key, &json)?;
        debug!(key = %self.key, bytes = json.len(), "Saved resume state");
        Ok(())
    }

    /// Load stored state
    ///
    /// Returns `None` if nothing is stored and `InvalidFormat` if the stored
    /// value cannot be parsed.
    pub fn load(&self) -> StorageResult<Option<Snapshot>> {
        let Some(raw) = self.storage.read(&self.key)? else {
            return Ok(None);
        };
        parse_state(&self.key, &raw).map(Some)
    }

    /// Load stored state, falling back to defaults
    ///
    /// Never fails. Problems are logged.
    pub fn load_or_default(&self) -> Snapshot {
        let parsed = match self.storage.read(&self.key) {
            Ok(Some(raw)) => parse_state(&self.key, &raw),
            Ok(None) => {
                info!(key = %self.key, "No saved resume found, starting empty");
                return Snapshot::default();
            }
            // Unreadable bytes are malformed state, not a medium failure
            Err(e @ StorageError::InvalidFormat { .. }) => Err(e),
            Err(e) => {
                warn!(key = %self.key, "Could not read saved resume: {}", e);
                return Snapshot::default();
            }
        };

        match parsed {
            Ok(state) => {
                info!(key = %self.key, "Restored saved resume");
                state
            }
            Err(e) => {
                self.back_up(&e);
                Snapshot::default()
            }
        }
    }

    /// Copy the stored value aside so the next save cannot destroy it
    fn back_up(&self, cause: &StorageError) {
        let backup_key = self.backup_key();
        match self.storage.copy(&self.key, &backup_key) {
            Ok(()) => {
                let err = StorageError::CorruptState {
                    key: self.key.clone(),
                    backup_key,
                    details: cause.to_string(),
                };
                warn!("{}", err);
            }
            Err(backup_err) => {
                warn!(key = %self.key, "{}; backup failed: {}", cause, backup_err);
            }
        }
    }

    /// Remove stored state
    pub fn clear(&self) -> StorageResult<()> {
        self.storage.remove(&self.key)
    }
}

fn parse_state(key: &str, raw: &str) -> StorageResult<Snapshot> {
    serde_json::from_str::<StoredState>(raw)
        .map(Snapshot::from)
        .map_err(|e| StorageError::InvalidFormat {
            key: key.to_string(),
            details: e.to_string(),
        })
}
