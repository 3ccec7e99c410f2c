//! Entry store: the diary plus its persistence slot

use crate::domain::{Diary, FieldUpdate, Symptom};
use crate::error::{HolterError, Result};
use crate::infrastructure::KeyValueStore;
use tracing::{debug, warn};

/// Storage key the diary is kept under
pub const STORAGE_KEY: &str = "holterEntries";

/// Key an unreadable slot is copied to before it is first overwritten
pub const BACKUP_KEY: &str = "holterEntries-backup";

/// Owns the diary for one session.
///
/// Every mutation writes the whole diary back to the store before
/// returning. If that write fails the error is returned but the in-memory
/// change is kept.
#[derive(Debug)]
pub struct EntryStore<S> {
    store: S,
    diary: Diary,
    unreadable: Option<String>,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Hydrate from the store. A missing, unreadable or corrupt slot yields
    /// an empty diary.
    ///
    /// A corrupt slot is copied to [`BACKUP_KEY`] before the first write
    /// replaces it.
    pub fn load(store: S) -> Self {
        let mut unreadable = None;
        let diary = match store.get(STORAGE_KEY) {
            Ok(Some(json)) => match Diary::from_json(&json) {
                Ok(diary) => diary,
                Err(e) => {
                    warn!(error = %e, "stored diary is unreadable, starting empty");
                    unreadable = Some(json);
                    Diary::new()
                }
            },
            Ok(None) => Diary::new(),
            Err(e) => {
                warn!(error = %e, "failed to read diary storage, starting empty");
                Diary::new()
            }
        };
        debug!(entries = diary.len(), "diary loaded");

        EntryStore {
            store,
            diary,
            unreadable,
        }
    }

    /// Append a blank entry; returns its index
    pub fn add_entry(&mut self) -> Result<usize> {
        let index = self.diary.push_blank();
        self.sync()?;
        Ok(index)
    }

    /// Set one field of the entry at `index`
    pub fn update_field(&mut self, index: usize, update: FieldUpdate) -> Result<()> {
        debug!(index, field = %update.field(), "updating entry");
        self.diary.get_mut(index)?.apply(update);
        self.sync()
    }

    /// Check or uncheck a symptom; returns whether it is now checked
    pub fn toggle_symptom(&mut self, index: usize, symptom: Symptom) -> Result<bool> {
        let checked = self.diary.get_mut(index)?.symptoms.toggle(symptom);
        debug!(index, symptom = %symptom, checked, "toggled symptom");
        self.sync()?;
        Ok(checked)
    }

    /// Read-only view of the current diary
    pub fn snapshot(&self) -> &Diary {
        &self.diary
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn sync(&mut self) -> Result<()> {
        if let Some(raw) = &self.unreadable {
            self.store.set(BACKUP_KEY, raw).map_err(|e| {
                HolterError::Storage(format!(
                    "Failed to back up unreadable diary, not overwriting it: {}",
                    e
                ))
            })?;
            warn!(key = BACKUP_KEY, "unreadable diary backed up");
            self.unreadable = None;
        }

        let json = self.diary.to_json()?;
        self.store.set(STORAGE_KEY, &json).map_err(|e| {
            HolterError::Storage(format!(
                "Failed to save diary ({} entries kept in memory): {}",
                self.diary.len(),
                e
            ))
        })?;
        debug!(entries = self.diary.len(), bytes = json.len(), "diary saved");
        Ok(())
    }
}
