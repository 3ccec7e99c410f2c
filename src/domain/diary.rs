//! Diary aggregate: the ordered list of entries

use crate::domain::Entry;
use crate::error::{HolterError, Result};
use serde::{Deserialize, Serialize};

/// All entries of a diary, in the order they were added.
///
/// Entries have no identity beyond their position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diary {
    entries: Vec<Entry>,
}

impl Diary {
    pub fn new() -> Self {
        Diary::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Result<&Entry> {
        self.entries.get(index).ok_or(HolterError::EntryOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Append a blank entry and return its index
    pub(crate) fn push_blank(&mut self) -> usize {
        self.entries.push(Entry::blank());
        self.entries.len() - 1
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Entry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(HolterError::EntryOutOfRange { index, len })
    }

    /// Serialize to the JSON stored in the key-value slot
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<Entry>> for Diary {
    fn from(entries: Vec<Entry>) -> Self {
        Diary { entries }
    }
}
