//! Diary entry model and typed field updates

use crate::domain::{Activity, SymptomSet};
use crate::error::{HolterError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One diary record.
///
/// Unset fields are stored as empty strings so the persisted shape matches
/// the browser diary's local-storage layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(with = "blank_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(with = "blank_as_none")]
    pub time: Option<NaiveTime>,
    #[serde(with = "blank_as_none")]
    pub activity: Option<Activity>,
    pub symptoms: SymptomSet,
    pub notes: String,
}

impl Entry {
    /// Entry with every field unset
    pub fn blank() -> Self {
        Entry::default()
    }

    /// Set exactly one field
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Date(date) => self.date = date,
            FieldUpdate::Time(time) => self.time = time,
            FieldUpdate::Activity(activity) => self.activity = activity,
            FieldUpdate::Notes(notes) => self.notes = notes,
        }
    }

    pub fn date_text(&self) -> String {
        self.date.map(|d| d.to_text()).unwrap_or_default()
    }

    pub fn time_text(&self) -> String {
        self.time.map(|t| t.to_text()).unwrap_or_default()
    }

    pub fn activity_text(&self) -> &'static str {
        self.activity.map(|a| a.label()).unwrap_or("")
    }
}

/// Editable entry fields. Symptoms are toggled, not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Date,
    Time,
    Activity,
    Notes,
}

impl EntryField {
    pub fn name(&self) -> &'static str {
        match self {
            EntryField::Date => "date",
            EntryField::Time => "time",
            EntryField::Activity => "activity",
            EntryField::Notes => "notes",
        }
    }

    /// Parse user text into an update for this field.
    ///
    /// Blank input clears the field. `now` anchors the relative words
    /// `today`, `yesterday` and `now`.
    pub fn parse_value(&self, raw: &str, now: NaiveDateTime) -> Result<FieldUpdate> {
        let trimmed = raw.trim();

        match self {
            EntryField::Notes => Ok(FieldUpdate::Notes(raw.to_string())),
            _ if trimmed.is_empty() => Ok(self.cleared()),
            EntryField::Activity => {
                Activity::from_str(trimmed).map(|a| FieldUpdate::Activity(Some(a)))
            }
            EntryField::Date => {
                let date = match trimmed.to_lowercase().as_str() {
                    "today" => Some(now.date()),
                    "yesterday" => Some(now.date() - Duration::days(1)),
                    _ => NaiveDate::from_text(trimmed),
                };
                date.map(|d| FieldUpdate::Date(Some(d)))
                    .ok_or_else(|| self.invalid(raw))
            }
            EntryField::Time => {
                let time = if trimmed.eq_ignore_ascii_case("now") {
                    Some(now.time())
                } else {
                    NaiveTime::from_text(trimmed)
                };
                // Minute precision, like a time picker
                time.and_then(|t| t.with_second(0))
                    .and_then(|t| t.with_nanosecond(0))
                    .map(|t| FieldUpdate::Time(Some(t)))
                    .ok_or_else(|| self.invalid(raw))
            }
        }
    }

    fn cleared(&self) -> FieldUpdate {
        match self {
            EntryField::Date => FieldUpdate::Date(None),
            EntryField::Time => FieldUpdate::Time(None),
            EntryField::Activity => FieldUpdate::Activity(None),
            EntryField::Notes => FieldUpdate::Notes(String::new()),
        }
    }

    fn invalid(&self, raw: &str) -> HolterError {
        HolterError::InvalidValue {
            field: self.name().to_string(),
            value: raw.to_string(),
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntryField {
    type Err = HolterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(EntryField::Date),
            "time" => Ok(EntryField::Time),
            "activity" => Ok(EntryField::Activity),
            "notes" => Ok(EntryField::Notes),
            _ => Err(HolterError::InvalidField(s.to_string())),
        }
    }
}

/// A new value for one field; `None` unsets it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Date(Option<NaiveDate>),
    Time(Option<NaiveTime>),
    Activity(Option<Activity>),
    Notes(String),
}

impl FieldUpdate {
    pub fn field(&self) -> EntryField {
        match self {
            FieldUpdate::Date(_) => EntryField::Date,
            FieldUpdate::Time(_) => EntryField::Time,
            FieldUpdate::Activity(_) => EntryField::Activity,
            FieldUpdate::Notes(_) => EntryField::Notes,
        }
    }
}

/// Text form used in storage and exports
trait FieldText: Sized {
    fn to_text(&self) -> String;
    fn from_text(text: &str) -> Option<Self>;
}

impl FieldText for NaiveDate {
    fn to_text(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }

    fn from_text(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
    }
}

impl FieldText for NaiveTime {
    fn to_text(&self) -> String {
        if self.nanosecond() != 0 {
            self.format("%H:%M:%S%.f").to_string()
        } else if self.second() != 0 {
            self.format("%H:%M:%S").to_string()
        } else {
            self.format("%H:%M").to_string()
        }
    }

    fn from_text(text: &str) -> Option<Self> {
        NaiveTime::parse_from_str(text, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S%.f"))
            .ok()
    }
}

impl FieldText for Activity {
    fn to_text(&self) -> String {
        self.label().to_string()
    }

    fn from_text(text: &str) -> Option<Self> {
        Activity::from_str(text).ok()
    }
}

/// Serde adapter mapping `None` to `""` and back
mod blank_as_none {
    use super::FieldText;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: FieldText,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.to_text()),
            None => serializer.serialize_str(""),
        }
    }

    pub(super) fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FieldText,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(None);
        }
        T::from_text(&text)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unrecognised value '{}'", text)))
    }
}
