//! Domain layer - Diary model, enumerations and CSV rendering

pub mod activity;
pub mod diary;
pub mod entry;
pub mod export;
pub mod symptom;

pub use activity::Activity;
pub use diary::Diary;
pub use entry::{Entry, EntryField, FieldUpdate};
pub use export::{diary_to_csv, EXPORT_FILENAME, EXPORT_MIME_TYPE};
pub use symptom::{Symptom, SymptomSet};
