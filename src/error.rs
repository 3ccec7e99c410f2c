//! Error types for holter

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{Activity, Symptom};

/// Main error type for holter application
#[derive(Debug, Error)]
pub enum HolterError {
    #[error("Not a holter directory: {0}")]
    NotHolterDirectory(PathBuf),

    #[error("Entry {} does not exist (diary has {} entries)", .index.saturating_add(1), .len)]
    EntryOutOfRange { index: usize, len: usize },

    #[error("Unknown symptom: {0}")]
    InvalidSymptom(String),

    #[error("Unknown activity: {0}")]
    InvalidActivity(String),

    #[error("Unknown field: {0}")]
    InvalidField(String),

    #[error("Invalid {field} value: '{value}'")]
    InvalidValue { field: String, value: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl HolterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HolterError::NotHolterDirectory(_) => 2,
            HolterError::EntryOutOfRange { .. } => 3,
            HolterError::InvalidSymptom(_)
            | HolterError::InvalidActivity(_)
            | HolterError::InvalidField(_)
            | HolterError::InvalidValue { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HolterError::NotHolterDirectory(path) => {
                format!(
                    "Not a holter directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'holter init' in this directory to create a new diary\n\
                    • Navigate to an existing holter directory\n\
                    • Set HOLTER_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            HolterError::EntryOutOfRange { len, .. } => {
                if *len == 0 {
                    format!(
                        "{}\n\n\
                        The diary is empty. Run 'holter add' to create the first entry.",
                        self
                    )
                } else {
                    format!(
                        "{}\n\n\
                        Entries are numbered 1 to {}. Use 'holter list' to see them.",
                        self, len
                    )
                }
            }
            HolterError::InvalidSymptom(_) => {
                format!("{}\n\nValid symptoms:\n{}", self, bullet_list(Symptom::labels()))
            }
            HolterError::InvalidActivity(_) => {
                format!(
                    "{}\n\nValid activities:\n{}",
                    self,
                    bullet_list(Activity::labels())
                )
            }
            HolterError::InvalidField(_) => {
                format!(
                    "{}\n\n\
                    Valid fields: date, time, activity, notes\n\
                    Symptoms are changed with: holter toggle <N> <SYMPTOM>",
                    self
                )
            }
            HolterError::InvalidValue { field, .. } => match field.as_str() {
                "date" => format!(
                    "{}\n\n\
                    Expected format: YYYY-MM-DD, 'today' or 'yesterday'\n\
                    Example: holter set 1 date 2024-01-05",
                    self
                ),
                "time" => format!(
                    "{}\n\n\
                    Expected format: HH:MM (24-hour) or 'now'\n\
                    Example: holter set 1 time 14:30",
                    self
                ),
                _ => self.to_string(),
            },
            HolterError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: holter config editor 'vim'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type using HolterError
pub type Result<T> = std::result::Result<T, HolterError>;
