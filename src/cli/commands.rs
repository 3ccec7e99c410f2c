//! CLI command definitions

use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "holter")]
#[command(about = "Symptom diary for Holter heart monitoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a new entry, optionally filling in its fields
    Add {
        /// Date (YYYY-MM-DD, today, yesterday)
        #[arg(long)]
        date: Option<String>,

        /// Time (HH:MM or now)
        #[arg(long)]
        time: Option<String>,

        /// Activity at the time of the symptoms
        #[arg(long)]
        activity: Option<String>,

        /// Symptom to check (repeatable)
        #[arg(long = "symptom", value_name = "SYMPTOM")]
        symptoms: Vec<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Set or clear a field of an entry
    Set {
        /// Entry number as shown by 'holter list'
        number: NonZeroUsize,

        /// Field to change (date, time, activity, notes)
        field: String,

        /// New value; omit to clear the field
        value: Option<String>,

        /// Write the notes in your editor
        #[arg(short, long, conflicts_with = "value")]
        edit: bool,
    },

    /// Check or uncheck a symptom on an entry
    Toggle {
        /// Entry number as shown by 'holter list'
        number: NonZeroUsize,

        /// Symptom name, e.g. "Shortness of breath"
        symptom: String,
    },

    /// Show all entries
    List,

    /// Show one entry
    Show {
        /// Entry number as shown by 'holter list'
        number: NonZeroUsize,
    },

    /// Export the diary as CSV
    Export {
        /// Directory to write holter_diary.csv to (default: configured export_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the CSV instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// List the available activities and symptoms
    Options,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

impl Commands {
    /// Zero-based index for a user-facing entry number
    pub fn entry_index(number: NonZeroUsize) -> usize {
        number.get() - 1
    }
}
