//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_diary, format_entry, format_options, EMPTY_DIARY_MESSAGE};
