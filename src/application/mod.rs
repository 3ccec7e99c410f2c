//! Application layer - Use cases and orchestration

pub mod entry_store;
pub mod export_diary;
pub mod init;
pub mod manage_config;

pub use entry_store::{EntryStore, BACKUP_KEY, STORAGE_KEY};
pub use export_diary::{csv_download, export_diary};
pub use manage_config::ConfigService;
