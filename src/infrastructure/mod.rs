//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod download;
pub mod editor;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use download::{Download, DownloadSink, FileDownload, StdoutDownload};
pub use editor::EditorSession;
pub use storage::{FileSystemStore, KeyValueStore, MemoryStore};
pub use workspace::Workspace;
