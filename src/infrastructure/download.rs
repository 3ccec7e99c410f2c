//! Delivery of exported files

use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A text blob ready to be saved by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub content: String,
    pub mime_type: String,
    pub filename: String,
}

/// Something that can hand a download to the user
pub trait DownloadSink {
    fn deliver(&self, download: &Download) -> Result<()>;
}

/// Saves downloads into a directory, replacing any previous file
#[derive(Debug, Clone)]
pub struct FileDownload {
    dir: PathBuf,
}

impl FileDownload {
    pub fn new(dir: PathBuf) -> Self {
        FileDownload { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where a download named `filename` ends up
    pub fn target(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl DownloadSink for FileDownload {
    fn deliver(&self, download: &Download) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(self.target(&download.filename), &download.content)?;
        Ok(())
    }
}

/// Writes the download content to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDownload;

impl DownloadSink for StdoutDownload {
    fn deliver(&self, download: &Download) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", download.content)?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Download {
        Download {
            content: "\"Date\"".to_string(),
            mime_type: "text/csv;charset=utf-8;".to_string(),
            filename: "holter_diary.csv".to_string(),
        }
    }

    #[test]
    fn test_file_download_writes_content() {
        let temp = TempDir::new().unwrap();
        let sink = FileDownload::new(temp.path().to_path_buf());

        sink.deliver(&sample()).unwrap();

        let written = fs::read_to_string(temp.path().join("holter_diary.csv")).unwrap();
        assert_eq!(written, "\"Date\"");
    }

    #[test]
    fn test_file_download_creates_directory_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("exports");
        let sink = FileDownload::new(dir.clone());

        sink.deliver(&sample()).unwrap();
        let mut second = sample();
        second.content = "replaced".to_string();
        sink.deliver(&second).unwrap();

        assert_eq!(
            fs::read_to_string(dir.join("holter_diary.csv")).unwrap(),
            "replaced"
        );
    }
}
