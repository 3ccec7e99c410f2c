//! Export diary use case

use crate::domain::{diary_to_csv, Diary, EXPORT_FILENAME, EXPORT_MIME_TYPE};
use crate::error::Result;
use crate::infrastructure::{Download, DownloadSink};
use tracing::info;

/// Build the CSV download for a diary snapshot
pub fn csv_download(diary: &Diary) -> Result<Download> {
    Ok(Download {
        content: diary_to_csv(diary)?,
        mime_type: EXPORT_MIME_TYPE.to_string(),
        filename: EXPORT_FILENAME.to_string(),
    })
}

/// Render `diary` as CSV and hand it to `sink`. Returns the number of
/// exported entries.
pub fn export_diary<D: DownloadSink>(diary: &Diary, sink: &D) -> Result<usize> {
    let download = csv_download(diary)?;
    sink.deliver(&download)?;
    info!(
        entries = diary.len(),
        filename = %download.filename,
        "diary exported"
    );
    Ok(diary.len())
}
