//! Browser file decoding utilities.
//!
//! Wraps `FileReader` in `js_sys::Promise` so a whole batch can be
//! aggregated with `Promise::all`, which preserves input order no matter
//! which read finishes first.

use js_sys::{Array, Promise};
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// Errors raised while decoding a file's content into a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileReadError {
    /// `FileReader` could not be constructed.
    #[error("FileReader is not available in this environment")]
    ReaderUnavailable,
    /// The read could not be started.
    #[error("failed to start reading {0}")]
    ReadStartFailed(String),
    /// The reader reported an error for a single file.
    #[error("failed to read {0}")]
    ReadFailed(String),
    /// At least one read in an aggregated batch failed.
    #[error("failed to read one or more dropped files")]
    BatchFailed,
    /// The reader finished but produced something other than a string.
    #[error("{0} did not decode to a data URL")]
    NotADataUrl(String),
}

/// Kick off a data-URL read and return the reader plus a promise that
/// settles when the read finishes.
fn start_read(file: &File) -> Result<(FileReader, Promise), FileReadError> {
    let reader = FileReader::new().map_err(|_| FileReadError::ReaderUnavailable)?;
    let done = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader
        .read_as_data_url(file)
        .map_err(|_| FileReadError::ReadStartFailed(file.name()))?;
    Ok((reader, done))
}

fn take_data_url(reader: &FileReader, file_name: &str) -> Result<String, FileReadError> {
    reader
        .result()
        .ok()
        .and_then(|value| value.as_string())
        .ok_or_else(|| FileReadError::NotADataUrl(file_name.to_string()))
}

/// Read a single file's content into a data-URL string.
pub async fn read_file(file: &File) -> Result<String, FileReadError> {
    let (reader, done) = start_read(file)?;
    JsFuture::from(done)
        .await
        .map_err(|_| FileReadError::ReadFailed(file.name()))?;
    take_data_url(&reader, &file.name())
}

/// Read a batch of files concurrently, yielding data URLs in input order.
///
/// The reads run in parallel on the browser side; `Promise::all` collects
/// them back in the order the files were passed in. A single failing read
/// fails the whole batch.
pub async fn read_files(files: &[File]) -> Result<Vec<String>, FileReadError> {
    let mut readers = Vec::with_capacity(files.len());
    let pending = Array::new();
    for file in files {
        let (reader, done) = start_read(file)?;
        pending.push(&done);
        readers.push((reader, file.name()));
    }

    JsFuture::from(Promise::all(&pending))
        .await
        .map_err(|_| FileReadError::BatchFailed)?;

    readers
        .iter()
        .map(|(reader, name)| take_data_url(reader, name))
        .collect()
}
