use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use urlbatch_core::{parse_text, Record};
use urlbatch_logging::urlbatch_debug;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Missing, unreadable, or not UTF-8 text.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } => path,
        }
    }
}

/// Reads a link list from disk. Nothing is returned unless the whole file was read.
pub fn read_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_text(&text);
    urlbatch_debug!(
        "Parsed {} records from {:?} ({} bytes)",
        records.len(),
        path,
        text.len()
    );
    Ok(records)
}
