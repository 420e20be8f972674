pub mod codec;
pub mod writer;

pub use codec::{EncodeOptions, NBFORMAT_MAJOR, decode_notebook, encode_notebook};
pub use writer::{FsNotebookWriter, NotebookWriter};

use crate::models::Notebook;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("invalid notebook JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unsupported nbformat version {major} (only version 4 is supported)")]
    UnsupportedFormat { major: u32 },
    #[error("failed to encode notebook: {0}")]
    Encode(String),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read and decode a notebook file
pub fn read_notebook(path: &Path) -> Result<Notebook, NotebookError> {
    if !path.exists() {
        return Err(NotebookError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    decode_notebook(&content)
}

/// Encode a notebook and write it to `path`
pub fn write_notebook(
    path: &Path,
    notebook: &Notebook,
    options: &EncodeOptions,
) -> Result<(), NotebookError> {
    let content = encode_notebook(notebook, options)?;

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    Ok(())
}
