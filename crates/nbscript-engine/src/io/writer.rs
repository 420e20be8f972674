use std::path::Path;

use super::{EncodeOptions, NotebookError, read_notebook, write_notebook};
use crate::models::Notebook;

/// Persists a structured notebook at a destination path.
///
/// The lifecycle handlers only depend on this trait, so hosts can swap the
/// filesystem for anything else that accepts an ordered cell sequence.
pub trait NotebookWriter {
    fn write(&self, notebook: &Notebook, path: &Path) -> Result<(), NotebookError>;
}

/// Writes nbformat JSON to the local filesystem.
#[derive(Debug, Clone)]
pub struct FsNotebookWriter {
    pub encode: EncodeOptions,
    /// Carry notebook-level metadata (kernelspec, language_info) over from the
    /// file being replaced
    pub keep_metadata: bool,
}

impl FsNotebookWriter {
    pub fn new(encode: EncodeOptions, keep_metadata: bool) -> Self {
        Self {
            encode,
            keep_metadata,
        }
    }

    fn existing_metadata(&self, path: &Path) -> Option<serde_json::Map<String, serde_json::Value>> {
        if !self.keep_metadata || !path.exists() {
            return None;
        }
        match read_notebook(path) {
            Ok(existing) => Some(existing.metadata),
            Err(e) => {
                log::warn!("not keeping metadata from {}: {e}", path.display());
                None
            }
        }
    }
}

impl Default for FsNotebookWriter {
    fn default() -> Self {
        Self::new(EncodeOptions::default(), true)
    }
}

impl NotebookWriter for FsNotebookWriter {
    fn write(&self, notebook: &Notebook, path: &Path) -> Result<(), NotebookError> {
        match self.existing_metadata(path) {
            Some(metadata) if notebook.metadata.is_empty() => {
                let merged = notebook.clone().with_metadata(metadata);
                write_notebook(path, &merged, &self.encode)?;
            }
            _ => write_notebook(path, notebook, &self.encode)?,
        }
        log::info!("wrote {} cells to {}", notebook.cells.len(), path.display());
        Ok(())
    }
}
