use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::io::{NotebookError, NotebookWriter};
use crate::lifecycle::DocumentHost;
use crate::models::Notebook;

/// Create a temporary directory for notebook files
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// In-memory editor buffer that records what the lifecycle did to it
#[derive(Debug)]
pub struct MemoryHost {
    pub path: PathBuf,
    pub buffer: Vec<String>,
    pub modifiable: bool,
    pub modifiable_changes: Vec<bool>,
    pub errors: Vec<String>,
    pub reloads: usize,
    /// Content a reload reads back; `None` keeps the buffer as is
    pub on_disk: Option<String>,
}

impl MemoryHost {
    pub fn new(path: &str, content: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            buffer: content.lines().map(str::to_string).collect(),
            modifiable: true,
            modifiable_changes: Vec::new(),
            errors: Vec::new(),
            reloads: 0,
            on_disk: None,
        }
    }
}

impl DocumentHost for MemoryHost {
    fn path(&self) -> &Path {
        &self.path
    }

    fn lines(&self) -> Vec<String> {
        self.buffer.clone()
    }

    fn replace_lines(&mut self, lines: Vec<String>) {
        self.buffer = lines;
    }

    fn set_modifiable(&mut self, modifiable: bool) {
        self.modifiable = modifiable;
        self.modifiable_changes.push(modifiable);
    }

    fn reload(&mut self) -> std::io::Result<()> {
        self.reloads += 1;
        if let Some(content) = &self.on_disk {
            self.buffer = content.lines().map(str::to_string).collect();
        }
        Ok(())
    }

    fn report_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Keeps every notebook it is asked to write
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub writes: RefCell<Vec<(PathBuf, Notebook)>>,
}

impl NotebookWriter for RecordingWriter {
    fn write(&self, notebook: &Notebook, path: &Path) -> Result<(), NotebookError> {
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), notebook.clone()));
        Ok(())
    }
}

/// Rejects every write
#[derive(Debug)]
pub struct FailingWriter;

impl NotebookWriter for FailingWriter {
    fn write(&self, _notebook: &Notebook, _path: &Path) -> Result<(), NotebookError> {
        Err(NotebookError::Io(std::io::Error::other("disk full")))
    }
}
