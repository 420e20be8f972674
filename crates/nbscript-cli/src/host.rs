use nbscript_engine::DocumentHost;
use std::fs;
use std::path::{Path, PathBuf};

/// A [`DocumentHost`] backed by a file, standing in for an editor buffer.
#[derive(Debug)]
pub struct FileHost {
    path: PathBuf,
    lines: Vec<String>,
    modifiable: bool,
    errors: Vec<String>,
}

impl FileHost {
    /// Load the buffer from `path`
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::with_content(path, &content))
    }

    /// A buffer for `path` holding `content`, not yet written anywhere
    pub fn with_content(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: split_lines(content),
            modifiable: true,
            errors: Vec::new(),
        }
    }

    /// Buffer content as file text, newline terminated when non-empty
    pub fn text(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    pub fn is_modifiable(&self) -> bool {
        self.modifiable
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

impl DocumentHost for FileHost {
    fn path(&self) -> &Path {
        &self.path
    }

    fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    fn replace_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    fn set_modifiable(&mut self, modifiable: bool) {
        self.modifiable = modifiable;
    }

    fn reload(&mut self) -> std::io::Result<()> {
        self.lines = split_lines(&fs::read_to_string(&self.path)?);
        Ok(())
    }

    fn report_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
