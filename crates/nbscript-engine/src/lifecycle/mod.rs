/*!
 * # Document lifecycle boundary
 *
 * An editor (or any other host) shows a notebook as a percent script and
 * calls back into the engine at three points:
 *
 * - **Open**: the buffer holds nbformat JSON; replace it with the script.
 * - **SavePre**: the buffer holds the script; parse it, write the notebook to
 *   disk, and reload the buffer from the written file. The buffer is read-only
 *   for the duration.
 * - **SavePost**: the buffer holds the freshly written JSON again; run the Open
 *   logic so the user sees `serialize(parse(script))`.
 *
 * Hosts implement [`DocumentHost`]; persistence goes through
 * [`NotebookWriter`]. Failures are logged, reported to the host as one message,
 * and never returned to the caller.
 */

pub mod guard;

pub use guard::ReadOnlyGuard;

use std::path::Path;

use crate::io::{NotebookError, NotebookWriter, decode_notebook};
use crate::models::Notebook;
use crate::transcode::{SerializeOptions, parse, serialize_with};

/// File extension handled by the lifecycle
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Editor-side view of an open document.
pub trait DocumentHost {
    /// Path the buffer was opened from
    fn path(&self) -> &Path;

    /// Current buffer content, one entry per line
    fn lines(&self) -> Vec<String>;

    /// Replace the whole buffer
    fn replace_lines(&mut self, lines: Vec<String>);

    fn set_modifiable(&mut self, modifiable: bool);

    /// Re-read the buffer from disk and mark it unmodified
    fn reload(&mut self) -> std::io::Result<()>;

    /// Show a message to the user
    fn report_error(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Open,
    SavePre,
    SavePost,
}

/// What a handler did with the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// Nothing to do (blank buffer)
    Skipped,
    Applied,
    /// An error was reported to the host; the buffer was left as it was
    Failed,
}

/// Event handlers wiring the transcoder to a host.
pub struct Lifecycle<W: NotebookWriter> {
    writer: W,
    options: SerializeOptions,
}

impl<W: NotebookWriter> Lifecycle<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, SerializeOptions::default())
    }

    pub fn with_options(writer: W, options: SerializeOptions) -> Self {
        Self { writer, options }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Whether the handlers apply to a document at `path`
    pub fn handles(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == NOTEBOOK_EXTENSION)
    }

    /// Dispatch an event to its handler
    pub fn handle<H: DocumentHost + ?Sized>(&self, event: LifecycleEvent, host: &mut H) -> HookOutcome {
        log::debug!("{event:?} for {}", host.path().display());
        match event {
            LifecycleEvent::Open => self.on_open(host),
            LifecycleEvent::SavePre => self.on_save_pre(host),
            LifecycleEvent::SavePost => self.on_save_post(host),
        }
    }

    /// Replace a buffer holding notebook JSON with its script form
    pub fn on_open<H: DocumentHost + ?Sized>(&self, host: &mut H) -> HookOutcome {
        let content = host.lines().join("\n");
        if content.trim().is_empty() {
            return HookOutcome::Skipped;
        }

        match decode_notebook(&content) {
            Ok(notebook) => {
                let script = serialize_with(&notebook.cells, &self.options);
                host.replace_lines(script.lines().map(str::to_string).collect());
                HookOutcome::Applied
            }
            Err(e) => {
                log::error!("failed to decode {}: {e}", host.path().display());
                host.report_error(&format!("Error parsing notebook: {e}"));
                HookOutcome::Failed
            }
        }
    }

    /// Parse the script buffer and persist it as a notebook next to the buffer
    pub fn on_save_pre<H: DocumentHost + ?Sized>(&self, host: &mut H) -> HookOutcome {
        let mut guard = ReadOnlyGuard::new(host);
        match self.write_buffer(&mut *guard) {
            Ok(()) => HookOutcome::Applied,
            Err(e) => {
                log::error!("failed to save {}: {e}", guard.path().display());
                guard.report_error(&format!("Error saving notebook: {e}"));
                HookOutcome::Failed
            }
        }
    }

    /// Re-normalize the buffer after the host has written it
    pub fn on_save_post<H: DocumentHost + ?Sized>(&self, host: &mut H) -> HookOutcome {
        self.on_open(host)
    }

    fn write_buffer<H: DocumentHost + ?Sized>(&self, host: &mut H) -> Result<(), NotebookError> {
        let script = host.lines().join("\n");
        let notebook = Notebook::new(parse(&script));
        let destination = host.path().with_extension(NOTEBOOK_EXTENSION);

        self.writer.write(&notebook, &destination)?;
        host.reload()?;
        Ok(())
    }
}
