use crate::models::{Cell, CellKind};

use super::delimiters::{CODE_SENTINEL, MARKDOWN_SENTINEL, comment_line};

/// Knobs for the notebook → script direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Let consecutive code cells share one `# +` region
    pub merge_code_cells: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            merge_code_cells: true,
        }
    }
}

/// Serialize cells to a percent script with the default options.
pub fn serialize(cells: &[Cell]) -> String {
    serialize_with(cells, &SerializeOptions::default())
}

/// Serialize cells to a percent script.
///
/// Layout rules:
/// - a code region opens with `# +` and a blank line, preceded by a blank line
///   unless it is the first thing in the output;
/// - consecutive code cells stay in one region when merging is enabled;
/// - a markdown cell opens with `# -`, preceded by a blank line unless the
///   previous cell was markdown too, and each of its lines gets a `# ` prefix.
pub fn serialize_with(cells: &[Cell], options: &SerializeOptions) -> String {
    let mut out = String::new();
    let mut previous: Option<CellKind> = None;

    for cell in cells {
        match cell.kind {
            CellKind::Code => {
                let continues_region =
                    options.merge_code_cells && previous == Some(CellKind::Code);
                if !continues_region {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str(CODE_SENTINEL);
                    out.push_str("\n\n");
                }
                out.push_str(&cell.source);
                out.push('\n');
            }
            CellKind::Markdown => {
                if !out.is_empty() && previous != Some(CellKind::Markdown) {
                    out.push('\n');
                }
                out.push_str(MARKDOWN_SENTINEL);
                out.push('\n');
                for line in cell.lines() {
                    out.push_str(&comment_line(line));
                    out.push('\n');
                }
            }
        }
        previous = Some(cell.kind);
    }

    log::debug!(
        "serialized {} cells into {} script lines",
        cells.len(),
        out.lines().count()
    );
    out
}
