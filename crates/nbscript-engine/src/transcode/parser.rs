use crate::ids::IdTable;
use crate::models::{Cell, CellKind};

use super::delimiters::{Segment, Sentinel, split_sentinels, uncomment_line};

/// Parse a percent script back into cells.
///
/// Never fails: content before the first sentinel is read as code. Every
/// materialized cell gets a content-derived id from a table scoped to this call.
pub fn parse(text: &str) -> Vec<Cell> {
    let mut ids = IdTable::new();
    let mut cells = Vec::new();
    let mut current: Option<Sentinel> = None;

    for segment in split_sentinels(text) {
        let content = match segment {
            Segment::Sentinel(sentinel) => {
                current = Some(sentinel);
                continue;
            }
            Segment::Content(content) => content,
        };

        let materialized = match current {
            // Kept even when empty, unlike code regions.
            Some(Sentinel::Markdown) => Some((CellKind::Markdown, markdown_source(content))),
            Some(Sentinel::Code) | None => {
                let source = code_source(content);
                (!source.is_empty()).then(|| (CellKind::Code, source.to_string()))
            }
        };

        if let Some((kind, source)) = materialized {
            let id = ids.assign(&source);
            cells.push(Cell::new(kind, source).with_id(id));
        }
        current = None;
    }

    log::debug!("parsed {} cells from {} bytes of script", cells.len(), text.len());
    cells
}

fn code_source(segment: &str) -> &str {
    segment.trim_matches('\n')
}

/// Strip the newline left over from the sentinel line and any bare trailing
/// newlines, then unprefix each line.
///
/// Markdown lines written by the serializer always carry `# `, so a bare
/// newline at the tail of a region is the blank separator before the next
/// sentinel and never content.
fn markdown_source(segment: &str) -> String {
    let body = segment.strip_prefix('\n').unwrap_or(segment);
    let body = body.trim_end_matches('\n');

    body.split('\n')
        .map(uncomment_line)
        .collect::<Vec<_>>()
        .join("\n")
}
