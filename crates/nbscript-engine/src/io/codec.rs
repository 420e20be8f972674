//! nbformat v4 JSON codec.
//!
//! Only what the transcoder needs is read: cell type, source and notebook
//! metadata. Outputs, execution counts, cell metadata and stored cell ids are
//! dropped on decode and written empty on encode.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value, json};

use super::NotebookError;
use crate::ids::IdTable;
use crate::models::{Cell, CellKind, NBFORMAT_MINOR, Notebook};

/// Only major version this codec reads or writes
pub const NBFORMAT_MAJOR: u32 = 4;

/// Output layout for encoded notebooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per indentation level (nbformat itself writes 1)
    pub indent: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { indent: 1 }
    }
}

#[derive(Debug, Deserialize)]
struct RawNotebook {
    nbformat: u32,
    #[serde(default)]
    nbformat_minor: u32,
    #[serde(default)]
    metadata: Map<String, Value>,
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: MultilineString,
}

/// nbformat allows `source` as one string or as a list of line strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MultilineString {
    Single(String),
    Lines(Vec<String>),
}

impl Default for MultilineString {
    fn default() -> Self {
        MultilineString::Single(String::new())
    }
}

impl MultilineString {
    fn into_string(self) -> String {
        match self {
            MultilineString::Single(s) => s,
            MultilineString::Lines(lines) => lines.concat(),
        }
    }
}

/// Decode nbformat v4 JSON into a [`Notebook`].
///
/// Cells other than `code` and `markdown` are skipped with a warning.
pub fn decode_notebook(json: &str) -> Result<Notebook, NotebookError> {
    let raw: RawNotebook = serde_json::from_str(json)?;
    if raw.nbformat != NBFORMAT_MAJOR {
        return Err(NotebookError::UnsupportedFormat { major: raw.nbformat });
    }

    let mut cells = Vec::with_capacity(raw.cells.len());
    for (index, cell) in raw.cells.into_iter().enumerate() {
        let kind = match cell.cell_type.as_str() {
            "code" => CellKind::Code,
            "markdown" => CellKind::Markdown,
            other => {
                log::warn!("skipping unsupported {other} cell at index {index}");
                continue;
            }
        };
        cells.push(Cell::new(kind, cell.source.into_string()));
    }

    Ok(Notebook {
        cells,
        metadata: raw.metadata,
        nbformat_minor: raw.nbformat_minor,
    })
}

/// Encode a [`Notebook`] as nbformat 4.5 JSON with sorted keys and a trailing
/// newline. Cells without an id get one derived from their content.
pub fn encode_notebook(notebook: &Notebook, options: &EncodeOptions) -> Result<String, NotebookError> {
    let mut ids = IdTable::new();
    let cells: Vec<Value> = notebook
        .cells
        .iter()
        .map(|cell| {
            let id = match &cell.id {
                Some(id) => id.clone(),
                None => ids.assign(&cell.source),
            };
            cell_json(cell, id)
        })
        .collect();

    let document = json!({
        "cells": cells,
        "metadata": notebook.metadata,
        "nbformat": NBFORMAT_MAJOR,
        "nbformat_minor": notebook.nbformat_minor.max(NBFORMAT_MINOR),
    });

    let indent = " ".repeat(options.indent);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    document
        .serialize(&mut serializer)
        .map_err(|e| NotebookError::Encode(e.to_string()))?;

    let mut out = String::from_utf8(buf).map_err(|e| NotebookError::Encode(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

fn cell_json(cell: &Cell, id: String) -> Value {
    let source: Vec<&str> = cell.source.split_inclusive('\n').collect();
    match cell.kind {
        CellKind::Code => json!({
            "cell_type": cell.kind.as_str(),
            "execution_count": null,
            "id": id,
            "metadata": {},
            "outputs": [],
            "source": source,
        }),
        CellKind::Markdown => json!({
            "cell_type": cell.kind.as_str(),
            "id": id,
            "metadata": {},
            "source": source,
        }),
    }
}
