use serde_json::{Map, Value};

use super::Cell;

/// nbformat minor version written for new notebooks (4.5 introduced cell ids)
pub const NBFORMAT_MINOR: u32 = 5;

/// Structured form of a notebook: ordered cells plus opaque notebook metadata.
///
/// Order is the only relationship between cells. The metadata object is never
/// interpreted by the transcoder, only carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: Map<String, Value>,
    pub nbformat_minor: u32,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            metadata: Map::new(),
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Replace the notebook metadata, consuming the notebook
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Cell>> for Notebook {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}
