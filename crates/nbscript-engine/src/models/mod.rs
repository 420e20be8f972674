pub mod cell;
pub mod notebook;

pub use cell::{Cell, CellKind};
pub use notebook::{NBFORMAT_MINOR, Notebook};
