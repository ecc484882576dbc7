use miette::Diagnostic;
use thiserror::Error;

/// Structural problems found while building a [`crate::Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GridError {
    #[error("grid has no cells")]
    #[diagnostic(code(grid::empty))]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(grid::ragged),
        help("every row of the grid must have the same length")
    )]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{width}x{height} grid cannot hold {found} cells")]
    #[diagnostic(code(grid::cell_count))]
    CellCount {
        width: usize,
        height: usize,
        found: usize,
    },
}
