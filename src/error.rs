use thiserror::Error;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MazeError {
    /// Grid too small for an interior cell with margin, or even-sized.
    #[error("invalid maze dimensions {rows}x{columns}: both must be odd and at least 5")]
    InvalidDimensions { rows: usize, columns: usize },
    /// Carving reached a state with no move to make. Always a bug.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),
}
