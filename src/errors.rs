//! Errors that can occur when constructing a [`Sudoku`]
#[cfg(doc)]
use crate::Sudoku;

/// Error for [`Sudoku::from_bytes`] and [`Sudoku::from_grid`]
#[derive(Debug, thiserror::Error)]
#[error("grid contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(FromBytesError),
}
