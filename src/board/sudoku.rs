use crate::board::{Cell, Digit};
use crate::consts::N_CELLS;
use crate::errors::{FromBytesError, FromBytesSliceError};
use crate::solver::Board;
use std::fmt;

/// The main structure exposing all the functionality of the library
///
/// A `Sudoku` is a plain 9×9 grid of entries, stored row by row.
/// `0` marks a blank cell, `1..=9` a given or solved digit. All candidate
/// bookkeeping lives in [`Board`], which a `Sudoku` is converted into for
/// the duration of a solve.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a byte array. `0` means blank, `1..=9` is a
    /// given clue. Returns an error if any entry is above 9.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a sudoku from a byte slice. The slice must have length 81.
    /// `0` means blank, `1..=9` is a given clue.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut sudoku = Sudoku([0; N_CELLS]);
        sudoku.0.copy_from_slice(bytes);
        Sudoku::from_bytes(sudoku.0).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Creates a sudoku from a 9×9 grid of rows. `0` means blank,
    /// `1..=9` is a given clue.
    pub fn from_grid(grid: [[u8; 9]; 9]) -> Result<Sudoku, FromBytesError> {
        let mut bytes = [0; N_CELLS];
        for (cell_entry, &grid_entry) in bytes.iter_mut().zip(grid.iter().flatten()) {
            *cell_entry = grid_entry;
        }
        Sudoku::from_bytes(bytes)
    }

    /// Returns the underlying byte array, `0` for blank cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the sudoku as a 9×9 grid of rows, `0` for blank cells.
    pub fn to_grid(self) -> [[u8; 9]; 9] {
        let mut grid = [[0; 9]; 9];
        for (grid_entry, &cell_entry) in grid.iter_mut().flatten().zip(self.0.iter()) {
            *grid_entry = cell_entry;
        }
        grid
    }

    /// Returns the entry at `cell`, if it isn't blank.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Returns an iterator over the sudoku, going from left to right, top to bottom.
    /// Blank cells are `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&num| Digit::new_checked(num))
    }

    /// Try to find a solution to the sudoku and fill it in. Returns `true` if a solution was found.
    pub fn solve(&mut self) -> bool {
        match self.solve_one() {
            Some(solution) => {
                *self = solution;
                true
            }
            None => false,
        }
    }

    /// Find a solution to the sudoku. If multiple solutions exist, it will
    /// stop at the first one found. The order in which guesses are tried is
    /// not part of the API, so no specific solution is promised for
    /// ambiguous sudokus. Returns `None` if no solution exists.
    pub fn solve_one(self) -> Option<Sudoku> {
        Board::from_sudoku(&self).solve().ok()
    }

    /// Checks whether the sudoku is fully solved: no blanks and every row,
    /// column and block containing each digit exactly once.
    pub fn is_solved(&self) -> bool {
        Board::from_sudoku(self).is_valid()
    }
}

/// Block-formatted view of the grid. Blank cells print as spaces:
///
/// ```text
/// 7 5   |   3 8 |
///       | 5     | 9
///   9   |   7   | 1
/// ------+-------+------
/// ...
/// ```
impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, &entry) in self.0.iter().enumerate() {
            let (row, col) = (index / 9, index % 9);
            match (row, col) {
                (0, 0) => (),
                (3, 0) | (6, 0) => write!(f, "\n------+-------+------\n")?,
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, " | ")?,
                _ => write!(f, " ")?,
            }
            match entry {
                0 => write!(f, " ")?,
                num => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sudoku {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0[..], serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sudoku {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <Vec<u8>>::deserialize(deserializer)?;
        Sudoku::from_bytes_slice(&bytes).map_err(serde::de::Error::custom)
    }
}
