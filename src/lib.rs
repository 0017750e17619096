#![warn(missing_docs)]
//! A sudoku solving engine
//!
//! ## Overview
//!
//! This library solves standard 9×9 sudokus by constraint propagation with
//! backtracking. Each open cell keeps a set of candidate digits. Digits that
//! are already confirmed among a cell's row, column or block peers are
//! eliminated and a cell whose candidate set collapses to a single digit is
//! confirmed ("naked single"). A candidate that no other open cell in one of
//! its groups can take is confirmed as well ("hidden single"). When a full
//! propagation sweep no longer changes anything, the engine guesses on the
//! open cell with the fewest candidates and searches the resulting boards
//! depth first. Every guess gets an independent board, so a failed branch is
//! simply discarded, never undone.
//!
//! ## Example
//!
//! ```
//! use sudoku_engine::Sudoku;
//!
//! // 0 = blank cell, 1..=9 = clue
//! let grid = [
//!     [7, 5, 0, 0, 3, 8, 0, 0, 0],
//!     [0, 0, 0, 5, 0, 0, 9, 0, 0],
//!     [0, 9, 0, 0, 7, 0, 1, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 8, 2, 1],
//!     [1, 3, 4, 0, 0, 0, 7, 5, 6],
//!     [2, 8, 7, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 6, 0, 2, 0, 0, 3, 0],
//!     [0, 0, 5, 0, 0, 3, 0, 0, 0],
//!     [0, 0, 0, 4, 1, 0, 0, 9, 2],
//! ];
//!
//! let sudoku = Sudoku::from_grid(grid).unwrap();
//! if let Some(solution) = sudoku.solve_one() {
//!     println!("{}", solution);
//!
//!     let cell_contents: [u8; 81] = solution.to_bytes();
//! }
//! ```

pub mod bitset;
pub mod board;
mod consts;
pub mod errors;
mod helper;
mod solver;

pub use crate::board::{Cell, CellState, Digit, Sudoku};
pub use crate::solver::Board;
