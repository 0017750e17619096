//! The solving engine: constraint propagation to a fixed point with
//! depth-first guessing when propagation stalls.

use crate::bitset::Set;
use crate::board::{Cell, CellState, Digit, House, Sudoku};
use crate::consts::N_CELLS;
use crate::helper::{CellArray, Unsolvable};

/// One node of the search tree: a full grid of cell states.
///
/// A `Board` is a self-contained snapshot. Candidate sets only ever shrink
/// or collapse to a confirmed digit, they are never restored. Backtracking
/// therefore doesn't undo anything: every guess is tried on a fresh board
/// built from the confirmed entries of its parent and an exhausted branch
/// is simply dropped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: CellArray<CellState>,
}

impl Board {
    /// Builds a board from a plain grid. Clues become confirmed digits,
    /// blank cells start out with all nine candidates.
    pub fn from_sudoku(sudoku: &Sudoku) -> Board {
        let mut cells = CellArray([CellState::Candidates(Set::ALL); N_CELLS]);
        for (cell, digit) in Cell::all().zip(sudoku.iter()) {
            if let Some(digit) = digit {
                cells[cell] = CellState::Digit(digit);
            }
        }
        Board { cells }
    }

    /// Returns the state of a single cell.
    pub fn cell_state(&self, cell: Cell) -> CellState {
        self.cells[cell]
    }

    /// Returns the plain grid of confirmed entries, blanks for open cells.
    pub fn to_sudoku(&self) -> Sudoku {
        let mut sudoku = Sudoku([0; N_CELLS]);
        for cell in Cell::all() {
            if let CellState::Digit(digit) = self.cells[cell] {
                sudoku.0[cell.as_index()] = digit.get();
            }
        }
        sudoku
    }

    // One full row-major pass of the cell rules.
    // Peer state is read live, so cells later in the pass already observe
    // digits confirmed earlier in the same pass.
    fn sweep(&mut self) {
        for cell in Cell::all() {
            self.process(cell);
        }
    }

    /// Runs full sweeps until the board stops changing.
    /// Returns `true` if any cell changed.
    pub fn propagate(&mut self) -> bool {
        let original = self.cells;
        loop {
            let before = self.cells;
            self.sweep();
            if self.cells == before {
                return self.cells != original;
            }
        }
    }

    // Runs both deduction rules for one cell. No-op on confirmed cells.
    fn process(&mut self, cell: Cell) {
        if let CellState::Digit(_) = self.cells[cell] {
            return;
        }
        self.eliminate_by_peers(cell);
        self.resolve_if_unique(cell);
    }

    // Naked single rule: remove every digit confirmed among the cell's
    // row, column and block peers from its candidate set. A single
    // remaining candidate confirms the cell. An emptied set is left in
    // place for `reached_contradiction` to find.
    fn eliminate_by_peers(&mut self, cell: Cell) {
        let mut confirmed = Set::NONE;
        for &house in &cell.houses() {
            for peer in house.cells() {
                if let CellState::Digit(digit) = self.cells[peer] {
                    confirmed |= digit;
                }
            }
        }

        if let CellState::Candidates(candidates) = &mut self.cells[cell] {
            candidates.remove(confirmed);
            if let Ok(Some(digit)) = candidates.unique() {
                self.cells[cell] = CellState::Digit(digit);
            }
        }
    }

    // Hidden single rule: a candidate no other open cell in one of the
    // cell's houses can take is confirmed immediately, even if this cell
    // still has other candidates. Which digit wins when several qualify at
    // once is not part of the API (lowest digit of the first qualifying
    // house, scanning row, column, block).
    fn resolve_if_unique(&mut self, cell: Cell) {
        let candidates = match self.cells[cell] {
            CellState::Candidates(candidates) => candidates,
            CellState::Digit(_) => return,
        };

        for &house in &cell.houses() {
            let mut open_once = Set::NONE;
            let mut open_multiple = Set::NONE;
            for peer in house.cells() {
                if let CellState::Candidates(peer_candidates) = self.cells[peer] {
                    open_multiple |= open_once & peer_candidates;
                    open_once |= peer_candidates;
                }
            }

            let lonely = candidates & open_once.without(open_multiple);
            if let Some(digit) = lonely.into_iter().next() {
                self.cells[cell] = CellState::Digit(digit);
                return;
            }
        }
    }

    /// Checks whether every cell is confirmed.
    pub fn is_filled(&self) -> bool {
        Cell::all().all(|cell| matches!(self.cells[cell], CellState::Digit(_)))
    }

    /// Checks whether any open cell ran out of candidates, which makes the
    /// board (though not necessarily the original sudoku) unsolvable.
    pub fn reached_contradiction(&self) -> bool {
        Cell::all().any(|cell| self.cells[cell] == CellState::Candidates(Set::NONE))
    }

    /// Checks whether every row, column and block contains each digit
    /// exactly once. Only `true` on fully confirmed boards.
    pub fn is_valid(&self) -> bool {
        House::all().all(|house| {
            let mut confirmed = Set::NONE;
            for cell in house.cells() {
                match self.cells[cell] {
                    CellState::Digit(digit) => confirmed |= digit,
                    CellState::Candidates(_) => return false,
                }
            }
            confirmed == Set::ALL
        })
    }

    pub(crate) fn solve(mut self) -> Result<Sudoku, Unsolvable> {
        self.propagate();

        if self.is_filled() {
            // A filled board can still break the one-digit-per-house rule
            // when the givens themselves conflicted. Such a branch is as
            // dead as a contradiction.
            return match self.is_valid() {
                true => Ok(self.to_sudoku()),
                false => Err(Unsolvable),
            };
        }
        if self.reached_contradiction() {
            return Err(Unsolvable);
        }
        self.branch()
    }

    // Stalled: guess on the most constrained open cell and solve each
    // resulting board depth first. Children restart from the confirmed
    // entries plus the pinned guess; their first sweeps re-derive the
    // eliminations.
    fn branch(&self) -> Result<Sudoku, Unsolvable> {
        let (cell, guesses) = self.find_smallest_guess();
        let sudoku = self.to_sudoku();

        for digit in guesses {
            let mut pinned = sudoku;
            pinned.0[cell.as_index()] = digit.get();
            if let Ok(solution) = Board::from_sudoku(&pinned).solve() {
                return Ok(solution);
            }
        }
        Err(Unsolvable)
    }

    /// Returns the open cell with the fewest remaining candidates, and
    /// those candidates. Ties go to the first such cell in row-major order;
    /// callers must not rely on which cell wins a tie.
    ///
    /// # Panic
    /// Panics, if no open cell with candidates exists. `solve` only
    /// branches on boards that are neither filled nor contradictory, so a
    /// panic here means the solve state machine itself is broken.
    pub fn find_smallest_guess(&self) -> (Cell, Set<Digit>) {
        let mut guess: Option<(Cell, Set<Digit>)> = None;
        for cell in Cell::all() {
            if let CellState::Candidates(candidates) = self.cells[cell] {
                if candidates.is_empty() {
                    continue;
                }
                match guess {
                    Some((_, best)) if best.len() <= candidates.len() => (),
                    _ => guess = Some((cell, candidates)),
                }
            }
        }
        guess.expect("branching on a board without guessable cells")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn board(grid: [[u8; 9]; 9]) -> Board {
        Board::from_sudoku(&Sudoku::from_grid(grid).unwrap())
    }

    fn candidates_of(board: &Board, cell: Cell) -> Option<Set<Digit>> {
        board.cell_state(cell).candidates()
    }

    // needs guessing, propagation alone stalls
    const HARD: [[u8; 9]; 9] = [
        [8, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 3, 6, 0, 0, 0, 0, 0],
        [0, 7, 0, 0, 9, 0, 2, 0, 0],
        [0, 5, 0, 0, 0, 7, 0, 0, 0],
        [0, 0, 0, 0, 4, 5, 7, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 3, 0],
        [0, 0, 1, 0, 0, 0, 0, 6, 8],
        [0, 0, 8, 5, 0, 0, 0, 1, 0],
        [0, 9, 0, 0, 0, 0, 4, 0, 0],
    ];

    #[test]
    fn naked_single() {
        let mut board = board([
            [1, 2, 3, 4, 5, 6, 7, 8, 0],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
        ]);
        board.sweep();
        assert_eq!(
            board.cell_state(Cell::from_coords(0, 8)),
            CellState::Digit(Digit::new(9))
        );
    }

    #[test]
    fn hidden_single() {
        // 4 is barred from every cell of row 0 except the corner: directly
        // by the clues in columns 1 and 2, through the top middle and top
        // right blocks otherwise. The corner keeps other candidates, so
        // only the hidden single rule can confirm it.
        let mut board = board([
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 4, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 4, 0, 0],
            [0; 9],
            [0; 9],
            [0, 4, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 4, 0, 0, 0, 0, 0, 0],
            [0; 9],
            [0; 9],
        ]);
        board.propagate();
        assert_eq!(
            board.cell_state(Cell::from_coords(0, 0)),
            CellState::Digit(Digit::new(4))
        );
    }

    #[test]
    fn contradiction_empties_candidate_set() {
        // row 0 has two 5s; together with the 8 and 9 below it, the last
        // cell of row 0 loses all nine candidates
        let mut board = board([
            [5, 5, 1, 2, 3, 4, 6, 7, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 8],
            [0, 0, 0, 0, 0, 0, 0, 0, 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
        ]);
        board.propagate();
        assert_eq!(
            board.cell_state(Cell::from_coords(0, 8)),
            CellState::Candidates(Set::NONE)
        );
        assert!(board.reached_contradiction());
    }

    #[test]
    fn propagation_is_idempotent_at_fixed_point() {
        let mut board = board(HARD);
        assert!(board.propagate());

        let fixed_point = board;
        board.sweep();
        assert_eq!(board, fixed_point);
        assert!(!board.propagate());
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let mut board = board(HARD);

        loop {
            let before = board;
            board.sweep();

            for cell in Cell::all() {
                match (before.cell_state(cell), board.cell_state(cell)) {
                    // confirmed cells stay confirmed
                    (CellState::Digit(old), new) => assert_eq!(new, CellState::Digit(old)),
                    (CellState::Candidates(old), CellState::Candidates(new)) => {
                        assert!(old.contains(new));
                    }
                    // open cells may only collapse to one of their candidates
                    (CellState::Candidates(old), CellState::Digit(new)) => {
                        assert!(old.contains(new));
                    }
                }
            }

            if board == before {
                break;
            }
        }
    }

    #[test]
    fn smallest_guess_is_minimal() {
        let mut board = board(HARD);
        board.propagate();
        assert!(!board.is_filled());
        assert!(!board.reached_contradiction());

        let (guess_cell, guesses) = board.find_smallest_guess();
        assert!(guesses.len() >= 2);
        for cell in Cell::all() {
            if let Some(candidates) = candidates_of(&board, cell) {
                assert!(guesses.len() <= candidates.len());
            }
        }
        assert_eq!(candidates_of(&board, guess_cell), Some(guesses));
    }

    #[test]
    fn sibling_guess_boards_are_independent() {
        let mut parent = board(HARD);
        parent.propagate();
        let (cell, guesses) = parent.find_smallest_guess();

        let mut digits = guesses.into_iter();
        let (first, second) = (digits.next().unwrap(), digits.next().unwrap());

        let grid = parent.to_sudoku();
        let mut first_grid = grid;
        first_grid.0[cell.as_index()] = first.get();
        let mut second_grid = grid;
        second_grid.0[cell.as_index()] = second.get();

        let first_board = Board::from_sudoku(&first_grid);
        let second_board = Board::from_sudoku(&second_grid);
        let second_snapshot = second_board;

        // solving one sibling to the bitter end leaves the other untouched
        let _ = first_board.solve();
        assert_eq!(second_board, second_snapshot);
        assert_eq!(
            second_board.cell_state(cell),
            CellState::Digit(second)
        );
    }

    #[test]
    fn filled_but_invalid_board_is_unsolvable() {
        // fully confirmed, but row 0 and block 0 both contain 5 twice
        let mut grid = [
            [1, 2, 3, 4, 5, 6, 7, 8, 9],
            [4, 5, 6, 7, 8, 9, 1, 2, 3],
            [7, 8, 9, 1, 2, 3, 4, 5, 6],
            [2, 3, 1, 5, 6, 4, 8, 9, 7],
            [5, 6, 4, 8, 9, 7, 2, 3, 1],
            [8, 9, 7, 2, 3, 1, 5, 6, 4],
            [3, 1, 2, 6, 4, 5, 9, 7, 8],
            [6, 4, 5, 9, 7, 8, 3, 1, 2],
            [9, 7, 8, 3, 1, 2, 6, 4, 5],
        ];
        grid[0][0] = 5;

        let board = board(grid);
        assert!(board.is_filled());
        assert!(!board.is_valid());
        assert!(board.solve().is_err());
    }
}
