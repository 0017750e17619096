use crate::bitset::Set;
use crate::board::Digit;

/// Contains either a digit or all the candidates for an unsolved cell
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum CellState {
    Digit(Digit),
    Candidates(Set<Digit>),
}

impl CellState {
    /// Returns the confirmed digit, if there is one.
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Digit(digit) => Some(digit),
            CellState::Candidates(_) => None,
        }
    }

    /// Returns the candidate set of an open cell, `None` for a confirmed one.
    pub fn candidates(self) -> Option<Set<Digit>> {
        match self {
            CellState::Digit(_) => None,
            CellState::Candidates(candidates) => Some(candidates),
        }
    }
}
