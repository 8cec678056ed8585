use std::collections::HashMap;

use crate::catalog::PuzzleDef;
use crate::grid::{Cell, Grid};

/// Full answer key for one puzzle; rebuilt wholesale on puzzle change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolutionKey {
    letters: HashMap<Cell, char>,
}

impl SolutionKey {
    /// Walks every word's span in declaration order. Later words overwrite
    /// earlier ones where spans share a coordinate.
    pub fn derive(puzzle: &PuzzleDef) -> Self {
        let mut letters = HashMap::new();
        for word in puzzle.words {
            for (cell, letter) in word.letters() {
                letters.insert(cell, letter);
            }
        }
        Self { letters }
    }

    pub fn letter(&self, cell: Cell) -> Option<char> {
        self.letters.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.letters.iter().map(|(&cell, &letter)| (cell, letter))
    }

    /// True iff the key is non-empty and every keyed cell holds the matching
    /// letter in `grid`. Grid entries outside the key are ignored.
    pub fn is_complete(&self, grid: &Grid) -> bool {
        if self.letters.is_empty() {
            return false;
        }
        self.letters
            .iter()
            .all(|(&cell, &letter)| grid.letter(cell) == Some(letter))
    }
}
