use std::collections::{HashMap, HashSet};

use crate::catalog::PuzzleDef;
use crate::grid::{Cell, Grid};
use crate::solution::SolutionKey;

/// Per-puzzle lookup tables plus the focus/edit rules of the playing surface.
/// Built once per active puzzle; every operation is pure over the grid and
/// focus values handed in, so callers can keep both in reactive state handles.
pub struct Board {
    puzzle: &'static PuzzleDef,
    solution: SolutionKey,
    valid: HashSet<Cell>,
    numbers: HashMap<Cell, u32>,
}

impl Board {
    pub fn new(puzzle: &'static PuzzleDef) -> Self {
        let solution = SolutionKey::derive(puzzle);
        let mut valid = HashSet::new();
        let mut numbers = HashMap::new();
        for (index, word) in puzzle.words.iter().enumerate() {
            // 1-based declaration index; the first word to claim a cell wins.
            numbers.entry(word.start()).or_insert(index as u32 + 1);
            valid.extend(word.cells());
        }
        Self {
            puzzle,
            solution,
            valid,
            numbers,
        }
    }

    pub fn puzzle(&self) -> &'static PuzzleDef {
        self.puzzle
    }

    pub fn solution(&self) -> &SolutionKey {
        &self.solution
    }

    pub fn is_valid(&self, cell: Cell) -> bool {
        self.valid.contains(&cell)
    }

    /// Clue-reference number shown in the cell's corner, if it starts a word.
    pub fn number(&self, cell: Cell) -> Option<u32> {
        self.numbers.get(&cell).copied()
    }

    pub fn first_cell(&self) -> Option<Cell> {
        self.puzzle.words.first().map(|word| word.start())
    }

    pub fn is_complete(&self, grid: &Grid) -> bool {
        self.solution.is_complete(grid)
    }

    /// One-cell focus move; refused (focus unchanged) when the destination is
    /// not part of the puzzle.
    pub fn move_focus(&self, focus: Cell, dx: i32, dy: i32) -> Cell {
        let next = focus.offset(dx, dy);
        if self.valid.contains(&next) {
            next
        } else {
            focus
        }
    }

    /// Clears a filled cell in place; on an already-empty cell, tries to step
    /// the focus one cell left instead.
    pub fn backspace(&self, grid: &Grid, focus: Cell) -> (Grid, Cell) {
        if grid.is_filled(focus) {
            (grid.with_letter(focus, None), focus)
        } else {
            (grid.clone(), self.move_focus(focus, -1, 0))
        }
    }

    /// Applies raw text input to the focused cell: only the last character
    /// counts, uppercased. Empty input clears the cell. A single Latin letter
    /// is written and focus auto-advances right, then down, when the
    /// neighbour is a puzzle cell. Anything else returns `None` (rejected).
    pub fn enter(&self, grid: &Grid, focus: Cell, raw: &str) -> Option<(Grid, Cell)> {
        let Some(last) = raw.chars().last() else {
            return Some((grid.with_letter(focus, None), focus));
        };
        let letter = last.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let grid = grid.with_letter(focus, Some(letter));
        let right = focus.offset(1, 0);
        let below = focus.offset(0, 1);
        let next = if self.valid.contains(&right) {
            right
        } else if self.valid.contains(&below) {
            below
        } else {
            focus
        };
        Some((grid, next))
    }

    /// Writes the solution letter into the focused cell, keeping focus. With
    /// no focus at all, focuses the first word's start and writes nothing.
    /// A focused cell without a solution letter is left untouched.
    pub fn hint(&self, grid: &Grid, focus: Option<Cell>) -> (Grid, Option<Cell>) {
        let Some(cell) = focus else {
            return (grid.clone(), self.first_cell());
        };
        match self.solution.letter(cell) {
            Some(letter) => (grid.with_letter(cell, Some(letter)), Some(cell)),
            None => (grid.clone(), Some(cell)),
        }
    }

    /// Bulk-writes the entire solution key over the grid in one step.
    pub fn reveal_all(&self, grid: &Grid) -> Grid {
        grid.merged(self.solution.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::puzzle_by_id;

    fn dna_board() -> Board {
        Board::new(puzzle_by_id(1).expect("fixture catalogue has puzzle 1"))
    }

    #[test]
    fn arrow_moves_stop_at_non_puzzle_cells() {
        let board = dna_board();
        // (4,0) G of GENOME; (5,0) is part of A1 GENE.
        assert_eq!(board.move_focus(Cell::new(4, 0), 1, 0), Cell::new(5, 0));
        // Nothing above the first row.
        assert_eq!(board.move_focus(Cell::new(4, 0), 0, -1), Cell::new(4, 0));
        // (7,0) is the last letter of GENE; (8,0) belongs to no word.
        assert_eq!(board.move_focus(Cell::new(7, 0), 1, 0), Cell::new(7, 0));
    }

    #[test]
    fn typing_advances_right_then_down() {
        let board = dna_board();
        let (grid, focus) = board
            .enter(&Grid::empty(), Cell::new(4, 0), "G")
            .expect("letter accepted");
        assert_eq!(grid.letter(Cell::new(4, 0)), Some('G'));
        assert_eq!(focus, Cell::new(5, 0));

        // GENE ends at (7,0); nothing to the right, but HELIX sits below.
        let (_, end_focus) = board
            .enter(&Grid::empty(), Cell::new(7, 0), "E")
            .expect("letter accepted");
        assert_eq!(end_focus, Cell::new(7, 1));

        // The backbone tail (4,5) has no valid neighbour either way.
        let (_, tail_focus) = board
            .enter(&Grid::empty(), Cell::new(4, 5), "E")
            .expect("letter accepted");
        assert_eq!(tail_focus, Cell::new(4, 5));
    }

    #[test]
    fn typing_lowercase_and_multichar_keeps_last_uppercased() {
        let board = dna_board();
        let (grid, _) = board
            .enter(&Grid::empty(), Cell::new(4, 0), "ag")
            .expect("letter accepted");
        assert_eq!(grid.letter(Cell::new(4, 0)), Some('G'));
    }

    #[test]
    fn typing_rejects_non_letters() {
        let board = dna_board();
        assert!(board.enter(&Grid::empty(), Cell::new(4, 0), "3").is_none());
        assert!(board.enter(&Grid::empty(), Cell::new(4, 0), "!").is_none());
    }

    #[test]
    fn empty_input_clears_without_advancing() {
        let board = dna_board();
        let grid = Grid::empty().with_letter(Cell::new(4, 0), Some('G'));
        let (cleared, focus) = board
            .enter(&grid, Cell::new(4, 0), "")
            .expect("clear accepted");
        assert_eq!(cleared.letter(Cell::new(4, 0)), None);
        assert_eq!(focus, Cell::new(4, 0));
    }

    #[test]
    fn backspace_clears_then_steps_left() {
        let board = dna_board();
        let grid = Grid::empty().with_letter(Cell::new(5, 0), Some('E'));
        let (cleared, focus) = board.backspace(&grid, Cell::new(5, 0));
        assert_eq!(cleared.letter(Cell::new(5, 0)), None);
        assert_eq!(focus, Cell::new(5, 0));

        let (unchanged, moved) = board.backspace(&cleared, Cell::new(5, 0));
        assert_eq!(unchanged, cleared);
        assert_eq!(moved, Cell::new(4, 0));
    }

    #[test]
    fn backspace_on_empty_left_edge_keeps_focus() {
        let board = dna_board();
        // (2,2) starts INTRON; (1,2) is not a puzzle cell.
        let (_, focus) = board.backspace(&Grid::empty(), Cell::new(2, 2));
        assert_eq!(focus, Cell::new(2, 2));
    }

    #[test]
    fn hint_writes_the_solution_letter_in_place() {
        let board = dna_board();
        let (grid, focus) = board.hint(&Grid::empty(), Some(Cell::new(4, 0)));
        assert_eq!(grid.letter(Cell::new(4, 0)), Some('G'));
        assert_eq!(focus, Some(Cell::new(4, 0)));
    }

    #[test]
    fn hint_without_focus_only_focuses_the_first_word() {
        let board = dna_board();
        let (grid, focus) = board.hint(&Grid::empty(), None);
        assert!(grid.is_empty());
        assert_eq!(focus, Some(Cell::new(4, 0)));
    }

    #[test]
    fn hint_on_a_blocked_cell_is_a_no_op() {
        let board = dna_board();
        let (grid, focus) = board.hint(&Grid::empty(), Some(Cell::new(0, 0)));
        assert!(grid.is_empty());
        assert_eq!(focus, Some(Cell::new(0, 0)));
    }

    #[test]
    fn reveal_all_completes_the_puzzle() {
        let board = dna_board();
        let revealed = board.reveal_all(&Grid::empty());
        assert!(board.is_complete(&revealed));
        assert_eq!(board.reveal_all(&revealed), revealed);
    }

    #[test]
    fn cell_numbers_follow_declaration_order() {
        let board = dna_board();
        // D1 and A1 share (4,0); D1 is declared first and keeps the number.
        assert_eq!(board.number(Cell::new(4, 0)), Some(1));
        // A2 HELIX is the third declared word.
        assert_eq!(board.number(Cell::new(3, 1)), Some(3));
        assert_eq!(board.number(Cell::new(5, 1)), None);
    }
}
