//! Board module - owns the gem grid
//!
//! The grid is a flat, row-major `Vec<Cell>` addressed by (row, col) with
//! origin top-left. Flat storage keeps index arithmetic cheap and makes the
//! in-place mutation contracts (swap, collapse, trial swaps) easy to reason
//! about. Dimensions and color count are runtime configuration, validated
//! once at generation time.

use crate::core::rng::SimpleRng;
use crate::types::{Cell, ConfigError, Gem, Pos, MIN_BOARD_DIM, MIN_COLORS, MIN_RUN};

/// The gem grid
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    colors: u8,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Generate a fully populated, match-free board.
    ///
    /// Cells are filled top-left to bottom-right with uniform random colors.
    /// A candidate color that would complete a run of `MIN_RUN` against the
    /// cells already placed to its left or above is cycled to the next color,
    /// so a single pass always ends match-free (at most two colors are ever
    /// forbidden at a cell, and at least three exist).
    ///
    /// Fails fast when the configuration cannot host 3-in-a-row rules.
    pub fn generate(
        rows: usize,
        cols: usize,
        colors: u8,
        rng: &mut SimpleRng,
    ) -> Result<Self, ConfigError> {
        if rows < MIN_BOARD_DIM || cols < MIN_BOARD_DIM {
            return Err(ConfigError::BoardTooSmall { rows, cols });
        }
        if colors < MIN_COLORS {
            return Err(ConfigError::TooFewColors { colors });
        }

        let mut board = Self {
            rows,
            cols,
            colors,
            cells: vec![None; rows * cols],
        };

        for row in 0..rows {
            for col in 0..cols {
                let mut color = rng.next_color(colors);
                while board.completes_run(row, col, color) {
                    color = (color + 1) % colors;
                }
                board.cells[row * cols + col] = Some(Gem::normal(color));
            }
        }

        debug_assert!(crate::core::matcher::find_matches(&board).is_empty());
        Ok(board)
    }

    /// Build a board from explicit color indices (one slice per row).
    /// Panics on ragged input or colors outside `[0, colors)`.
    pub fn from_rows(colors: u8, rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty());
        let cols = rows[0].len();
        assert!(rows.iter().all(|row| row.len() == cols));

        let cells = rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|&color| {
                assert!(color < colors);
                Some(Gem::normal(color))
            })
            .collect();

        Self {
            rows: rows.len(),
            cols,
            colors,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn colors(&self) -> u8 {
        self.colors
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.row * self.cols + pos.col)
    }

    /// Flat index for an in-bounds (row, col); callers guarantee bounds
    #[inline(always)]
    pub(crate) fn flat(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get cell at position. Returns None if out of bounds.
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position. Returns false if out of bounds.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Exchange the contents of two Manhattan-adjacent cells.
    /// Any other pair is a rejected no-op returning false.
    pub fn try_swap(&mut self, a: Pos, b: Pos) -> bool {
        if !a.is_adjacent(&b) {
            return false;
        }
        let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) else {
            return false;
        };
        self.cells.swap(ia, ib);
        true
    }

    /// Unchecked exchange by flat index (trial swaps during move scanning)
    pub(crate) fn swap_indices(&mut self, ia: usize, ib: usize) {
        self.cells.swap(ia, ib);
    }

    /// Compact one column downward in place, preserving the relative vertical
    /// order of gems and leaving empties at the top. Two-pointer scan from
    /// the bottom, no allocation.
    pub fn collapse_column(&mut self, col: usize) {
        debug_assert!(col < self.cols);

        let mut write_row = self.rows;
        for read_row in (0..self.rows).rev() {
            let idx = self.flat(read_row, col);
            if let Some(gem) = self.cells[idx] {
                write_row -= 1;
                if write_row != read_row {
                    let dst = self.flat(write_row, col);
                    self.cells[dst] = Some(gem);
                }
            }
        }

        for row in 0..write_row {
            let idx = self.flat(row, col);
            self.cells[idx] = None;
        }
    }

    /// Assign fresh random colors to every empty cell, scanning top-left to
    /// bottom-right so the draw order (and thus the refill) is deterministic.
    pub fn fill_empties(&mut self, rng: &mut SimpleRng) {
        let colors = self.colors;
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(Gem::normal(rng.next_color(colors)));
            }
        }
    }

    /// True when no cell is empty
    pub fn is_fully_populated(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of non-empty cells
    pub fn gem_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Encode the grid for snapshots: 0 = empty, otherwise color + 1
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.cells.len());
        out.extend(
            self.cells
                .iter()
                .map(|cell| cell.map_or(0, |gem| gem.color + 1)),
        );
    }

    /// Would placing `color` at (row, col) complete a run against the cells
    /// already placed to the left or above?
    fn completes_run(&self, row: usize, col: usize, color: u8) -> bool {
        let same = |r: usize, c: usize| {
            matches!(self.cells[self.flat(r, c)], Some(gem) if gem.color == color)
        };
        if col + 1 >= MIN_RUN && same(row, col - 1) && same(row, col - 2) {
            return true;
        }
        if row + 1 >= MIN_RUN && same(row - 1, col) && same(row - 2, col) {
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GemVariant;

    #[test]
    fn test_index_calculation() {
        let mut rng = SimpleRng::new(1);
        let board = Board::generate(4, 5, 3, &mut rng).unwrap();

        assert_eq!(board.index(Pos::new(0, 0)), Some(0));
        assert_eq!(board.index(Pos::new(0, 4)), Some(4));
        assert_eq!(board.index(Pos::new(1, 0)), Some(5));
        assert_eq!(board.index(Pos::new(3, 4)), Some(19));
        assert_eq!(board.index(Pos::new(4, 0)), None);
        assert_eq!(board.index(Pos::new(0, 5)), None);
    }

    #[test]
    fn test_generate_rejects_bad_config() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            Board::generate(2, 8, 5, &mut rng),
            Err(ConfigError::BoardTooSmall { rows: 2, cols: 8 })
        );
        assert_eq!(
            Board::generate(8, 2, 5, &mut rng),
            Err(ConfigError::BoardTooSmall { rows: 8, cols: 2 })
        );
        assert_eq!(
            Board::generate(8, 8, 2, &mut rng),
            Err(ConfigError::TooFewColors { colors: 2 })
        );
    }

    #[test]
    fn test_generate_is_full_and_in_range() {
        let mut rng = SimpleRng::new(99);
        let board = Board::generate(8, 8, 6, &mut rng).unwrap();

        assert!(board.is_fully_populated());
        assert_eq!(board.gem_count(), 64);
        for cell in board.cells() {
            let gem = cell.unwrap();
            assert!(gem.color < 6);
            assert_eq!(gem.variant, GemVariant::Normal);
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let mut rng1 = SimpleRng::new(4242);
        let mut rng2 = SimpleRng::new(4242);
        let a = Board::generate(8, 8, 6, &mut rng1).unwrap();
        let b = Board::generate(8, 8, 6, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_try_swap_adjacent() {
        let mut board = Board::from_rows(3, &[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]]);

        let a = Pos::new(0, 0);
        let b = Pos::new(0, 1);
        assert!(board.try_swap(a, b));
        assert_eq!(board.get(a), Some(Some(Gem::normal(1))));
        assert_eq!(board.get(b), Some(Some(Gem::normal(0))));
    }

    #[test]
    fn test_try_swap_rejects_non_adjacent() {
        let mut board = Board::from_rows(3, &[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]]);
        let before = board.clone();

        // Diagonal
        assert!(!board.try_swap(Pos::new(0, 0), Pos::new(1, 1)));
        // Same cell
        assert!(!board.try_swap(Pos::new(1, 1), Pos::new(1, 1)));
        // Distance 2
        assert!(!board.try_swap(Pos::new(0, 0), Pos::new(0, 2)));
        // Out of bounds
        assert!(!board.try_swap(Pos::new(2, 2), Pos::new(2, 3)));

        assert_eq!(board, before);
    }

    #[test]
    fn test_collapse_column_preserves_order() {
        let mut board = Board::from_rows(4, &[&[0, 3], &[1, 3], &[2, 3]]);
        // Punch holes at the bottom and middle of column 0
        board.set(Pos::new(1, 0), None);
        board.set(Pos::new(2, 0), None);

        board.collapse_column(0);

        assert_eq!(board.get(Pos::new(0, 0)), Some(None));
        assert_eq!(board.get(Pos::new(1, 0)), Some(None));
        assert_eq!(board.get(Pos::new(2, 0)), Some(Some(Gem::normal(0))));
        // Column 1 untouched
        for row in 0..3 {
            assert_eq!(board.get(Pos::new(row, 1)), Some(Some(Gem::normal(3))));
        }
    }

    #[test]
    fn test_collapse_column_keeps_relative_order() {
        let mut board = Board::from_rows(4, &[&[0, 0], &[1, 0], &[2, 0], &[3, 0]]);
        board.set(Pos::new(1, 0), None);
        board.set(Pos::new(3, 0), None);

        board.collapse_column(0);

        assert_eq!(board.get(Pos::new(0, 0)), Some(None));
        assert_eq!(board.get(Pos::new(1, 0)), Some(None));
        assert_eq!(board.get(Pos::new(2, 0)), Some(Some(Gem::normal(0))));
        assert_eq!(board.get(Pos::new(3, 0)), Some(Some(Gem::normal(2))));
    }

    #[test]
    fn test_fill_empties() {
        let mut board = Board::from_rows(5, &[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]]);
        board.set(Pos::new(0, 0), None);
        board.set(Pos::new(2, 2), None);
        assert!(!board.is_fully_populated());

        let mut rng = SimpleRng::new(17);
        board.fill_empties(&mut rng);

        assert!(board.is_fully_populated());
        for cell in board.cells() {
            assert!(cell.unwrap().color < 5);
        }
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::from_rows(3, &[&[0, 1, 2], &[2, 1, 0], &[1, 0, 2]]);
        board.set(Pos::new(0, 1), None);

        let mut grid = Vec::new();
        board.write_u8_grid(&mut grid);
        assert_eq!(grid, vec![1, 0, 3, 3, 2, 1, 2, 1, 3]);
    }
}
