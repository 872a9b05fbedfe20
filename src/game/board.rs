use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// Line directions through a pivot cell, in the order a win is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// `/`: lower-left to upper-right
    Incline,
    /// `\`: upper-left to lower-right
    Decline,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::Incline, Axis::Decline];

    /// (row, col) step in one direction; the opposite direction is the negation.
    fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Incline => (1, -1),
            Axis::Decline => (1, 1),
        }
    }
}

/// A `rows x cols` grid stored row-major.
/// Row 0 is the top, row `rows - 1` is the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell at a specific position, or `None` if it is off the board.
    /// Row 0 is the top.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cell(row, col))
    }

    /// Signed variant of [`Board::get`] for walking off the edges
    pub fn try_get(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Iterate rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.cell(0, col) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, GameError> {
        if col >= self.cols {
            return Err(GameError::ColumnOutOfRange {
                column: col as isize,
                columns: self.cols,
            });
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            let idx = self.index(row, col);
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = Cell::Occupied(player);
                return Ok(row);
            }
        }

        Err(GameError::ColumnFull { column: col })
    }

    /// Length of the contiguous run of `player` cells along `axis` through
    /// `(row, col)`. The pivot itself always counts as one.
    pub fn count_line(&self, player: Player, row: usize, col: usize, axis: Axis) -> usize {
        let (dr, dc) = axis.step();
        1 + self.count_direction(player, row, col, dr, dc)
            + self.count_direction(player, row, col, -dr, -dc)
    }

    /// Check if a piece at (row, col) completes a line of `n` or more for `player`
    pub fn check_win(&self, player: Player, row: usize, col: usize, n: usize) -> bool {
        Axis::ALL
            .iter()
            .any(|&axis| self.count_line(player, row, col, axis) >= n)
    }

    fn count_direction(&self, player: Player, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let target = Cell::Occupied(player);
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let mut count = 0;
        while self.try_get(r, c) == Some(target) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside a {}x{} board",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(6, 7)
    }
}
