//! Grid representation and neighbor counting

use super::Cell;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-dimensional arrangement of cells, stored as rows of columns.
///
/// Rows may have different lengths. Positions outside the declared rows
/// and columns are treated as dead and are never read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid of dead cells with `height` rows of `width` columns
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Dead; width]; height],
        }
    }

    /// Wrap already-encoded rows
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Create a grid from rows of booleans
    pub fn from_bools(cells: Vec<Vec<bool>>) -> Self {
        Self {
            rows: cells
                .into_iter()
                .map(|row| row.into_iter().map(Cell::from).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of a given row, or `None` past the last row
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Get cell value at coordinates, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell value at coordinates, returning the previous value
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Option<Cell> {
        let slot = self.rows.get_mut(row)?.get_mut(col)?;
        Some(std::mem::replace(slot, cell))
    }

    /// Count living cells among the eight Moore neighbors of `(row, col)`.
    ///
    /// A neighbor only counts when its row exists and its column exists in
    /// that particular row, so the grid behaves as if surrounded by dead cells.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        iproduct!([-1isize, 0, 1], [-1isize, 0, 1])
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dr, dc)| self.is_neighbor_alive(row as isize + dr, col as isize + dc))
            .count() as u8
    }

    fn is_neighbor_alive(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.get(row as usize, col as usize) == Some(Cell::Alive)
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_alive())
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|cell| !cell.is_alive())
    }

    /// Whether `other` has the same number of rows and the same length for each row
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows.len() == other.rows.len()
            && self.rows.iter().zip(&other.rows).all(|(a, b)| a.len() == b.len())
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
