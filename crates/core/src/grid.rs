//! Grid module - manages the mark grid
//!
//! The grid is a square N×N board where each cell is either marked or not.
//! Uses a flat vector for cache locality; coordinates are (x, y) with x
//! ranging left to right and y top to bottom, both from 0.
//!
//! There is no implicit resizing: out-of-range access fails and the caller
//! decides what to do with the error. Resolution-driven clears go through
//! [`Grid::clear_cells`], which is deliberately a separate operation from
//! [`Grid::toggle`] so that clearing can never feed back into a scan.

use crate::types::{Coord, EngineError};

/// The mark grid - N columns x N rows using flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    /// Flat mark flags, row-major order (y * size + x).
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-unmarked grid.
    ///
    /// Fails with `InvalidDimension` if `size` is not positive.
    pub fn new(size: i32) -> Result<Self, EngineError> {
        if size <= 0 {
            return Err(EngineError::InvalidDimension(size));
        }
        Ok(Self {
            size,
            cells: vec![false; (size * size) as usize],
        })
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.size || y < 0 || y >= self.size {
            return None;
        }
        Some((y * self.size + x) as usize)
    }

    /// Side length of the grid.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether (x, y) lies inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size
    }

    /// Whether the cell at (x, y) is marked.
    ///
    /// Out-of-bounds coordinates are reported unmarked, which lets the
    /// scanner treat "outside the grid" and "unmarked" as the same
    /// short-circuit condition.
    pub fn is_marked(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|idx| self.cells[idx]).unwrap_or(false)
    }

    /// Flip the mark at (x, y) and return the new state.
    ///
    /// Fails with `OutOfBounds` without touching any cell.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<bool, EngineError> {
        let idx = self.index(x, y).ok_or(EngineError::OutOfBounds {
            x,
            y,
            size: self.size,
        })?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Unmark every listed cell without signaling anyone.
    ///
    /// This is the resolution-only mutation path: it never triggers a scan,
    /// and clearing an already-unmarked cell (overlapping batches) is a
    /// no-op rather than an error. Out-of-range entries are skipped; the
    /// sequencer only ever produces in-bounds cells.
    pub fn clear_cells(&mut self, cells: &[Coord]) {
        for &(x, y) in cells {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = false;
            }
        }
    }

    /// Number of currently marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m).count()
    }
}
