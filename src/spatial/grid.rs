//! Bordered square grid storage shared by every generation stage
//!
//! Wraps an ndarray matrix behind validated construction so downstream
//! stages can rely on the field being square, large enough to hold an
//! interior, and small enough to allocate. The outer two-cell border is
//! never written by any stage; the interior helpers here define exactly
//! which indices a stage may touch.

use std::ops::Range;

use ndarray::Array2;
use num_traits::Zero;

use crate::io::configuration::{BORDER_WIDTH, MAX_GRID_DIMENSION, MIN_GRID_SIZE};
use crate::io::error::{GenerationError, Result, invalid_parameter};

/// Scalar field produced by seeding and diffusion
pub type ScalarGrid = SquareGrid<f64>;

/// Ordinal band map produced by classification (values 0..=4)
pub type BandGrid = SquareGrid<u8>;

/// Binary occupancy map produced by population (values 0 or 1)
pub type OccupancyGrid = SquareGrid<u8>;

/// Square matrix with a fixed untouched border
///
/// Construction validates the geometry once so the stage sweeps can stay
/// total functions: a held grid is always square with a side in
/// `[MIN_GRID_SIZE, MAX_GRID_DIMENSION]`, which guarantees every interior
/// cell has a full 8-neighborhood inside the allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareGrid<T> {
    cells: Array2<T>,
}

impl<T> SquareGrid<T> {
    /// Wrap an existing matrix, validating the square bordered-field contract
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidGrid` if the matrix is not square,
    /// leaves no interior inside the border, or exceeds the maximum
    /// dimension.
    pub fn from_array(cells: Array2<T>) -> Result<Self> {
        let (rows, cols) = cells.dim();

        if rows != cols {
            return Err(GenerationError::InvalidGrid {
                rows,
                cols,
                reason: "field must be square",
            });
        }

        if rows < MIN_GRID_SIZE {
            return Err(GenerationError::InvalidGrid {
                rows,
                cols,
                reason: "side leaves no interior cells inside the border",
            });
        }

        if rows > MAX_GRID_DIMENSION {
            return Err(GenerationError::InvalidGrid {
                rows,
                cols,
                reason: "side exceeds the maximum grid dimension",
            });
        }

        Ok(Self { cells })
    }

    /// Side length of the square field
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Index range of the interior in both dimensions
    ///
    /// Cells outside this range form the border and keep their initial
    /// value through every stage.
    pub fn interior(&self) -> Range<usize> {
        BORDER_WIDTH..self.side() - BORDER_WIDTH
    }

    /// Check whether a position lies strictly inside the border
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        self.interior().contains(&row) && self.interior().contains(&col)
    }

    /// Get a cell value, or `None` when the position is out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get([row, col])
    }

    /// Get a mutable cell reference, or `None` when out of bounds
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.cells.get_mut([row, col])
    }

    /// Borrow the underlying matrix for rendering and inspection
    pub const fn cells(&self) -> &Array2<T> {
        &self.cells
    }

    /// Allocate a zero-filled grid of the same side, with any cell type
    ///
    /// Stage outputs are allocated through this so they inherit the already
    /// validated geometry of their input without re-checking it.
    pub fn zeros_like<U: Zero + Clone>(&self) -> SquareGrid<U> {
        SquareGrid {
            cells: Array2::zeros(self.cells.raw_dim()),
        }
    }
}

impl<T: Zero + Clone> SquareGrid<T> {
    /// Allocate a zero-filled field of the given side length
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidParameter` if the side is below the
    /// minimum grid size or above the maximum dimension.
    pub fn new(side: usize) -> Result<Self> {
        if side < MIN_GRID_SIZE {
            return Err(invalid_parameter(
                "grid_size",
                &side,
                &format!("must be at least {MIN_GRID_SIZE} to leave an interior"),
            ));
        }

        if side > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "grid_size",
                &side,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }

        Ok(Self {
            cells: Array2::zeros((side, side)),
        })
    }
}

impl SquareGrid<f64> {
    /// Largest cell value and the first position holding it
    ///
    /// Positions are scanned in row-major order, so ties resolve to the
    /// earliest cell, matching a flat argmax over the field.
    pub fn peak(&self) -> (f64, [usize; 2]) {
        let mut peak_value = f64::NEG_INFINITY;
        let mut peak_position = [0, 0];

        for ((row, col), &value) in self.cells.indexed_iter() {
            if value > peak_value {
                peak_value = value;
                peak_position = [row, col];
            }
        }

        (peak_value, peak_position)
    }
}
