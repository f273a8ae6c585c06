//! Spatial data structures for the generated field
//!
//! This module contains the grid-related functionality:
//! - Validated square grid storage with the fixed border
//! - Random origin placement into a fresh field

/// Square grid storage and interior region helpers
pub mod grid;
/// Random origin sampling and magnitude stamping
pub mod seeding;

pub use grid::{BandGrid, OccupancyGrid, ScalarGrid, SquareGrid};
