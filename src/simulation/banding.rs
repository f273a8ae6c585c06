//! Ordinal banding of the diffused field
//!
//! Quantizes every interior value into one of five bands by comparing it
//! against fractions of the field maximum, which the caller supplies. The
//! maximum is taken on trust; a stale or wrong value still produces a
//! well-formed band map, just a differently sliced one.

use crate::spatial::grid::{BandGrid, ScalarGrid};

/// Classify every interior cell against the supplied field maximum
///
/// Thresholds are checked top-down at 3/4, 2/4, 1/4 and 1/8 of
/// `max_value`, first match wins, anything lower lands in band 0. Border
/// cells are always band 0.
pub fn classify(grid: &ScalarGrid, max_value: f64) -> BandGrid {
    let mut bands = grid.zeros_like();

    for row in grid.interior() {
        for col in grid.interior() {
            let value = grid.get(row, col).copied().unwrap_or(0.0);
            if let Some(cell) = bands.get_mut(row, col) {
                *cell = band_for(value, max_value);
            }
        }
    }

    bands
}

/// Band for a single value relative to the field maximum
///
/// A non-positive maximum means there is no positive reference to slice
/// against, so every value resolves to band 0. Negative values always
/// fall through the ladder to band 0 as well.
fn band_for(value: f64, max_value: f64) -> u8 {
    if max_value <= 0.0 {
        return 0;
    }

    if value >= max_value * (3.0 / 4.0) {
        4
    } else if value >= max_value * (2.0 / 4.0) {
        3
    } else if value >= max_value * (1.0 / 4.0) {
        2
    } else if value >= max_value / 8.0 {
        1
    } else {
        0
    }
}
