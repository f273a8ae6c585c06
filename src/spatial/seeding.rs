//! Random origin placement for the initial scalar field
//!
//! Stamps the seed magnitude at distinct interior cells chosen by rejection
//! sampling. A flat bitset over the interior tracks claimed cells, and a
//! fixed draw budget bounds the rejection loop so placement either finishes
//! or fails loudly instead of spinning on a nearly full interior.

use bitvec::prelude::*;
use rand::Rng;

use crate::io::configuration::{BORDER_WIDTH, ORIGIN_ATTEMPT_FACTOR};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::grid::ScalarGrid;

/// Stamp `magnitude` at `origin_count` distinct interior cells
///
/// Draws row and column indices uniformly from the interior range and
/// rejects cells that are already claimed. The budget is
/// `origin_count * ORIGIN_ATTEMPT_FACTOR` draws in total. Returns the
/// placed coordinates in placement order.
///
/// # Errors
///
/// Returns `GenerationError::InvalidParameter` if the interior cannot hold
/// `origin_count` distinct cells, and `GenerationError::OriginPlacement` if
/// the draw budget runs out first.
pub fn place_origins<R: Rng>(
    grid: &mut ScalarGrid,
    origin_count: usize,
    magnitude: f64,
    rng: &mut R,
) -> Result<Vec<[usize; 2]>> {
    let span = grid.interior().len();
    let capacity = span * span;

    if origin_count > capacity {
        return Err(invalid_parameter(
            "origin_count",
            &origin_count,
            &format!("interior of a {0}x{0} field holds only {capacity} cells", grid.side()),
        ));
    }

    let attempt_budget = origin_count * ORIGIN_ATTEMPT_FACTOR;
    let mut claimed = bitvec![0; capacity];
    let mut origins = Vec::with_capacity(origin_count);
    let mut attempts = 0;

    while origins.len() < origin_count && attempts < attempt_budget {
        attempts += 1;

        let row = rng.random_range(grid.interior());
        let col = rng.random_range(grid.interior());
        let claim_index = (row - BORDER_WIDTH) * span + (col - BORDER_WIDTH);

        if claimed.get(claim_index).as_deref() == Some(&true) {
            continue;
        }
        claimed.set(claim_index, true);

        if let Some(cell) = grid.get_mut(row, col) {
            *cell = magnitude;
        }
        origins.push([row, col]);
    }

    if origins.len() < origin_count {
        return Err(GenerationError::OriginPlacement {
            requested: origin_count,
            placed: origins.len(),
            attempts,
        });
    }

    Ok(origins)
}
