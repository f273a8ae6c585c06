//! Stochastic occupancy sampling from band values
//!
//! Converts a band map into a binary occupancy map with one weighted draw
//! per interior cell. The probability of occupation is
//! `density_modifier * band` percent, compared against a uniform integer
//! draw in `[0, 100)`. Products of 100 or more are deliberately not
//! clamped, so such cells populate on every draw.

use rand::Rng;

use crate::io::configuration::PERCENT_SCALE;
use crate::spatial::grid::{BandGrid, OccupancyGrid};

/// Sample an occupancy map from a band map
///
/// Cells in band 0 are skipped outright and consume no randomness; every
/// other interior cell costs exactly one draw from `rng`, in row-major
/// order, so a seeded generator reproduces the same map. Border cells are
/// always empty.
pub fn populate<R: Rng>(
    bands: &BandGrid,
    density_modifier: f64,
    rng: &mut R,
) -> OccupancyGrid {
    let mut occupancy = bands.zeros_like();

    for row in bands.interior() {
        for col in bands.interior() {
            let band = bands.get(row, col).copied().unwrap_or(0);
            if band == 0 {
                continue;
            }

            let draw = rng.random_range(0..PERCENT_SCALE);
            let viability = density_modifier * f64::from(band);

            if let Some(cell) = occupancy.get_mut(row, col) {
                *cell = u8::from(f64::from(draw) < viability);
            }
        }
    }

    occupancy
}
