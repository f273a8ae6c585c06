//! The 8-neighbor mean diffusion step
//!
//! One step replaces every interior cell with the arithmetic mean of its
//! eight neighbors in the input field, writing into a fresh zero grid so
//! the border stays zero and the input is never mutated. Repeated
//! application spreads and attenuates the seeded peaks; by the mean-value
//! property no step can create a value above the input maximum.

use crate::spatial::grid::ScalarGrid;

/// Row and column offsets of the eight cells read for one interior cell
const NEIGHBOR_OFFSETS: [[i32; 2]; 8] = [
    [-1, 0],
    [1, 0],
    [0, -1],
    [0, 1],
    [-1, -1],
    [-1, 1],
    [1, -1],
    [1, 1],
];

/// Apply one diffusion step, returning the relaxed field
///
/// Interior cells become the mean of their 8 input neighbors; border cells
/// are zero in the output regardless of their input values. Neighbor reads
/// stay in bounds because the interior is inset two cells from every edge.
pub fn diffuse(grid: &ScalarGrid) -> ScalarGrid {
    let mut next = grid.zeros_like();

    for row in grid.interior() {
        for col in grid.interior() {
            let mut neighbor_sum = 0.0;
            for offset in NEIGHBOR_OFFSETS {
                let neighbor_row = (row as i32 + offset[0]) as usize;
                let neighbor_col = (col as i32 + offset[1]) as usize;
                neighbor_sum += grid
                    .get(neighbor_row, neighbor_col)
                    .copied()
                    .unwrap_or(0.0);
            }

            if let Some(cell) = next.get_mut(row, col) {
                *cell = neighbor_sum / 8.0;
            }
        }
    }

    next
}
