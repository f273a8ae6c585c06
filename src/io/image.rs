//! PNG export of generation stage grids
//!
//! Scalar fields render as grayscale normalized to a peak value, band maps
//! through a fixed five-color palette, occupancy maps as black and white.
//! The overview sheet composes one panel per stage into a 2x2 image.

use std::path::Path;

use image::{Rgba, RgbaImage, imageops};

use crate::io::configuration::BAND_COUNT;
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::{BandGrid, OccupancyGrid, ScalarGrid};

/// RGBA color for each ordinal band, darkest to brightest
pub const BAND_PALETTE: [[u8; 4]; BAND_COUNT] = [
    [68, 1, 84, 255],
    [59, 82, 139, 255],
    [33, 145, 140, 255],
    [94, 201, 98, 255],
    [253, 231, 37, 255],
];

// Grayscale rendering against a caller-chosen peak so animation frames can
// share one brightness scale across a whole run
pub(crate) fn render_scalar(grid: &ScalarGrid, peak: f64) -> RgbaImage {
    let side = grid.side() as u32;
    let mut img = RgbaImage::new(side, side);

    for row in 0..grid.side() {
        for col in 0..grid.side() {
            let value = grid.get(row, col).copied().unwrap_or(0.0);
            let level = if peak > 0.0 {
                ((value / peak).clamp(0.0, 1.0) * 255.0) as u8
            } else {
                0
            };

            let pixel_x = col as u32;
            let pixel_y = row as u32;
            img.put_pixel(pixel_x, pixel_y, Rgba([level, level, level, 255]));
        }
    }

    img
}

// Band values above the palette clamp to the brightest entry
fn render_bands(bands: &BandGrid) -> RgbaImage {
    let side = bands.side() as u32;
    let mut img = RgbaImage::new(side, side);

    for row in 0..bands.side() {
        for col in 0..bands.side() {
            let band = bands.get(row, col).copied().unwrap_or(0);
            let color_index = usize::from(band).min(BAND_COUNT - 1);
            let rgba = BAND_PALETTE
                .get(color_index)
                .copied()
                .unwrap_or([0, 0, 0, 255]);

            img.put_pixel(col as u32, row as u32, Rgba(rgba));
        }
    }

    img
}

fn render_occupancy(grid: &OccupancyGrid) -> RgbaImage {
    let side = grid.side() as u32;
    let mut img = RgbaImage::new(side, side);

    for row in 0..grid.side() {
        for col in 0..grid.side() {
            let occupied = grid.get(row, col).copied().unwrap_or(0) != 0;
            let color = if occupied {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            };

            img.put_pixel(col as u32, row as u32, color);
        }
    }

    img
}

fn save_image(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GenerationError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Export a scalar field as a grayscale PNG normalized to its own peak
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_scalar_as_png(grid: &ScalarGrid, output_path: &Path) -> Result<()> {
    let (peak, _) = grid.peak();
    save_image(&render_scalar(grid, peak), output_path)
}

/// Export a band map as a PNG through the band palette
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_bands_as_png(bands: &BandGrid, output_path: &Path) -> Result<()> {
    save_image(&render_bands(bands), output_path)
}

/// Export an occupancy map as a black and white PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_occupancy_as_png(grid: &OccupancyGrid, output_path: &Path) -> Result<()> {
    save_image(&render_occupancy(grid), output_path)
}

/// Export a 2x2 overview sheet of the run
///
/// Panels are arranged seeded top-left, banded top-right, diffused
/// bottom-left and populated bottom-right, each at one pixel per cell.
/// All four grids come from one run and share the seeded grid's side.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_overview_sheet(
    seeded: &ScalarGrid,
    diffused: &ScalarGrid,
    banded: &BandGrid,
    populated: &OccupancyGrid,
    output_path: &Path,
) -> Result<()> {
    let side = seeded.side() as u32;
    let mut sheet = RgbaImage::from_pixel(side * 2, side * 2, Rgba([0, 0, 0, 255]));

    let (seeded_peak, _) = seeded.peak();
    let (diffused_peak, _) = diffused.peak();

    imageops::replace(&mut sheet, &render_scalar(seeded, seeded_peak), 0, 0);
    imageops::replace(&mut sheet, &render_bands(banded), i64::from(side), 0);
    imageops::replace(
        &mut sheet,
        &render_scalar(diffused, diffused_peak),
        0,
        i64::from(side),
    );
    imageops::replace(
        &mut sheet,
        &render_occupancy(populated),
        i64::from(side),
        i64::from(side),
    );

    save_image(&sheet, output_path)
}
