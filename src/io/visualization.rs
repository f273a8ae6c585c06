//! Frame capture and GIF generation for the diffusion progression
//!
//! Records one snapshot of the scalar field per diffusion step and encodes
//! the sequence as an animated GIF. All frames share one grayscale range
//! anchored at the brightest value seen across the run, so the animation
//! shows the seeded peaks fading as they spread.

use std::path::Path;

use image::{Delay, Frame};

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{GenerationError, Result};
use crate::io::image::render_scalar;
use crate::spatial::grid::ScalarGrid;

/// Captures per-step field snapshots for animation export
pub struct DiffusionCapture {
    frames: Vec<ScalarGrid>,
}

impl DiffusionCapture {
    /// Create an empty capture sized for the expected number of frames
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
        }
    }

    /// Record the current field as the next animation frame
    pub fn record_step(&mut self, field: &ScalarGrid) {
        self.frames.push(field.clone());
    }

    /// Returns the number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// Skips frames when the requested delay is shorter than what viewers
    /// honor. For example, a 5ms delay (200 FPS) against a 50ms viewer
    /// floor keeps every 10th frame so the apparent speed is preserved.
    /// The final frame is held longer so the settled field stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(GenerationError::EmptyCapture);
        }

        let requested_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = requested_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if requested_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(requested_delay_ms)
        } else {
            1
        };

        let frames = self.assemble_frames(effective_delay_ms, skip_factor as usize);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn assemble_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        // One brightness scale across the run keeps the fade-out visible
        let peak = self
            .frames
            .iter()
            .map(|field| field.peak().0)
            .fold(0.0_f64, f64::max);

        let mut frames = Vec::new();
        let last_index = self.frames.len() - 1;

        // The last frame is always kept so the animation ends on the
        // settled field even when skipping drops its slot
        for (index, field) in self.frames.iter().enumerate() {
            if index % skip_factor == 0 || index == last_index {
                frames.push(Frame::from_parts(
                    render_scalar(field, peak),
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay_ms, 1),
                ));
            }
        }

        // Final frame displays longer for better visibility
        let final_frame_delay = delay_ms * 25;
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                Delay::from_numer_denom_ms(final_frame_delay, 1),
            ));
        }

        frames
    }
}
