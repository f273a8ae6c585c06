//! Command-line interface for generating and exporting diffusion maps

use crate::io::configuration::{
    BANDED_IMAGE_NAME, DEFAULT_DENSITY_MODIFIERS, DEFAULT_GRID_SIZE, DEFAULT_ITERATION_COUNT,
    DEFAULT_ORIGIN_COUNT, DEFAULT_SEED, DEFAULT_SEED_MAGNITUDE, DIFFUSED_IMAGE_NAME,
    DIFFUSION_GIF_NAME, GIF_FRAME_DELAY_MS, POPULATED_IMAGE_PREFIX, SEEDED_IMAGE_NAME,
    SHEET_IMAGE_NAME,
};
use crate::io::error::Result;
use crate::io::image::{
    export_bands_as_png, export_occupancy_as_png, export_overview_sheet, export_scalar_as_png,
};
use crate::io::progress::ProgressManager;
use crate::simulation::pipeline::{Generation, GenerationConfig, Generator};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "driftmap")]
#[command(
    author,
    version,
    about = "Generate maps by seeded diffusion, banding and stochastic population"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Directory where generated images are written
    #[arg(value_name = "OUTPUT_DIR", default_value = "maps")]
    pub output: PathBuf,

    /// Side length of the square map
    #[arg(short = 'g', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Number of random origin cells stamped before diffusion
    #[arg(short, long, default_value_t = DEFAULT_ORIGIN_COUNT)]
    pub origins: usize,

    /// Magnitude stamped at each origin cell
    #[arg(short, long, default_value_t = DEFAULT_SEED_MAGNITUDE)]
    pub magnitude: f64,

    /// Number of diffusion steps
    #[arg(short, long, default_value_t = DEFAULT_ITERATION_COUNT)]
    pub iterations: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Density modifier; repeat for one occupancy map per value
    #[arg(short, long = "density", value_name = "MODIFIER")]
    pub densities: Vec<f64>,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip the four-panel overview sheet
    #[arg(long)]
    pub no_sheet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the overview sheet should be written
    pub const fn should_write_sheet(&self) -> bool {
        !self.no_sheet
    }

    /// Build the run configuration from the parsed arguments
    ///
    /// An empty density list falls back to the default modifiers.
    pub fn config(&self) -> GenerationConfig {
        let density_modifiers = if self.densities.is_empty() {
            DEFAULT_DENSITY_MODIFIERS.to_vec()
        } else {
            self.densities.clone()
        };

        GenerationConfig {
            grid_size: self.grid_size,
            origin_count: self.origins,
            seed_magnitude: self.magnitude,
            iteration_count: self.iterations,
            density_modifiers,
            seed: self.seed,
        }
    }
}

/// Orchestrates one generation run with progress tracking and export
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.iterations));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the configured generation and export every output
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, origin placement or
    /// any file export fails
    pub fn process(&mut self) -> Result<()> {
        let mut generator = Generator::new(self.cli.config())?;

        if self.cli.visualize {
            generator.enable_visualization();
        }

        while generator.advance() {
            if let Some(ref pm) = self.progress_manager {
                pm.update_iteration(generator.iteration());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let generation = generator.finish();

        self.export_fields(&generation)?;
        self.export_occupancy_maps(&generation)?;
        self.export_sheet(&generation)?;
        self.export_animation(&generation)?;
        self.print_summary(&generation);

        Ok(())
    }

    fn export_fields(&self, generation: &Generation) -> Result<()> {
        let seeded_path = self.cli.output.join(SEEDED_IMAGE_NAME);
        export_scalar_as_png(&generation.seeded, &seeded_path)?;
        self.announce(&format!("Wrote {}", seeded_path.display()));

        let diffused_path = self.cli.output.join(DIFFUSED_IMAGE_NAME);
        export_scalar_as_png(&generation.diffused, &diffused_path)?;
        self.announce(&format!("Wrote {}", diffused_path.display()));

        let banded_path = self.cli.output.join(BANDED_IMAGE_NAME);
        export_bands_as_png(&generation.banded, &banded_path)?;
        self.announce(&format!("Wrote {}", banded_path.display()));

        Ok(())
    }

    fn export_occupancy_maps(&self, generation: &Generation) -> Result<()> {
        for (index, occupancy) in generation.populated.iter().enumerate() {
            let file_name = format!("{POPULATED_IMAGE_PREFIX}_{}.png", index + 1);
            let path = self.cli.output.join(file_name);
            export_occupancy_as_png(occupancy, &path)?;
            self.announce(&format!("Wrote {}", path.display()));
        }

        Ok(())
    }

    fn export_sheet(&self, generation: &Generation) -> Result<()> {
        if !self.cli.should_write_sheet() {
            return Ok(());
        }

        // Validation guarantees at least one occupancy map
        let Some(populated) = generation.populated.last() else {
            return Ok(());
        };

        let path = self.cli.output.join(SHEET_IMAGE_NAME);
        export_overview_sheet(
            &generation.seeded,
            &generation.diffused,
            &generation.banded,
            populated,
            &path,
        )?;
        self.announce(&format!("Wrote {}", path.display()));

        Ok(())
    }

    fn export_animation(&self, generation: &Generation) -> Result<()> {
        let Some(capture) = &generation.capture else {
            return Ok(());
        };

        let path = self.cli.output.join(DIFFUSION_GIF_NAME);
        capture.export_gif(&path, GIF_FRAME_DELAY_MS)?;
        self.announce(&format!("Wrote {}", path.display()));

        Ok(())
    }

    fn announce(&self, message: &str) {
        if let Some(ref pm) = self.progress_manager {
            pm.announce(message);
        }
    }

    // Allow print for user feedback once the bar is done
    #[allow(clippy::print_stderr)]
    fn print_summary(&self, generation: &Generation) {
        if self.cli.quiet {
            return;
        }

        let report = &generation.report;
        eprintln!(
            "Peak {:.3} at ({}, {}) from {} origins; outputs in '{}'",
            report.peak_value,
            report.peak_position[0],
            report.peak_position[1],
            report.origins.len(),
            self.cli.output.display()
        );
    }
}
