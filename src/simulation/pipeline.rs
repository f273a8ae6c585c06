//! Run configuration and the stepwise generation executor
//!
//! `Generator` owns the full state of one run: the validated configuration,
//! the single seeded random source shared by origin placement and
//! population, and the evolving scalar field. Callers drive diffusion one
//! step at a time so they can report progress in between, then collect all
//! stage outputs at once.

use rand::{SeedableRng, rngs::StdRng};

use crate::io::configuration::{
    BORDER_WIDTH, DEFAULT_DENSITY_MODIFIERS, DEFAULT_GRID_SIZE, DEFAULT_ITERATION_COUNT,
    DEFAULT_ORIGIN_COUNT, DEFAULT_SEED, DEFAULT_SEED_MAGNITUDE, MAX_GRID_DIMENSION, MIN_GRID_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::visualization::DiffusionCapture;
use crate::simulation::banding::classify;
use crate::simulation::diffusion::diffuse;
use crate::simulation::population::populate;
use crate::spatial::grid::{BandGrid, OccupancyGrid, ScalarGrid};
use crate::spatial::seeding::place_origins;

/// Driver parameters for one complete generation run
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Side length of the square field
    pub grid_size: usize,
    /// Number of distinct origin cells stamped before diffusion
    pub origin_count: usize,
    /// Magnitude stamped at each origin cell
    pub seed_magnitude: f64,
    /// Number of diffusion steps to apply
    pub iteration_count: usize,
    /// One occupancy map is sampled per entry, in order
    pub density_modifiers: Vec<f64>,
    /// Seed for the run's random source
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            origin_count: DEFAULT_ORIGIN_COUNT,
            seed_magnitude: DEFAULT_SEED_MAGNITUDE,
            iteration_count: DEFAULT_ITERATION_COUNT,
            density_modifiers: DEFAULT_DENSITY_MODIFIERS.to_vec(),
            seed: DEFAULT_SEED,
        }
    }
}

impl GenerationConfig {
    /// Check every parameter before a run starts
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidParameter` if:
    /// - The grid size falls outside the allowed dimension range
    /// - The seed magnitude is not a positive finite number
    /// - No density modifiers are given, or one is not positive and finite
    /// - The origin count exceeds the number of interior cells
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &format!("must be at least {MIN_GRID_SIZE} to leave an interior"),
            ));
        }

        if self.grid_size > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }

        if !self.seed_magnitude.is_finite() || self.seed_magnitude <= 0.0 {
            return Err(invalid_parameter(
                "seed_magnitude",
                &self.seed_magnitude,
                &"must be a positive finite number",
            ));
        }

        if self.density_modifiers.is_empty() {
            return Err(invalid_parameter(
                "density_modifiers",
                &"[]",
                &"at least one density modifier is required",
            ));
        }

        for &modifier in &self.density_modifiers {
            if !modifier.is_finite() || modifier <= 0.0 {
                return Err(invalid_parameter(
                    "density_modifiers",
                    &modifier,
                    &"every density modifier must be a positive finite number",
                ));
            }
        }

        let span = self.grid_size - 2 * BORDER_WIDTH;
        let capacity = span * span;
        if self.origin_count > capacity {
            return Err(invalid_parameter(
                "origin_count",
                &self.origin_count,
                &format!("interior of a {0}x{0} field holds only {capacity} cells", self.grid_size),
            ));
        }

        Ok(())
    }
}

/// Summary measurements from a finished run
#[derive(Clone, Debug)]
pub struct GenerationReport {
    /// Largest value in the diffused field
    pub peak_value: f64,
    /// Row and column of the first cell holding the peak
    pub peak_position: [usize; 2],
    /// Interior cells stamped before diffusion, in placement order
    pub origins: Vec<[usize; 2]>,
}

/// Every stage output of one generation run
pub struct Generation {
    /// Zero field with the origin magnitudes stamped in
    pub seeded: ScalarGrid,
    /// Field after the configured number of diffusion steps
    pub diffused: ScalarGrid,
    /// Ordinal band map of the diffused field
    pub banded: BandGrid,
    /// One occupancy map per density modifier, in configuration order
    pub populated: Vec<OccupancyGrid>,
    /// Run measurements
    pub report: GenerationReport,
    /// Captured diffusion frames when visualization was enabled
    pub capture: Option<DiffusionCapture>,
}

/// Stepwise executor for one generation run
///
/// Seeds the field on construction, applies one diffusion step per
/// `advance` call, and classifies and populates on `finish`. Origin
/// placement and population draw from one seeded generator in a fixed
/// order, so equal configurations produce identical runs.
pub struct Generator {
    config: GenerationConfig,
    rng: StdRng,
    field: ScalarGrid,
    seeded: ScalarGrid,
    origins: Vec<[usize; 2]>,
    iteration: usize,
    capture: Option<DiffusionCapture>,
}

impl Generator {
    /// Validate the configuration and seed the initial field
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - Origin placement exhausts its draw budget
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut field = ScalarGrid::new(config.grid_size)?;
        let origins = place_origins(
            &mut field,
            config.origin_count,
            config.seed_magnitude,
            &mut rng,
        )?;
        let seeded = field.clone();

        Ok(Self {
            config,
            rng,
            field,
            seeded,
            origins,
            iteration: 0,
            capture: None,
        })
    }

    /// Record the field before and after every remaining diffusion step
    pub fn enable_visualization(&mut self) {
        let mut capture = DiffusionCapture::new(self.config.iteration_count + 1);
        capture.record_step(&self.field);
        self.capture = Some(capture);
    }

    /// Apply one diffusion step
    ///
    /// Returns `false` once the configured step count has been reached,
    /// leaving the field untouched from then on.
    pub fn advance(&mut self) -> bool {
        if self.iteration >= self.config.iteration_count {
            return false;
        }

        self.field = diffuse(&self.field);
        self.iteration += 1;

        if let Some(capture) = &mut self.capture {
            capture.record_step(&self.field);
        }

        true
    }

    /// Completed diffusion steps
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Access the run configuration
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Access the current scalar field
    pub const fn field(&self) -> &ScalarGrid {
        &self.field
    }

    /// Complete the run and collect every stage output
    ///
    /// Any diffusion steps not yet applied through `advance` run first, so
    /// the result is the same whether or not the caller drove the loop
    /// itself. The diffused field is classified against its own peak, then
    /// one occupancy map is sampled per density modifier.
    pub fn finish(mut self) -> Generation {
        while self.advance() {}

        let (peak_value, peak_position) = self.field.peak();
        let banded = classify(&self.field, peak_value);

        let mut populated = Vec::with_capacity(self.config.density_modifiers.len());
        for &modifier in &self.config.density_modifiers {
            populated.push(populate(&banded, modifier, &mut self.rng));
        }

        Generation {
            seeded: self.seeded,
            diffused: self.field,
            banded,
            populated,
            report: GenerationReport {
                peak_value,
                peak_position,
                origins: self.origins,
            },
            capture: self.capture,
        }
    }
}
