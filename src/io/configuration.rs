//! Generation constants and runtime configuration defaults

// Fixed geometry of the bordered field
/// Width of the untouched border around the interior region
pub const BORDER_WIDTH: usize = 2;

// Smallest side that still leaves an interior cell inside the border
/// Minimum allowed grid dimension
pub const MIN_GRID_SIZE: usize = 5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Number of ordinal bands produced by classification
pub const BAND_COUNT: usize = 5;

/// Exclusive upper bound of the uniform population draw
pub const PERCENT_SCALE: u32 = 100;

// Bounds the rejection sampling of distinct origin cells
/// Draw budget per requested origin during placement
pub const ORIGIN_ATTEMPT_FACTOR: usize = 16;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default side length of the generated field
pub const DEFAULT_GRID_SIZE: usize = 200;

/// Default number of diffusion origins
pub const DEFAULT_ORIGIN_COUNT: usize = 100;

/// Default magnitude stamped at each origin
pub const DEFAULT_SEED_MAGNITUDE: f64 = 100.0;

/// Default number of diffusion steps
pub const DEFAULT_ITERATION_COUNT: usize = 100;

/// Default density modifiers, one occupancy map per entry
pub const DEFAULT_DENSITY_MODIFIERS: [f64; 3] = [5.0, 2.0, 1.0];

// Output settings
/// File name of the exported seeded field image
pub const SEEDED_IMAGE_NAME: &str = "seeded.png";
/// File name of the exported diffused field image
pub const DIFFUSED_IMAGE_NAME: &str = "diffused.png";
/// File name of the exported band map image
pub const BANDED_IMAGE_NAME: &str = "banded.png";
/// File name prefix of the exported occupancy map images
pub const POPULATED_IMAGE_PREFIX: &str = "populated";
/// File name of the exported four-panel overview sheet
pub const SHEET_IMAGE_NAME: &str = "overview.png";
/// File name of the exported diffusion animation
pub const DIFFUSION_GIF_NAME: &str = "diffusion.gif";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
