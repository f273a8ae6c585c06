/// Ordinal banding of the diffused field
pub mod banding;
/// The 8-neighbor mean diffusion step
pub mod diffusion;
/// Run configuration and the stepwise generation executor
pub mod pipeline;
/// Stochastic occupancy sampling from band values
pub mod population;

pub use pipeline::{Generation, GenerationConfig, GenerationReport, Generator};
