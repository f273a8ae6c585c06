//! Command-line entry point for the diffusion map generator

use clap::Parser;
use driftmap::io::cli::{Cli, MapProcessor};

fn main() -> driftmap::Result<()> {
    let cli = Cli::parse();
    let mut processor = MapProcessor::new(cli);
    processor.process()
}
