//! CLI entry point for the autotile boundary synthesis tool

use clap::Parser;
use coastile::io::cli::{Cli, RunProcessor};

fn main() -> coastile::Result<()> {
    let cli = Cli::parse();
    let processor = RunProcessor::new(cli);
    processor.process()
}
