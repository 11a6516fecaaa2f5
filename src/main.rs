//! CLI entry point for the tile assembler

use clap::Parser;
use jigsawtile::io::cli::{Cli, FileProcessor};
use jigsawtile::io::logging;

fn main() -> jigsawtile::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
