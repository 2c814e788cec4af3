//! CLI entry point for shuffling and checking image puzzles

use clap::Parser;
use edgestitch::io::cli::{Cli, FileProcessor};
use edgestitch::io::logging;

fn main() -> edgestitch::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.quiet, cli.verbose));
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
