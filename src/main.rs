//! CLI entry point for the Hungarian-method assignment solver

use clap::Parser;
use hungarian::io::cli::{Cli, FileProcessor, init_tracing};

fn main() -> hungarian::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
