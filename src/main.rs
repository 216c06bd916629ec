//! CLI entry point for the kite and dart tiling generator

use clap::Parser;
use kitedart::io::cli::{Cli, TilingProcessor};

fn main() -> kitedart::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut processor = TilingProcessor::new(cli);
    processor.process()
}
