//! CLI entry point for the skin mosaic tool

use blockskin::io::cli::{Cli, WorkflowRunner};
use clap::Parser;

fn main() -> blockskin::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    WorkflowRunner::new(cli).run()
}
