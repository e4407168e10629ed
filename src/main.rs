//! CLI entry point for the Game of Life simulator

use clap::Parser;
use lifegrid::io::cli::{Cli, Runner};

fn main() -> lifegrid::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    Runner::new(cli).run()
}
