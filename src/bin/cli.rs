// src/bin/cli.rs
use std::path::Path;

use cardfilter::{
    cli::{self, CliArgs},
    config::consts::LOG_FILE,
    logging,
};
use clap::Parser;
use simplelog::LevelFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();

    if let Err(e) = logging::init(Path::new(LOG_FILE), LevelFilter::Info) {
        eprintln!("Logging disabled: {e}");
    }

    cli::run(&args)?;
    Ok(())
}
