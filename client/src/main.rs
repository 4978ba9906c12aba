use std::{env, io};

use anyhow::Context;
use config::Config;
use driver::Driver;
use liblife::Grid;

mod cli;
mod config;
mod driver;
mod logging;
mod patterns;
mod sleeper;
mod terminal;

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = cli::parse_args(env::args().skip(1))?;

    let mut config = match &args.config_path {
        Some(config_path) => Config::load(config_path)
            .with_context(|| format!("Couldn't load config from {}", config_path.display()))?,
        None => Config::default(),
    };

    if let Some(pattern) = args.pattern {
        config.pattern = pattern;
    }

    tracing::info!(
        pattern = %config.pattern,
        interval_millis = config.interval_millis,
        generations = ?config.generations,
        "Starting"
    );

    let seed = config.pattern.seed(config.random)?;
    let grid = Grid::new(&seed).context("Couldn't build grid from seed")?;

    let mut out = io::stdout().lock();
    let mut driver = Driver::new(grid, config);
    let frames = driver.run(&mut out)?;

    tracing::info!(
        frames,
        generation = driver.grid().generation(),
        "Finished"
    );
    Ok(())
}
