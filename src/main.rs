mod cli;
mod commands;

use std::time::Instant;

use clap::Parser;
use log::info;

use cli::{Cli, Commands};
use tsp_sim_core::{Result, logging};

fn main() -> Result<()> {
    let now = Instant::now();
    let cli = Cli::parse();
    logging::init_logger(&cli.log_options())?;

    match &cli.command {
        Commands::Cities(args) => commands::cities::run(&cli, args),
        Commands::Simulate(args) => commands::simulate::run(&cli, args),
        Commands::Benchmark(args) => commands::benchmark::run(&cli, args),
    }?;

    info!("main: done secs={:.2}", now.elapsed().as_secs_f32());
    Ok(())
}
