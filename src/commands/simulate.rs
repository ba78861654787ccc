use tsp_sim_core::{
    DEFAULT_CITIES, Result, SimulationOptions, run_simulation, summary, write_results,
};

use crate::cli::{Cli, SimulateArgs};

pub fn run(cli: &Cli, args: &SimulateArgs) -> Result<()> {
    let table = super::build_city_table(&cli.cache, &DEFAULT_CITIES)?;

    let options = SimulationOptions {
        count: args.count,
        auto_stop: args.auto_stop,
        improvement_threshold: args.threshold,
    };
    let mut rng = super::rng_from_seed(args.seed);
    let result = run_simulation(&table, &options, &mut rng)?;

    println!("{}", summary(&result));
    write_results(&cli.results, &result)?;
    Ok(())
}
