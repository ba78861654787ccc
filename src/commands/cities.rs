use tsp_sim_core::{Result, SimulationOptions, run_simulation, summary, write_results};

use crate::cli::{Cli, CitiesArgs};

pub fn run(cli: &Cli, args: &CitiesArgs) -> Result<()> {
    let table = super::build_city_table(&cli.cache, &args.cities)?;

    let options = SimulationOptions {
        count: args.count,
        ..Default::default()
    };
    let mut rng = super::rng_from_seed(args.seed);
    let result = run_simulation(&table, &options, &mut rng)?;

    println!("{}", summary(&result));
    write_results(&cli.results, &result)?;
    Ok(())
}
