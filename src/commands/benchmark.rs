use tsp_sim_core::{DEFAULT_CITIES, Error, Result, SimulationOptions, run_simulation};

use crate::cli::{BenchmarkArgs, Cli};

const TEST_COUNTS: [usize; 7] = [5, 10, 20, 30, 50, 75, 100];
const RULE: &str = "============================================================";

struct BenchmarkRow {
    count: usize,
    best_distance: f64,
    seconds: f64,
}

pub fn run(cli: &Cli, args: &BenchmarkArgs) -> Result<()> {
    let counts: Vec<usize> = TEST_COUNTS
        .into_iter()
        .filter(|&count| count <= args.max_count)
        .collect();
    if counts.is_empty() {
        return Err(Error::invalid_input(format!(
            "max-count must be at least {} to benchmark anything",
            TEST_COUNTS[0]
        )));
    }

    println!("Benchmarking simulation counts up to {}...", args.max_count);

    let table = super::build_city_table(&cli.cache, &DEFAULT_CITIES)?;
    let mut rng = super::rng_from_seed(None);

    let mut rows = Vec::with_capacity(counts.len());
    for count in counts {
        println!("\nTesting {count} simulations...");
        let options = SimulationOptions {
            count,
            ..Default::default()
        };
        let result = run_simulation(&table, &options, &mut rng)?;
        rows.push(BenchmarkRow {
            count,
            best_distance: result.best_distance,
            seconds: result.execution_time,
        });
    }

    print_table(&rows);
    Ok(())
}

fn print_table(rows: &[BenchmarkRow]) {
    let best_overall = rows
        .iter()
        .map(|row| row.best_distance)
        .fold(f64::INFINITY, f64::min);
    let baseline_seconds = rows[0].seconds;

    println!("\n{RULE}");
    println!("BENCHMARK RESULTS");
    println!("{RULE}");
    println!(
        "{:<15} {:<20} {:<15} {}",
        "Simulations", "Best Distance", "Time (s)", "Efficiency"
    );
    println!("{}", "-".repeat(60));

    for row in rows {
        let efficiency = if row.seconds > 0.0 && baseline_seconds > 0.0 {
            (best_overall / row.best_distance) / (row.seconds / baseline_seconds)
        } else {
            0.0
        };
        let marker = if row.best_distance == best_overall {
            " *"
        } else {
            ""
        };
        println!(
            "{:<15} {:<20.2} {:<15.2} {:.2}{marker}",
            row.count, row.best_distance, row.seconds, efficiency
        );
    }

    println!("{RULE}");
    println!("\nRecommendation:");
    println!("  - For quick results: 10-20 simulations");
    println!("  - For balanced performance: 30-50 simulations");
    println!("  - For best accuracy: 75-100+ simulations");
    println!("  - Use --auto-stop for automatic convergence detection");
}
