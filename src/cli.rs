use std::path::PathBuf;
use std::str::FromStr;

use tsp_sim_core::logging::{LogFormat, LogLevel, LogOptions};
use tsp_sim_core::{DEFAULT_CACHE_FILE, DEFAULT_RESULTS_FILE};

/// Monte Carlo TSP over named cities (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "tsp-sim", version, about, propagate_version = true)]
pub struct Cli {
    /// Coordinate cache file
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath, default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,

    /// Results document file
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath, default_value = DEFAULT_RESULTS_FILE)]
    pub results: PathBuf,

    /// Structured logging level (defaults to info; warn under --quiet and benchmark)
    #[arg(long, global = true, value_parser = LogLevel::from_str)]
    pub log_level: Option<LogLevel>,

    /// Logging output format
    #[arg(long, global = true, default_value = "compact", value_parser = LogFormat::from_str)]
    pub log_format: LogFormat,

    /// Include timestamps in log lines
    #[arg(long, global = true)]
    pub log_timestamp: bool,

    /// Log file path; omit for stderr
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub log_output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_options(&self) -> LogOptions {
        let default_level = match &self.command {
            Commands::Simulate(args) if args.quiet => LogLevel::Warn,
            Commands::Benchmark(_) => LogLevel::Warn,
            _ => LogLevel::Info,
        };
        LogOptions {
            level: self.log_level.unwrap_or(default_level),
            format: self.log_format,
            timestamp: self.log_timestamp,
            output: self.log_output.clone(),
        }
    }
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest tour over an explicit list of city names
    Cities(CitiesArgs),

    /// Run repeated random tours over the default city list
    Simulate(SimulateArgs),

    /// Compare best distance and runtime across simulation counts
    Benchmark(BenchmarkArgs),
}

#[derive(clap::Args, Debug)]
pub struct CitiesArgs {
    /// City names, e.g. "New York" "Knoxville"
    #[arg(required = true)]
    pub cities: Vec<String>,

    /// Number of simulations to run
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Seed for the tour shuffler; omit for OS entropy
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct SimulateArgs {
    /// Number of times to run the simulation
    #[arg(long, default_value_t = 10)]
    pub count: usize,

    /// Stop automatically when convergence is detected
    #[arg(long)]
    pub auto_stop: bool,

    /// Suppress per-iteration output
    #[arg(long)]
    pub quiet: bool,

    /// Improvement threshold for convergence (percent)
    #[arg(long, default_value_t = 0.1)]
    pub threshold: f64,

    /// Seed for the tour shuffler; omit for OS entropy
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct BenchmarkArgs {
    /// Maximum simulations to test
    #[arg(long, default_value_t = 100)]
    pub max_count: usize,
}
