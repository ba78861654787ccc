//! Monte Carlo TSP over named cities: geocoded city tables, uniformly random
//! tour sampling, and statistical convergence detection for early stopping.

mod city;
mod convergence;
mod distance;
mod error;
mod geocode;
mod report;
mod runner;
mod sample;
mod table;

pub mod logging;

pub use city::City;
pub use convergence::{
    ConvergencePolicy, PLATEAU_LIMIT, Verdict, WARMUP_ITERATIONS, WINDOW, improvement_rate,
};
pub use distance::cycle_distance_miles;
pub use error::{Error, Result};
pub use geocode::{
    CachedCoordinate, CoordinateCache, DEFAULT_CACHE_FILE, DEFAULT_CITIES, DEFAULT_PACING,
    Geocoder, NominatimGeocoder, resolve_city_table,
};
pub use report::{DEFAULT_RESULTS_FILE, sample_std_dev, summary, write_results};
pub use runner::{
    RunResult, SimulationOptions, SimulationRecord, Termination, run_simulation,
};
pub use sample::random_order;
pub use table::CityTable;
