//! The optimization loop: repeated sample -> evaluate -> record, with best
//! tracking and convergence-driven early stop.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;

use crate::{
    CityTable, Error, Result,
    convergence::{ConvergencePolicy, Verdict, WINDOW},
    distance::cycle_distance_miles,
    sample::random_order,
};

/// Knobs for one optimization run.
#[derive(Clone, Copy, Debug)]
pub struct SimulationOptions {
    /// Maximum number of sampling iterations.
    pub count: usize,
    /// Stop early once convergence is detected.
    pub auto_stop: bool,
    /// Statistical convergence threshold, in percent improvement.
    pub improvement_threshold: f64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            count: 10,
            auto_stop: false,
            improvement_threshold: 0.1,
        }
    }
}

impl SimulationOptions {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::invalid_input("count must be > 0"));
        }
        if !self.improvement_threshold.is_finite() || self.improvement_threshold < 0.0 {
            return Err(Error::invalid_input(
                "improvement threshold must be a finite non-negative percentage",
            ));
        }
        Ok(())
    }

    fn policy(&self) -> ConvergencePolicy {
        ConvergencePolicy {
            auto_stop: self.auto_stop,
            improvement_threshold: self.improvement_threshold,
            window: WINDOW,
        }
    }
}

/// One sampled tour and its evaluated length.
#[derive(Clone, Debug)]
pub struct SimulationRecord {
    pub order: Vec<usize>,
    pub distance_miles: f64,
}

/// How the loop ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Termination {
    Converged,
    Exhausted,
}

/// Snapshot of a finished run, projected from the full history.
///
/// Serialized field names follow the result-file contract
/// (`tsp_results.json`), so documents round-trip with earlier tooling.
#[derive(Clone, Debug, Serialize)]
pub struct RunResult {
    pub simulations: usize,
    /// Loop wall time in seconds. Table construction happens before the
    /// clock starts.
    pub execution_time: f64,
    pub best_distance: f64,
    pub average_distance: f64,
    pub worst_distance: f64,
    pub best_route: Vec<String>,
    pub all_distances: Vec<f64>,
    #[serde(skip_serializing)]
    pub termination: Termination,
}

/// Run up to `options.count` random tours over `table`, tracking the best.
///
/// Iterations are strictly sequential; the only state carried between them
/// is the history and the best/plateau counters.
pub fn run_simulation<R: Rng + ?Sized>(
    table: &CityTable,
    options: &SimulationOptions,
    rng: &mut R,
) -> Result<RunResult> {
    options.validate()?;

    let policy = options.policy();
    let now = Instant::now();

    let mut history: Vec<SimulationRecord> = Vec::with_capacity(options.count);
    let mut distances: Vec<f64> = Vec::with_capacity(options.count);
    let mut best = f64::INFINITY;
    let mut since_improvement = 0_usize;
    let mut verdict = Verdict::Continue;

    log::info!(
        "sim: start cities={} count={} auto_stop={}",
        table.len(),
        options.count,
        options.auto_stop
    );

    for iteration in 0..options.count {
        let order = random_order(table.len(), rng);
        let distance = cycle_distance_miles(table, &order);
        history.push(SimulationRecord {
            order,
            distance_miles: distance,
        });
        distances.push(distance);

        let new_best = distance < best;
        if new_best {
            best = distance;
            since_improvement = 0;
        } else {
            since_improvement += 1;
        }
        log::info!(
            "sim: iter={}/{} dist_mi={distance:.2} best_mi={best:.2} new_best={new_best}",
            iteration + 1,
            options.count
        );

        verdict = policy.assess(iteration, &distances, since_improvement);
        if !matches!(verdict, Verdict::Continue) {
            break;
        }
    }

    if matches!(verdict, Verdict::Continue) {
        verdict = Verdict::StopExhausted;
    }

    let termination = match verdict {
        Verdict::StopStatistical(rate) => {
            log::info!(
                "sim: converged iters={} improvement_pct={rate:.4} threshold_pct={}",
                distances.len(),
                options.improvement_threshold
            );
            Termination::Converged
        }
        Verdict::StopPlateau => {
            log::info!(
                "sim: plateau iters={} stale_iters={since_improvement}",
                distances.len()
            );
            Termination::Converged
        }
        _ => Termination::Exhausted,
    };

    let elapsed = now.elapsed().as_secs_f64();
    let best_idx = best_record_index(&distances);
    let result = RunResult {
        simulations: distances.len(),
        execution_time: elapsed,
        best_distance: distances[best_idx],
        average_distance: distances.iter().sum::<f64>() / distances.len() as f64,
        worst_distance: distances.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        best_route: table.route_names(&history[best_idx].order),
        all_distances: distances,
        termination,
    };

    log::info!(
        "sim: done iters={} best_mi={:.2} avg_mi={:.2} worst_mi={:.2} secs={:.2}",
        result.simulations,
        result.best_distance,
        result.average_distance,
        result.worst_distance,
        result.execution_time
    );

    Ok(result)
}

/// Index of the minimum distance; ties keep the FIRST occurrence in iteration
/// order (`Iterator::min_by` would keep the last).
fn best_record_index(distances: &[f64]) -> usize {
    let mut best_idx = 0;
    for (idx, &distance) in distances.iter().enumerate().skip(1) {
        if distance < distances[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}
