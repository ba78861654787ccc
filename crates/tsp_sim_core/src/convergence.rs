//! Convergence analysis over the per-iteration distance history.
//!
//! Two independent stop heuristics feed the driver: a statistical one (the
//! trailing window's best no longer beats earlier history by more than a
//! threshold) and a plateau one (too many consecutive iterations without a
//! new best). Either alone triggers the stop.

/// Trailing-window size for the statistical check.
pub const WINDOW: usize = 5;

/// Iterations to run before convergence checks are trusted.
pub const WARMUP_ITERATIONS: usize = 10;

/// Consecutive non-improving iterations that count as a plateau.
pub const PLATEAU_LIMIT: usize = 20;

/// Percentage improvement of the trailing window's best over the best of all
/// earlier history. Positive means the window found a shorter tour.
///
/// `None` until there is at least one sample strictly before the window (a
/// window's worth of history alone is not enough), and whenever the earlier
/// best is non-positive, where the ratio is undefined.
pub fn improvement_rate(distances: &[f64], window: usize) -> Option<f64> {
    if window == 0 || distances.len() <= window {
        return None;
    }

    let split = distances.len() - window;
    let recent_best = min_of(&distances[split..]);
    let previous_best = min_of(&distances[..split]);

    if previous_best <= 0.0 {
        return None;
    }

    Some((previous_best - recent_best) / previous_best * 100.0)
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Outcome of one post-iteration assessment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    Continue,
    /// Statistical trigger fired; carries the observed improvement rate.
    StopStatistical(f64),
    StopPlateau,
    /// The configured iteration count ran out (assigned by the driver, never
    /// by [`ConvergencePolicy::assess`]).
    StopExhausted,
}

/// Early-stop policy applied between iterations.
#[derive(Clone, Copy, Debug)]
pub struct ConvergencePolicy {
    pub auto_stop: bool,
    /// Statistical trigger threshold, in percent.
    pub improvement_threshold: f64,
    pub window: usize,
}

impl ConvergencePolicy {
    /// Assess the history after iteration `iteration` (zero-based).
    ///
    /// The statistical predicate is checked before the plateau predicate,
    /// and both are gated behind `auto_stop` and the warm-up period.
    pub fn assess(
        &self,
        iteration: usize,
        distances: &[f64],
        iterations_since_improvement: usize,
    ) -> Verdict {
        if !self.auto_stop || iteration < WARMUP_ITERATIONS {
            return Verdict::Continue;
        }

        if let Some(rate) = improvement_rate(distances, self.window)
            && rate.abs() < self.improvement_threshold
        {
            return Verdict::StopStatistical(rate);
        }

        if iterations_since_improvement >= PLATEAU_LIMIT {
            return Verdict::StopPlateau;
        }

        Verdict::Continue
    }
}
