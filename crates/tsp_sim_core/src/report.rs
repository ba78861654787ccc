//! The result sink and console summary for a finished run.

use std::fmt::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, Result, runner::RunResult};

pub const DEFAULT_RESULTS_FILE: &str = "tsp_results.json";

const RULE: &str = "============================================================";

/// Persist the run document as pretty JSON, all-or-nothing.
pub fn write_results(path: &Path, result: &RunResult) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(tmp.as_file(), result)?;
    tmp.persist(path)
        .map_err(|e| Error::other(format!("persist results {}: {e}", path.display())))?;

    log::info!("report: wrote path={}", path.display());
    Ok(())
}

/// Sample standard deviation (n - 1 denominator); 0 for fewer than 2 samples.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Human-readable closing block for the console.
pub fn summary(result: &RunResult) -> String {
    let spread = result.worst_distance - result.best_distance;
    let spread_pct = if result.worst_distance > 0.0 {
        spread / result.worst_distance * 100.0
    } else {
        0.0
    };
    let std_dev = sample_std_dev(&result.all_distances);

    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "RESULTS SUMMARY");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Total Simulations Run: {}", result.simulations);
    let _ = writeln!(out, "Execution Time: {:.2} seconds", result.execution_time);
    let _ = writeln!(out);
    let _ = writeln!(out, "Shortest Distance: {:.2} miles", result.best_distance);
    let _ = writeln!(
        out,
        "Average Distance: {:.2} miles",
        result.average_distance
    );
    let _ = writeln!(out, "Longest Distance: {:.2} miles", result.worst_distance);
    let _ = writeln!(out, "Standard Deviation: {std_dev:.2} miles");
    let _ = writeln!(out);
    let _ = writeln!(out, "Improvement: {spread:.2} miles ({spread_pct:.1}%)");
    let _ = writeln!(out);
    let _ = writeln!(out, "Optimal Route Found:");
    let _ = writeln!(out, "{}", result.best_route.join(" -> "));
    let _ = write!(out, "{RULE}");
    out
}

#[cfg(test)]
mod tests {
    use super::{sample_std_dev, summary, write_results};
    use crate::runner::{RunResult, Termination};

    fn result() -> RunResult {
        RunResult {
            simulations: 3,
            execution_time: 0.25,
            best_distance: 100.0,
            average_distance: 150.0,
            worst_distance: 200.0,
            best_route: vec!["A".into(), "B".into(), "C".into()],
            all_distances: vec![200.0, 100.0, 150.0],
            termination: Termination::Exhausted,
        }
    }

    #[test]
    fn std_dev_matches_the_sample_formula() {
        // mean 2.5, sample variance 5/3
        let values = [1.0, 2.0, 3.0, 4.0];
        let expected = (5.0_f64 / 3.0).sqrt();
        assert!((sample_std_dev(&values) - expected).abs() < 1e-12);
    }

    #[test]
    fn std_dev_is_zero_for_short_or_constant_input() {
        assert_eq!(sample_std_dev(&[]), 0.0);
        assert_eq!(sample_std_dev(&[42.0]), 0.0);
        assert!(sample_std_dev(&[7.0, 7.0, 7.0]).abs() < 1e-12);
    }

    #[test]
    fn summary_contains_the_headline_numbers_and_route() {
        let text = summary(&result());
        assert!(text.contains("RESULTS SUMMARY"));
        assert!(text.contains("Total Simulations Run: 3"));
        assert!(text.contains("Shortest Distance: 100.00 miles"));
        assert!(text.contains("Longest Distance: 200.00 miles"));
        assert!(text.contains("Improvement: 100.00 miles (50.0%)"));
        assert!(text.contains("A -> B -> C"));
    }

    #[test]
    fn results_file_uses_the_documented_field_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.json");
        write_results(&path, &result()).expect("write");

        let raw = std::fs::read_to_string(&path).expect("read");
        let doc: serde_json::Value = serde_json::from_str(&raw).expect("json");

        assert_eq!(doc["simulations"], 3);
        assert_eq!(doc["best_distance"], 100.0);
        assert_eq!(doc["worst_distance"], 200.0);
        assert_eq!(doc["best_route"][0], "A");
        assert_eq!(doc["all_distances"].as_array().expect("array").len(), 3);
        // Termination is an in-process detail, not part of the document.
        assert!(doc.get("termination").is_none());
    }
}
