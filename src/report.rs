//! Final-run summary and its plain-text export.
//!
//! The solution file holds four lines:
//!
//! ```text
//! TIME(s): <t>
//! NB_SAMPLES: <n>
//! NB_MISCLASSIFIED: <m>
//! ACCURACY: <a>
//! ```
//!
//! and every run appends one tab-separated row
//! `<name>\t<t>\t<n>\t<m>\t<a>` to a shared results log.

use crate::error::{DtreeError, Result};
use crate::tree::Solution;
use log::warn;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Largest tolerated gap between stored and recomputed accuracy.
pub const ACCURACY_TOLERANCE: f64 = 1e-5;

/// Summary metrics of a finished run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    /// Wall-clock time spent by the run.
    pub elapsed: Duration,
    /// Training samples.
    pub n_samples: usize,
    /// Training samples misclassified by the final tree.
    pub n_misclassified: usize,
    /// Training accuracy of the final tree.
    pub accuracy: f64,
}

impl RunReport {
    /// Builds the report for `solution`, checking that its stored accuracy
    /// matches the accuracy recomputed from its leaves.
    pub fn from_solution(solution: &Solution, elapsed: Duration) -> Result<Self> {
        let recomputed = solution.recompute_accuracy();
        if (solution.accuracy() - recomputed).abs() > ACCURACY_TOLERANCE {
            return Err(DtreeError::AccuracyMismatch {
                stored: solution.accuracy(),
                recomputed,
            });
        }
        Ok(Self {
            elapsed,
            n_samples: solution.n_samples(),
            n_misclassified: solution.tree().misclassified(),
            accuracy: recomputed,
        })
    }

    /// Writes the four summary lines.
    pub fn write_summary<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "TIME(s): {}", self.elapsed.as_secs_f64())?;
        writeln!(out, "NB_SAMPLES: {}", self.n_samples)?;
        writeln!(out, "NB_MISCLASSIFIED: {}", self.n_misclassified)?;
        writeln!(out, "ACCURACY: {}", self.accuracy)
    }

    /// Tab-separated results-log row for a run named `name`.
    pub fn summary_row(&self, name: &str) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            name,
            self.elapsed.as_secs_f64(),
            self.n_samples,
            self.n_misclassified,
            self.accuracy
        )
    }

    /// Writes the summary to `solution_path` and appends a row to
    /// `results_log`.
    ///
    /// A file that cannot be opened or written is reported as a warning
    /// and skipped; the run carries on.
    pub fn export(&self, solution_path: &Path, results_log: &Path) {
        match File::create(solution_path).and_then(|f| self.write_summary(f)) {
            Ok(()) => {}
            Err(e) => warn!(
                "impossible to write solution file {}: {}",
                solution_path.display(),
                e
            ),
        }

        let row = self.summary_row(&solution_path.display().to_string());
        let appended = OpenOptions::new()
            .create(true)
            .append(true)
            .open(results_log)
            .and_then(|mut f| writeln!(f, "{row}"));
        if let Err(e) = appended {
            warn!(
                "impossible to append to results log {}: {}",
                results_log.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AttributeKind, Dataset};
    use crate::greedy::GreedyInducer;

    fn solved() -> Solution {
        let data = Dataset::new(
            vec![vec![0.0], vec![0.0], vec![1.0], vec![1.0], vec![1.0]],
            vec![0, 0, 1, 1, 0],
            vec![AttributeKind::Numerical],
            2,
        )
        .unwrap();
        GreedyInducer::new(&data, 1).unwrap().greedy().unwrap()
    }

    #[test]
    fn test_report_from_solution() {
        let report = RunReport::from_solution(&solved(), Duration::from_millis(1500)).unwrap();
        assert_eq!(report.n_samples, 5);
        assert_eq!(report.n_misclassified, 1);
        assert!((report.accuracy - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_stale_accuracy_rejected() {
        let mut solution = solved();
        // Leaf 2 holds samples {2, 3, 4} with one misclassified; claim none.
        let leaf = solution.tree_mut().node_mut(2);
        leaf.majority_count = leaf.n_samples;
        let err = RunReport::from_solution(&solution, Duration::ZERO).unwrap_err();
        match err {
            DtreeError::AccuracyMismatch { stored, recomputed } => {
                assert!((stored - 0.8).abs() < 1e-12);
                assert!((recomputed - 1.0).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_consistent_solution_accepted() {
        let solution = solved();
        assert!(solution.accuracy() - solution.recompute_accuracy() < ACCURACY_TOLERANCE);
        assert!(RunReport::from_solution(&solution, Duration::ZERO).is_ok());
    }

    #[test]
    fn test_write_summary_format() {
        let report = RunReport {
            elapsed: Duration::from_millis(2500),
            n_samples: 10,
            n_misclassified: 2,
            accuracy: 0.8,
        };
        let mut buf = Vec::new();
        report.write_summary(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "TIME(s): 2.5\nNB_SAMPLES: 10\nNB_MISCLASSIFIED: 2\nACCURACY: 0.8\n"
        );
        assert_eq!(report.summary_row("run1"), "run1\t2.5\t10\t2\t0.8");
    }

    #[test]
    fn test_export_writes_and_appends() {
        let dir = std::env::temp_dir().join(format!("u-dtree-report-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let solution_path = dir.join("solution.txt");
        let log_path = dir.join("results.txt");
        let _ = std::fs::remove_file(&log_path);

        let report = RunReport::from_solution(&solved(), Duration::from_secs(1)).unwrap();
        report.export(&solution_path, &log_path);
        report.export(&solution_path, &log_path);

        let summary = std::fs::read_to_string(&solution_path).unwrap();
        assert!(summary.starts_with("TIME(s): 1\n"));
        let log = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(log.lines().count(), 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_to_missing_directory_only_warns() {
        let missing = Path::new("/nonexistent-u-dtree-dir/solution.txt");
        let report = RunReport::from_solution(&solved(), Duration::ZERO).unwrap();
        report.export(missing, missing);
    }
}
