//! Human-readable progress and outcome formatting.
//!
//! All formatters return plain strings so callers choose the sink. Progress
//! output is advisory only; silencing it (see
//! [`OneShotConfig::silent`](crate::OneShotConfig::silent)) has no effect on
//! results.

use colored::Colorize;

use crate::result::TestOutcome;

/// One-line banner printed when the simulation phase starts.
pub fn format_run_banner(replicates_per_worker: usize, workers: usize) -> String {
    format!(
        "{} dispatching {} workers x {} replicates",
        "one-shot test:".bold(),
        workers,
        replicates_per_worker
    )
}

/// Progress line for one worker's batch.
///
/// Mirrors the batch-completeness reports of long simulation runs:
/// `[worker 3] 42.00% complete`.
pub fn format_progress(worker: usize, completed: usize, total: usize) -> String {
    let percent = completed as f64 / total as f64 * 100.0;
    format!("[worker {}] {:.2}% complete", worker, percent)
        .dimmed()
        .to_string()
}

/// Multi-line summary of a finished run.
pub fn format_outcome(outcome: &TestOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "One-shot randomization test".bold()));
    out.push_str(&format!(
        "  part one: p = {}  (t_obs = {:.2})\n",
        format!("{:.4}", outcome.p1).cyan(),
        outcome.t1_obs
    ));
    out.push_str(&format!(
        "  part two: p = {}  (t_obs = {:.2})\n",
        format!("{:.4}", outcome.p2).cyan(),
        outcome.t2_obs
    ));
    out.push_str(&format!(
        "  {} replicates across {} workers\n",
        outcome.total_replicates(),
        outcome.workers
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_the_geometry() {
        let banner = format_run_banner(1_251, 8);
        assert!(banner.contains("8 workers"));
        assert!(banner.contains("1251 replicates"));
    }

    #[test]
    fn progress_reports_percent() {
        let line = format_progress(3, 420, 1000);
        assert!(line.contains("[worker 3]"));
        assert!(line.contains("42.00% complete"));
    }

    #[test]
    fn outcome_summary_shows_both_p_values() {
        let outcome = TestOutcome {
            p1: 0.0312,
            p2: 0.5,
            t1_obs: 1234.0,
            t2_obs: 567.5,
            replicates_per_worker: 1_251,
            workers: 8,
        };
        let text = format_outcome(&outcome);
        assert!(text.contains("0.0312"));
        assert!(text.contains("0.5000"));
        assert!(text.contains("10008 replicates"));
    }
}
