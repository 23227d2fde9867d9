use std::fmt::Write;

use crate::experiment::ExperimentResults;

const BAR_WIDTH: usize = 40;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.clamp(1, BAR_WIDTH))
}

/// One panel per algorithm: its average turnaround against input size.
pub fn render_series(results: &ExperimentResults) -> String {
    let max = results.max_average();
    let mut out = String::new();
    for &algorithm in &results.algorithms {
        let _ = writeln!(out, "Performance: {algorithm}");
        for (job_count, avg) in results.series(algorithm) {
            let label = format!("{job_count} jobs");
            let _ = writeln!(out, "  {label:>8} | {:<BAR_WIDTH$} {avg:.2} ms", bar(avg, max));
        }
        out.push('\n');
    }
    out
}

/// Every algorithm side by side, grouped by input size.
pub fn render_comparison(results: &ExperimentResults) -> String {
    let max = results.max_average();
    let mut out = String::from("Performance Comparison of All Algorithms\n");
    for row in &results.rows {
        let _ = writeln!(out, "{} jobs", row.job_count);
        for entry in &row.averages {
            let name = entry.algorithm.to_string();
            let _ = writeln!(
                out,
                "  {name:>6} | {:<BAR_WIDTH$} {:.2} ms",
                bar(entry.average_turnaround, max),
                entry.average_turnaround
            );
        }
    }
    out
}

pub fn render_chart(results: &ExperimentResults) -> String {
    format!("{}{}", render_series(results), render_comparison(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        experiment::{AlgorithmAverage, SizeResult},
        scheduler::Algorithm,
    };

    fn results() -> ExperimentResults {
        let row = |job_count, fcfs, sjf| SizeResult {
            job_count,
            averages: vec![
                AlgorithmAverage {
                    algorithm: Algorithm::Fcfs,
                    average_turnaround: fcfs,
                },
                AlgorithmAverage {
                    algorithm: Algorithm::Sjf,
                    average_turnaround: sjf,
                },
            ],
        };
        ExperimentResults {
            seed: 3,
            trials: 20,
            max_burst_time: 30,
            algorithms: vec![Algorithm::Fcfs, Algorithm::Sjf],
            rows: vec![row(5, 46.56, 33.69), row(10, 86.69, 60.32)],
        }
    }

    #[test]
    fn longest_bar_belongs_to_the_largest_average() {
        let chart = render_comparison(&results());
        let widest = chart
            .lines()
            .max_by_key(|line| line.matches('#').count())
            .unwrap();
        assert!(widest.contains("86.69 ms"));
        assert_eq!(widest.matches('#').count(), BAR_WIDTH);
    }

    #[test]
    fn series_has_a_panel_per_algorithm() {
        let chart = render_series(&results());
        assert!(chart.contains("Performance: FCFS"));
        assert!(chart.contains("Performance: SJF"));
        assert!(chart.contains("10 jobs"));
        assert!(chart.contains("60.32 ms"));
    }

    #[test]
    fn tiny_values_still_get_a_mark() {
        assert_eq!(bar(0.01, 100.0), "#");
        assert_eq!(bar(5.0, 0.0), "");
    }
}
