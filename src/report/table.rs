use std::fmt::Write;

use crate::experiment::ExperimentResults;

const SIZE_WIDTH: usize = 12;
const CELL_WIDTH: usize = 22;

/// The final performance table: one row per job count, one column per algorithm.
pub fn render_table(results: &ExperimentResults) -> String {
    let titles: Vec<String> = results
        .algorithms
        .iter()
        .map(|algorithm| format!("Avg. Turnaround ({algorithm})"))
        .collect();
    let width = titles.iter().map(String::len).fold(CELL_WIDTH, usize::max);
    let rule = "=".repeat(1 + (SIZE_WIDTH + 3) + titles.len() * (width + 3));

    let mut out = String::new();
    let _ = writeln!(out, "{rule}");

    let mut header = format!("| {:<SIZE_WIDTH$} |", "Input Size");
    let mut divider = format!("|{}|", "-".repeat(SIZE_WIDTH + 2));
    for title in &titles {
        let _ = write!(header, " {title:<width$} |");
        let _ = write!(divider, "{}|", "-".repeat(width + 2));
    }
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{divider}");

    for row in &results.rows {
        let _ = write!(out, "| {:<SIZE_WIDTH$} |", row.job_count);
        for &algorithm in &results.algorithms {
            let cell = row
                .average(algorithm)
                .map_or_else(|| "-".to_string(), |avg| format!("{avg:.2} ms"));
            let _ = write!(out, " {cell:<width$} |");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        experiment::{AlgorithmAverage, SizeResult},
        scheduler::Algorithm,
    };

    fn results() -> ExperimentResults {
        ExperimentResults {
            seed: 0,
            trials: 1,
            max_burst_time: 30,
            algorithms: vec![Algorithm::Fcfs, Algorithm::Sjf],
            rows: vec![SizeResult {
                job_count: 5,
                averages: vec![
                    AlgorithmAverage {
                        algorithm: Algorithm::Fcfs,
                        average_turnaround: 46.555,
                    },
                    AlgorithmAverage {
                        algorithm: Algorithm::Sjf,
                        average_turnaround: 33.69,
                    },
                ],
            }],
        }
    }

    #[test]
    fn table_layout() {
        let table = render_table(&results());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("| Input Size   | Avg. Turnaround (FCFS) "));
        assert!(lines[3].contains("| 5            |"));
        assert!(lines[3].contains("33.69 ms"));
        // Every line of the box has the same width
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }
}
