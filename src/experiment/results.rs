use serde::{Deserialize, Serialize};

use crate::{core::Ticks, scheduler::Algorithm};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResults {
    pub seed: u64,
    pub trials: usize,
    pub max_burst_time: Ticks,
    pub algorithms: Vec<Algorithm>,
    pub rows: Vec<SizeResult>,
}

/// Per-trial average turnaround, averaged again over every trial of one job count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeResult {
    pub job_count: usize,
    pub averages: Vec<AlgorithmAverage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmAverage {
    pub algorithm: Algorithm,
    pub average_turnaround: f64,
}

impl SizeResult {
    pub fn average(&self, algorithm: Algorithm) -> Option<f64> {
        self.averages
            .iter()
            .find(|entry| entry.algorithm == algorithm)
            .map(|entry| entry.average_turnaround)
    }
}

impl ExperimentResults {
    pub fn row(&self, job_count: usize) -> Option<&SizeResult> {
        self.rows.iter().find(|row| row.job_count == job_count)
    }

    /// One algorithm's averages across every job count, in row order.
    pub fn series(&self, algorithm: Algorithm) -> Vec<(usize, f64)> {
        self.rows
            .iter()
            .filter_map(|row| row.average(algorithm).map(|avg| (row.job_count, avg)))
            .collect()
    }

    pub fn max_average(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.averages.iter().map(|entry| entry.average_turnaround))
            .fold(0.0, f64::max)
    }
}
