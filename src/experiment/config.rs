use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::ExperimentError;
use crate::{core::Ticks, scheduler::Algorithm};

/// Parameters of one experiment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Number of jobs per generated set, one table row each.
    pub job_sizes: Vec<usize>,
    /// Independent job sets generated per size.
    pub trials: usize,
    /// Bursts are drawn uniformly from `1..=max_burst_time`.
    pub max_burst_time: Ticks,
    pub algorithms: Vec<Algorithm>,
    /// Fixed seed for a reproducible run; drawn from the OS when unset.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            job_sizes: vec![5, 10, 15],
            trials: 20,
            max_burst_time: 30,
            algorithms: Algorithm::STANDARD.to_vec(),
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExperimentError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ExperimentError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ExperimentError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.job_sizes.is_empty() {
            return Err(ExperimentError::NoJobSizes);
        }
        if self.job_sizes.contains(&0) {
            return Err(ExperimentError::ZeroJobSize);
        }
        if self.trials == 0 {
            return Err(ExperimentError::ZeroTrials);
        }
        if self.max_burst_time == 0 {
            return Err(ExperimentError::ZeroMaxBurst);
        }
        if self.algorithms.is_empty() {
            return Err(ExperimentError::NoAlgorithms);
        }
        Ok(())
    }
}
