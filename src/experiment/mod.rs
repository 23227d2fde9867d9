pub mod config;
pub mod generate;
pub mod results;
pub mod runner;

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::sim::SimError;
pub use config::ExperimentConfig;
pub use generate::random_jobs;
pub use results::{AlgorithmAverage, ExperimentResults, SizeResult};
pub use runner::run_experiment;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("experiment needs at least one job size")]
    NoJobSizes,
    #[error("job sizes must be non-zero")]
    ZeroJobSize,
    #[error("trial count must be positive")]
    ZeroTrials,
    #[error("max burst time must be positive")]
    ZeroMaxBurst,
    #[error("experiment needs at least one algorithm")]
    NoAlgorithms,
    #[error("failed to read config '{}'", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Sim(#[from] SimError),
}
