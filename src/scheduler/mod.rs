pub mod fcfs;
pub mod rr;
pub mod sjf;

use std::{fmt, num::NonZeroU64, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Cpu, Job, Ticks};
pub use fcfs::Fcfs;
pub use rr::RoundRobin;
pub use sjf::Sjf;

/// A uniprocessor scheduling policy.
///
/// `schedule` owns `jobs` for the duration of the call and must run every
/// job to completion through [`Cpu::run`].
pub trait Scheduler {
    fn name(&self) -> String;

    /// Whether a job can lose the CPU before it finishes.
    fn preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, cpu: &mut Cpu, jobs: &mut [Job]);
}

/// The policies the command line and the experiment driver know by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    Fcfs,
    Sjf,
    RoundRobin(NonZeroU64),
}

impl Algorithm {
    pub const RR2: Self = Self::RoundRobin(NonZeroU64::new(2).unwrap());
    pub const RR5: Self = Self::RoundRobin(NonZeroU64::new(5).unwrap());

    pub const STANDARD: [Self; 4] = [Self::Fcfs, Self::Sjf, Self::RR2, Self::RR5];

    pub fn round_robin(time_slice: Ticks) -> Result<Self, ParseAlgorithmError> {
        NonZeroU64::new(time_slice)
            .map(Self::RoundRobin)
            .ok_or(ParseAlgorithmError::ZeroTimeSlice)
    }
}

impl Scheduler for Algorithm {
    fn name(&self) -> String {
        self.to_string()
    }

    fn preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin(_))
    }

    fn schedule(&self, cpu: &mut Cpu, jobs: &mut [Job]) {
        match *self {
            Self::Fcfs => Fcfs.schedule(cpu, jobs),
            Self::Sjf => Sjf.schedule(cpu, jobs),
            Self::RoundRobin(slice) => RoundRobin::new(slice).schedule(cpu, jobs),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::Sjf => write!(f, "SJF"),
            Self::RoundRobin(slice) => write!(f, "RR-{slice}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAlgorithmError {
    #[error("unknown algorithm '{0}' (expected FCFS, SJF or RR-<slice>)")]
    Unknown(String),
    #[error("round-robin time slice must be a positive integer")]
    ZeroTimeSlice,
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        match name.as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SJF" => Ok(Self::Sjf),
            _ => {
                let slice = name
                    .strip_prefix("RR-")
                    .or_else(|| name.strip_prefix("RR"))
                    .and_then(|slice| slice.parse::<Ticks>().ok())
                    .ok_or_else(|| ParseAlgorithmError::Unknown(s.to_string()))?;
                Self::round_robin(slice)
            }
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ParseAlgorithmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.to_string()
    }
}
