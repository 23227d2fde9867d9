pub mod core;
pub mod experiment;
pub mod input;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Job, SchedEvent};
pub use scheduler::{Algorithm, Scheduler};
pub use sim::{Sim, SimError, SimOutcome, simulate};
