pub mod driver;
pub mod error;
pub mod outcome;

pub use driver::{Sim, simulate};
pub use error::SimError;
pub use outcome::SimOutcome;
