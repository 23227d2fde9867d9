use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("job set is empty; there is no average turnaround to compute")]
    EmptyJobSet,
    #[error("job {id} has already been scheduled; pass a fresh copy")]
    StaleJob { id: String },
    #[error("total burst time of the job set exceeds the simulated clock range")]
    WorkOverflow,
}
