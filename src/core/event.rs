use crate::core::{JobIndex, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    // Job held the CPU over [start, end)
    Ran {
        job: JobIndex,
        start: Ticks,
        end: Ticks,
        remaining: Ticks,
    },
    Finished {
        job: JobIndex,
        at: Ticks,
    },
}

impl SchedEvent {
    pub fn job(&self) -> JobIndex {
        match *self {
            Self::Ran { job, .. } | Self::Finished { job, .. } => job,
        }
    }
}
