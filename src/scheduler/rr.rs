use std::{collections::VecDeque, num::NonZeroU64};

use super::{ParseAlgorithmError, Scheduler};
use crate::core::{Cpu, Job, JobIndex, Ticks};

/// Round-Robin over a FIFO ready queue with a fixed time slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    time_slice: NonZeroU64,
}

impl RoundRobin {
    pub fn new(time_slice: NonZeroU64) -> Self {
        Self { time_slice }
    }

    pub fn with_slice(time_slice: Ticks) -> Result<Self, ParseAlgorithmError> {
        NonZeroU64::new(time_slice)
            .map(Self::new)
            .ok_or(ParseAlgorithmError::ZeroTimeSlice)
    }

    pub fn time_slice(&self) -> Ticks {
        self.time_slice.get()
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> String {
        format!("RR-{}", self.time_slice)
    }

    fn preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, cpu: &mut Cpu, jobs: &mut [Job]) {
        let mut ready: VecDeque<JobIndex> = (0..jobs.len()).collect();

        // A job leaves the queue for good on the turn it finishes, so the
        // queue drains exactly when every job is done.
        while let Some(index) = ready.pop_front() {
            if !cpu.run(index, &mut jobs[index], Some(self.time_slice())) {
                ready.push_back(index);
            }
        }
    }
}
