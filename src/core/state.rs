use super::event::SchedEvent;
use log::trace;

pub type Ticks = u64;
pub type JobId = String;
// Position of a job within the submitted job set
pub type JobIndex = usize;

// Every job in a set is submitted at t=0
pub const ARRIVAL_TIME: Ticks = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Never granted the CPU.
    Ready,
    /// Ran for at least one slice and went back to the ready queue.
    Preempted,
    Finished,
}

/// One schedulable unit of work.
///
/// Only [`Cpu::run`] mutates the metric fields, so a job that came back from
/// a simulation can be told apart from a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    id: JobId,
    burst_time: Ticks,
    remaining_time: Ticks,
    completion_time: Option<Ticks>,
    turnaround_time: Option<Ticks>,
}

impl Job {
    pub fn new(id: impl Into<JobId>, burst_time: Ticks) -> Self {
        assert!(burst_time > 0, "Job burst time must be positive");
        Self {
            id: id.into(),
            burst_time,
            remaining_time: burst_time,
            completion_time: None,
            turnaround_time: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    pub fn completion_time(&self) -> Option<Ticks> {
        self.completion_time
    }

    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.turnaround_time
    }

    pub fn state(&self) -> JobState {
        if self.completion_time.is_some() {
            JobState::Finished
        } else if self.remaining_time < self.burst_time {
            JobState::Preempted
        } else {
            JobState::Ready
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == JobState::Finished
    }

    /// A copy of this job with its metrics reset, as if never scheduled.
    pub fn fresh(&self) -> Self {
        Self::new(self.id.clone(), self.burst_time)
    }
}

/// The single simulated processor: a clock plus the record of every grant.
#[derive(Debug, Default)]
pub struct Cpu {
    now: Ticks,
    trace: Vec<SchedEvent>,
}

impl Cpu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn trace(&self) -> &[SchedEvent] {
        &self.trace
    }

    pub fn into_trace(self) -> Vec<SchedEvent> {
        self.trace
    }

    /// Grant `job` the CPU for at most `slice` ticks (`None` runs it to
    /// completion). Returns `true` if the job finished during this grant.
    ///
    /// A job finishes whenever its remaining time is `<= slice`, so a job
    /// with exactly one slice left completes here instead of being
    /// preempted at zero remaining.
    pub fn run(&mut self, index: JobIndex, job: &mut Job, slice: Option<Ticks>) -> bool {
        debug_assert!(
            !job.is_finished(),
            "Job {} granted the CPU after finishing",
            job.id
        );
        debug_assert_ne!(slice, Some(0), "Time slice must be positive");

        let delta = match slice {
            Some(slice) if job.remaining_time > slice => slice,
            _ => job.remaining_time,
        };

        let start = self.now;
        self.now += delta;
        job.remaining_time -= delta;

        self.trace.push(SchedEvent::Ran {
            job: index,
            start,
            end: self.now,
            remaining: job.remaining_time,
        });
        trace!(
            "t={start}..{} {} (remaining {})",
            self.now, job.id, job.remaining_time
        );

        if job.remaining_time > 0 {
            return false;
        }

        job.completion_time = Some(self.now);
        job.turnaround_time = Some(self.now - ARRIVAL_TIME);
        self.trace.push(SchedEvent::Finished {
            job: index,
            at: self.now,
        });
        true
    }
}
