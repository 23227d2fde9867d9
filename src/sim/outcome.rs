use average::{Estimate, Mean};
use rustc_hash::FxHashMap;

use crate::core::{Cpu, Job, SchedEvent, Ticks};

/// Final, read-only result of one simulation run.
#[derive(Debug, Clone)]
pub struct SimOutcome {
    pub algorithm: String,
    pub preemptive: bool,
    pub jobs: Vec<Job>,
    pub trace: Vec<SchedEvent>,
    pub makespan: Ticks,
    // Job id --> jobs[index]
    by_id: FxHashMap<String, usize>,
}

impl SimOutcome {
    pub(super) fn new(
        algorithm: String,
        preemptive: bool,
        jobs: Vec<Job>,
        cpu: Cpu,
    ) -> Self {
        let makespan = cpu.now();
        let by_id = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| (job.id().to_string(), index))
            .collect();

        Self {
            algorithm,
            preemptive,
            jobs,
            trace: cpu.into_trace(),
            makespan,
            by_id,
        }
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.by_id.get(id).map(|&index| &self.jobs[index])
    }

    pub fn jobs_map<'a, T>(
        &'a self,
        f: impl Fn(&Job) -> T + 'a,
    ) -> impl Iterator<Item = T> + 'a {
        self.jobs.iter().map(f)
    }

    // Wider than `Ticks`: n turnarounds can each be close to the makespan
    pub fn total_turnaround(&self) -> u128 {
        self.jobs_map(|j| u128::from(j.turnaround_time().unwrap_or_default()))
            .sum()
    }

    pub fn average_turnaround(&self) -> f64 {
        self.jobs_map(|j| j.turnaround_time().unwrap_or_default() as f64)
            .collect::<Mean>()
            .estimate()
    }

    /// Jobs in the order they finished.
    pub fn completion_order(&self) -> impl Iterator<Item = &Job> + '_ {
        self.trace.iter().filter_map(|event| match *event {
            SchedEvent::Finished { job, .. } => Some(&self.jobs[job]),
            SchedEvent::Ran { .. } => None,
        })
    }
}
