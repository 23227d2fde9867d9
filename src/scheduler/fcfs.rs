use super::Scheduler;
use crate::core::{Cpu, Job, JobIndex};

/// First-come-first-served: jobs run to completion in submission order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> String {
        "FCFS".to_string()
    }

    fn schedule(&self, cpu: &mut Cpu, jobs: &mut [Job]) {
        run_in_order(cpu, jobs, 0..jobs.len());
    }
}

// Non-preemptive pass shared with SJF: each job in `order` runs uninterrupted
pub(super) fn run_in_order(
    cpu: &mut Cpu,
    jobs: &mut [Job],
    order: impl IntoIterator<Item = JobIndex>,
) {
    for index in order {
        let finished = cpu.run(index, &mut jobs[index], None);
        debug_assert!(finished, "Non-preemptive grant must finish the job");
    }
}
