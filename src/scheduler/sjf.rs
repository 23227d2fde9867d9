use super::{Scheduler, fcfs::run_in_order};
use crate::core::{Cpu, Job, JobIndex};

/// Non-preemptive shortest-job-first.
///
/// Jobs are visited in ascending burst order; the sort is stable, so equal
/// bursts keep their submission order. The job slice itself is not
/// reordered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Sjf {
    pub fn order(jobs: &[Job]) -> Vec<JobIndex> {
        let mut order: Vec<JobIndex> = (0..jobs.len()).collect();
        order.sort_by_key(|&index| jobs[index].burst_time());
        order
    }
}

impl Scheduler for Sjf {
    fn name(&self) -> String {
        "SJF".to_string()
    }

    fn schedule(&self, cpu: &mut Cpu, jobs: &mut [Job]) {
        let order = Self::order(jobs);
        run_in_order(cpu, jobs, order);
    }
}
