use super::{
    event::SchedEvent,
    state::{Cpu, Job, JobState},
};

/// Checks the job-lifecycle invariants once a scheduler has returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct Observer;

impl Observer {
    pub fn observe(&self, cpu: &Cpu, jobs: &[Job]) {
        let total_work: u64 = jobs.iter().map(Job::burst_time).sum();
        debug_assert_eq!(
            cpu.now(),
            total_work,
            "Simulated time must equal the sum of burst times"
        );

        for job in jobs {
            debug_assert_eq!(
                job.state(),
                JobState::Finished,
                "Job {} left unfinished",
                job.id()
            );
            debug_assert_eq!(
                job.remaining_time(),
                0,
                "Finished job {} has work left",
                job.id()
            );
            debug_assert_eq!(
                job.turnaround_time(),
                job.completion_time(),
                "Job {} turnaround must equal completion",
                job.id()
            );
        }

        let mut clock = 0;
        let mut finished = vec![false; jobs.len()];
        for event in cpu.trace() {
            match *event {
                SchedEvent::Ran { job, start, end, .. } => {
                    debug_assert_eq!(start, clock, "Gap or overlap before grant to job {job}");
                    debug_assert!(end > start, "Empty grant to job {job}");
                    debug_assert!(!finished[job], "Job {job} ran after finishing");
                    clock = end;
                }
                SchedEvent::Finished { job, at } => {
                    debug_assert!(!finished[job], "Job {job} finished twice");
                    debug_assert_eq!(jobs[job].completion_time(), Some(at));
                    finished[job] = true;
                }
            }
        }
    }
}
