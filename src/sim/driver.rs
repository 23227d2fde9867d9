use log::debug;

use super::{SimError, SimOutcome};
use crate::{
    core::{Cpu, Job, JobState, Observer, Ticks},
    scheduler::Scheduler,
};

/// A job set owned by exactly one simulation run.
///
/// Schedulers mutate jobs in place, so comparing policies on the same
/// workload means cloning the job set once per policy before building
/// each `Sim`.
pub struct Sim {
    jobs: Vec<Job>,
    cpu: Cpu,
}

impl Sim {
    pub fn new(jobs: Vec<Job>) -> Result<Self, SimError> {
        if jobs.is_empty() {
            return Err(SimError::EmptyJobSet);
        }
        if let Some(job) = jobs.iter().find(|job| job.state() != JobState::Ready) {
            return Err(SimError::StaleJob {
                id: job.id().to_string(),
            });
        }
        if total_work(&jobs).is_none() {
            return Err(SimError::WorkOverflow);
        }

        Ok(Self {
            jobs,
            cpu: Cpu::new(),
        })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn run<S: Scheduler + ?Sized>(mut self, scheduler: &S) -> SimOutcome {
        let algorithm = scheduler.name();
        let preemptive = scheduler.preemptive();
        scheduler.schedule(&mut self.cpu, &mut self.jobs);
        Observer.observe(&self.cpu, &self.jobs);

        let outcome = SimOutcome::new(algorithm, preemptive, self.jobs, self.cpu);
        debug!(
            "{}: {} jobs, makespan {}, avg turnaround {:.2}",
            outcome.algorithm,
            outcome.jobs.len(),
            outcome.makespan,
            outcome.average_turnaround()
        );
        outcome
    }
}

// Sum of bursts, i.e. the final simulated time; `None` if it exceeds `Ticks`
fn total_work(jobs: &[Job]) -> Option<Ticks> {
    jobs.iter()
        .try_fold(0, |total: Ticks, job| total.checked_add(job.burst_time()))
}

/// Runs `scheduler` over `jobs`, taking ownership of the set.
pub fn simulate<S: Scheduler + ?Sized>(
    jobs: Vec<Job>,
    scheduler: &S,
) -> Result<SimOutcome, SimError> {
    Ok(Sim::new(jobs)?.run(scheduler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Algorithm, Fcfs};

    #[test]
    fn empty_job_set_is_rejected() {
        assert_eq!(Sim::new(Vec::new()).err(), Some(SimError::EmptyJobSet));
    }

    #[test]
    fn scheduled_jobs_cannot_be_rerun() {
        let outcome = simulate(vec![Job::new("Job1", 2)], &Fcfs).unwrap();
        let err = simulate(outcome.jobs, &Fcfs).unwrap_err();
        assert_eq!(
            err,
            SimError::StaleJob {
                id: "Job1".to_string()
            }
        );
    }

    #[test]
    fn work_beyond_the_clock_range_is_rejected() {
        let jobs = vec![Job::new("A", Ticks::MAX), Job::new("B", 1)];
        assert_eq!(Sim::new(jobs).err(), Some(SimError::WorkOverflow));

        let fits = vec![Job::new("A", Ticks::MAX - 1), Job::new("B", 1)];
        assert_eq!(simulate(fits, &Fcfs).unwrap().makespan, Ticks::MAX);
    }

    #[test]
    fn fresh_copies_can_be_rerun() {
        let first = simulate(vec![Job::new("Job1", 2)], &Algorithm::Sjf).unwrap();
        let fresh: Vec<Job> = first.jobs.iter().map(Job::fresh).collect();
        let second = simulate(fresh, &Algorithm::Sjf).unwrap();
        assert_eq!(first.jobs, second.jobs);
    }
}
