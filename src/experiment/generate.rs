use rand::Rng;

use crate::core::{Job, Ticks};

/// `count` jobs named `Job1..JobN`, bursts uniform in `1..=max_burst_time`.
pub fn random_jobs<R: Rng>(
    rng: &mut R,
    count: usize,
    max_burst_time: Ticks,
) -> Vec<Job> {
    debug_assert!(max_burst_time > 0, "max burst time must be positive");
    (1..=count)
        .map(|n| Job::new(format!("Job{n}"), rng.random_range(1..=max_burst_time)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn generates_named_jobs_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let jobs = random_jobs(&mut rng, 50, 30);
        assert_eq!(jobs.len(), 50);
        assert_eq!(jobs[0].id(), "Job1");
        assert_eq!(jobs[49].id(), "Job50");
        assert!(jobs.iter().all(|j| (1..=30).contains(&j.burst_time())));
    }

    #[test]
    fn same_seed_same_jobs() {
        let a = random_jobs(&mut StdRng::seed_from_u64(42), 10, 30);
        let b = random_jobs(&mut StdRng::seed_from_u64(42), 10, 30);
        assert_eq!(a, b);
    }

    #[test]
    fn max_burst_of_one_is_constant() {
        let jobs = random_jobs(&mut StdRng::seed_from_u64(1), 5, 1);
        assert!(jobs.iter().all(|j| j.burst_time() == 1));
    }
}
