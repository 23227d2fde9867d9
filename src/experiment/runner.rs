use average::{Estimate, Mean};
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    AlgorithmAverage, ExperimentConfig, ExperimentError, ExperimentResults, SizeResult,
    random_jobs,
};
use crate::sim::simulate;

/// Runs every configured algorithm against identical random job sets and
/// averages the per-trial average turnaround for each job count.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentResults, ExperimentError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        "experiment: sizes {:?}, {} trials, max burst {}, seed {seed}",
        config.job_sizes, config.trials, config.max_burst_time
    );
    let mut rng = StdRng::seed_from_u64(seed);

    let mut rows = Vec::with_capacity(config.job_sizes.len());
    for &job_count in &config.job_sizes {
        let mut means = vec![Mean::new(); config.algorithms.len()];

        for trial in 0..config.trials {
            let jobs = random_jobs(&mut rng, job_count, config.max_burst_time);
            for (algorithm, mean) in config.algorithms.iter().zip(means.iter_mut()) {
                // Each policy consumes its own copy of the trial's job set
                let outcome = simulate(jobs.clone(), algorithm)?;
                mean.add(outcome.average_turnaround());
            }
            debug!("size {job_count} trial {trial} done");
        }

        let averages: Vec<AlgorithmAverage> = config
            .algorithms
            .iter()
            .zip(&means)
            .map(|(&algorithm, mean)| AlgorithmAverage {
                algorithm,
                average_turnaround: mean.estimate(),
            })
            .collect();
        for entry in &averages {
            info!(
                "{} jobs, {}: {:.2}ms",
                job_count, entry.algorithm, entry.average_turnaround
            );
        }
        rows.push(SizeResult {
            job_count,
            averages,
        });
    }

    Ok(ExperimentResults {
        seed,
        trials: config.trials,
        max_burst_time: config.max_burst_time,
        algorithms: config.algorithms.clone(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Algorithm;

    fn seeded(seed: u64) -> ExperimentConfig {
        ExperimentConfig {
            job_sizes: vec![3, 6],
            trials: 5,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn one_row_per_size_one_entry_per_algorithm() {
        let results = run_experiment(&seeded(1)).unwrap();
        assert_eq!(results.rows.len(), 2);
        assert_eq!(results.rows[0].job_count, 3);
        for row in &results.rows {
            assert_eq!(row.averages.len(), 4);
            assert!(row.averages.iter().all(|a| a.average_turnaround > 0.0));
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        assert_eq!(
            run_experiment(&seeded(99)).unwrap(),
            run_experiment(&seeded(99)).unwrap()
        );
    }

    #[test]
    fn sjf_never_loses_to_fcfs() {
        let results = run_experiment(&seeded(5)).unwrap();
        for row in &results.rows {
            let sjf = row.average(Algorithm::Sjf).unwrap();
            let fcfs = row.average(Algorithm::Fcfs).unwrap();
            assert!(sjf <= fcfs + 1e-9, "SJF {sjf} > FCFS {fcfs}");
        }
    }

    #[test]
    fn unseeded_run_records_its_seed() {
        let config = ExperimentConfig {
            seed: None,
            ..seeded(0)
        };
        let results = run_experiment(&config).unwrap();
        let replay = run_experiment(&ExperimentConfig {
            seed: Some(results.seed),
            ..config
        })
        .unwrap();
        assert_eq!(results, replay);
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let config = ExperimentConfig {
            trials: 0,
            ..Default::default()
        };
        assert!(matches!(
            run_experiment(&config),
            Err(ExperimentError::ZeroTrials)
        ));
    }
}
