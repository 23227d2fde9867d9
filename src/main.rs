use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, warn};
use sched_sim::{
    Algorithm, simulate,
    core::Ticks,
    experiment::{ExperimentConfig, run_experiment},
    input::load_jobs,
    report,
};

/// Uniprocessor CPU-scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "sched_sim", version, about, long_about = None)]
struct Cli {
    /// Log run summaries and experiment progress (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// First-come-first-served
    Fcfs(JobFile),
    /// Non-preemptive shortest-job-first
    Sjf(JobFile),
    /// Round-Robin, time slice 2
    Rr2(JobFile),
    /// Round-Robin, time slice 5
    Rr5(JobFile),
    /// Round-Robin with a custom time slice
    Rr {
        #[arg(short, long)]
        slice: Ticks,
        #[command(flatten)]
        file: JobFile,
    },
    /// Compare every algorithm on random job sets
    Experiment(ExperimentArgs),
    /// Chart results written by `experiment --output`
    Chart {
        /// Results JSON file
        results: PathBuf,
    },
}

#[derive(Args, Debug)]
struct JobFile {
    /// Job file: an id line followed by a burst-time line, per job
    input: PathBuf,
}

#[derive(Args, Debug)]
struct ExperimentArgs {
    /// JSON experiment config; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Job counts, one table row each
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    #[arg(long)]
    trials: Option<usize>,

    #[arg(long)]
    max_burst: Option<Ticks>,

    #[arg(long, value_delimiter = ',')]
    algorithms: Option<Vec<Algorithm>>,

    #[arg(long)]
    seed: Option<u64>,

    /// Write results as JSON for `chart`
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fcfs(file) => run_file(file, Algorithm::Fcfs),
        Command::Sjf(file) => run_file(file, Algorithm::Sjf),
        Command::Rr2(file) => run_file(file, Algorithm::RR2),
        Command::Rr5(file) => run_file(file, Algorithm::RR5),
        Command::Rr { slice, file } => run_file(file, Algorithm::round_robin(slice)?),
        Command::Experiment(args) => experiment(args),
        Command::Chart { results } => {
            let results = report::load_results(&results)?;
            print!("{}", report::render_chart(&results));
            Ok(())
        }
    }
}

fn run_file(file: JobFile, algorithm: Algorithm) -> anyhow::Result<()> {
    let jobs = load_jobs(&file.input)?;
    if jobs.is_empty() {
        warn!("{} holds no jobs; nothing to schedule", file.input.display());
        return Ok(());
    }

    let outcome = simulate(jobs, &algorithm)?;
    println!("--- {algorithm} Scheduling Simulation ---");
    println!("Job execution order and details:\n");
    print!("{}", report::render_trace(&outcome));
    println!();
    print!("{}", report::render_summary(&outcome));
    Ok(())
}

fn experiment(args: ExperimentArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_file(path)?,
        None => ExperimentConfig::default(),
    };
    if let Some(sizes) = args.sizes {
        config.job_sizes = sizes;
    }
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if let Some(max_burst) = args.max_burst {
        config.max_burst_time = max_burst;
    }
    if let Some(algorithms) = args.algorithms {
        config.algorithms = algorithms;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let results = run_experiment(&config)?;
    println!("--- Final Performance Analysis Table (seed {}) ---", results.seed);
    print!("{}", report::render_table(&results));

    if let Some(path) = args.output {
        report::save_results(&path, &results)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Saved {}", path.display());
    }
    Ok(())
}
