use std::fmt::Write;

use crate::{core::SchedEvent, sim::SimOutcome};

/// Gantt-style listing of every CPU grant in the run. Final grants read
/// `*** FINISHED ***` under preemptive policies and show the burst otherwise.
pub fn render_trace(outcome: &SimOutcome) -> String {
    let mut out = String::new();
    for event in &outcome.trace {
        let SchedEvent::Ran {
            job,
            start,
            end,
            remaining,
        } = *event
        else {
            continue;
        };
        let job = &outcome.jobs[job];
        let _ = write!(out, "  Time {start:02} - {end:02}: {}", job.id());
        if remaining > 0 {
            let _ = writeln!(out, " (Remaining: {remaining})");
        } else if outcome.preemptive {
            let _ = writeln!(out, " *** FINISHED ***");
        } else {
            let _ = writeln!(out, " (Burst: {})", job.burst_time());
        }
    }
    out
}

pub fn render_summary(outcome: &SimOutcome) -> String {
    format!(
        "--- {} Results ---\nTotal jobs: {}\nTotal time: {} ms\nAverage Turnaround Time: {:.2} ms\n",
        outcome.algorithm,
        outcome.jobs.len(),
        outcome.makespan,
        outcome.average_turnaround()
    )
}
