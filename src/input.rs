//! Job-file parsing.
//!
//! A job file holds two lines per job, repeated: the job id, then its burst
//! time as a positive decimal integer.
//!
//! ```text
//! Job1
//! 5
//! Job2
//! 3
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{Job, Ticks};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file '{}' not found", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("expected an id line and a burst-time line per job, found {lines} lines")]
    OddLineCount { lines: usize },
    #[error("line {line}: job id is empty")]
    EmptyId { line: usize },
    #[error("line {line}: burst time '{value}' is not a positive integer")]
    InvalidBurst { line: usize, value: String },
    #[error("line {line}: duplicate job id '{id}'")]
    DuplicateId { line: usize, id: String },
    #[error("line {line}: total burst time exceeds {}", Ticks::MAX)]
    TotalBurstOverflow { line: usize },
}

pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<Job>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_jobs(&text)
}

pub fn parse_jobs(text: &str) -> Result<Vec<Job>, InputError> {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    // Blank lines at end of file are not records
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    if lines.len() % 2 != 0 {
        return Err(InputError::OddLineCount { lines: lines.len() });
    }

    let mut seen = FxHashSet::default();
    let mut total: Ticks = 0;
    let mut jobs = Vec::with_capacity(lines.len() / 2);
    for (record, pair) in lines.chunks_exact(2).enumerate() {
        let id_line = record * 2 + 1;
        let (id, burst) = (pair[0], pair[1]);

        if id.is_empty() {
            return Err(InputError::EmptyId { line: id_line });
        }
        if !seen.insert(id) {
            return Err(InputError::DuplicateId {
                line: id_line,
                id: id.to_string(),
            });
        }

        let burst_time = burst
            .parse::<Ticks>()
            .ok()
            .filter(|&burst| burst > 0)
            .ok_or_else(|| InputError::InvalidBurst {
                line: id_line + 1,
                value: burst.to_string(),
            })?;
        total = total
            .checked_add(burst_time)
            .ok_or(InputError::TotalBurstOverflow { line: id_line + 1 })?;

        jobs.push(Job::new(id, burst_time));
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_in_order() {
        let jobs = parse_jobs("Job1\n5\nJob2\n3\nJob3\n8\n").unwrap();
        let parsed: Vec<_> = jobs.iter().map(|j| (j.id(), j.burst_time())).collect();
        assert_eq!(parsed, [("Job1", 5), ("Job2", 3), ("Job3", 8)]);
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_trailing_blank_lines() {
        let jobs = parse_jobs("  Job1 \r\n 7\r\n\n\n").unwrap();
        assert_eq!(jobs, [Job::new("Job1", 7)]);
    }

    #[test]
    fn empty_text_yields_no_jobs() {
        assert!(parse_jobs("").unwrap().is_empty());
    }

    #[test]
    fn odd_line_count_is_rejected() {
        assert!(matches!(
            parse_jobs("Job1\n5\nJob2\n"),
            Err(InputError::OddLineCount { lines: 3 })
        ));
    }

    #[test]
    fn bad_burst_reports_its_line() {
        for bad in ["five", "-3", "0", "2.5", ""] {
            let text = format!("Job1\n5\nJob2\n{bad}\nJob3\n1");
            match parse_jobs(&text) {
                Err(InputError::InvalidBurst { line, value }) => {
                    assert_eq!(line, 4);
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidBurst for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn duplicate_and_empty_ids_are_rejected() {
        assert!(matches!(
            parse_jobs("A\n1\nA\n2\n"),
            Err(InputError::DuplicateId { line: 3, .. })
        ));
        assert!(matches!(
            parse_jobs("A\n1\n\n2\n"),
            Err(InputError::EmptyId { line: 3 })
        ));
    }

    #[test]
    fn total_burst_must_fit_the_clock() {
        let max = Ticks::MAX;
        assert_eq!(parse_jobs(&format!("A\n{max}\n")).unwrap()[0].burst_time(), max);
        assert!(matches!(
            parse_jobs(&format!("A\n{max}\nB\n1\n")),
            Err(InputError::TotalBurstOverflow { line: 4 })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_jobs("/definitely/not/here/jobs.txt").unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
    }
}
