use std::{fs, path::Path};

use super::ReportError;
use crate::experiment::ExperimentResults;

pub fn save_results(
    path: impl AsRef<Path>,
    results: &ExperimentResults,
) -> Result<(), ReportError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(results).map_err(ReportError::Encode)?;
    fs::write(path, json + "\n").map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_results(path: impl AsRef<Path>) -> Result<ExperimentResults, ReportError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ReportError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
