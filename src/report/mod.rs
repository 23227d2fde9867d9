pub mod chart;
pub mod store;
pub mod table;
pub mod trace;

use std::{io, path::PathBuf};

use thiserror::Error;

pub use chart::render_chart;
pub use store::{load_results, save_results};
pub use table::render_table;
pub use trace::{render_summary, render_trace};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to access results file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode results")]
    Encode(#[source] serde_json::Error),
    #[error("'{}' is not a valid results file", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
