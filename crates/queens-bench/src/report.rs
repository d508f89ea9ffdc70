use std::fs;
use std::path::Path;

use queens_core::partition::WorkerTally;
use serde::Serialize;
use thiserror::Error;

use crate::search::SearchOutcome;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize run report: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON record of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub program: &'static str,
    pub version: &'static str,
    pub board_size: Option<usize>,
    pub workers: usize,
    pub total_solutions: u64,
    pub elapsed_ms: f64,
    pub tallies: Vec<WorkerTally>,
}

impl From<&SearchOutcome> for RunReport {
    fn from(outcome: &SearchOutcome) -> Self {
        Self {
            program: queens_core::AppInfo::name(),
            version: queens_core::AppInfo::version(),
            board_size: outcome.board_size,
            workers: outcome.workers,
            total_solutions: outcome.total_solutions,
            elapsed_ms: outcome.elapsed_ms(),
            tallies: outcome.tallies.clone(),
        }
    }
}

impl RunReport {
    /// Writes the report as pretty JSON, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<(), ReportError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| ReportError::Io {
                context: "creating report directory",
                source,
            })?;
        }

        let mut payload = serde_json::to_vec_pretty(self)?;
        payload.push(b'\n');
        fs::write(path, payload).map_err(|source| ReportError::Io {
            context: "writing run report",
            source,
        })
    }
}
