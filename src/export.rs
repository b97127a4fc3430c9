//! Simulation report files.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::simulator::{Simulation, StateStats};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything written to a report: the chosen projection plus the full table.
#[derive(Debug, Serialize)]
pub struct SimulationReport<'a> {
    pub simulation: &'a Simulation,
    pub states: &'a [StateStats],
}

/// `onoe_sim_<state>.json`, with spaces replaced by underscores.
pub fn default_file_name(state: &str) -> PathBuf {
    PathBuf::from(format!("onoe_sim_{}.json", state.trim().replace(' ', "_")))
}

/// Write `report` to `path` as pretty-printed JSON.
pub fn write_report(path: &Path, report: &SimulationReport<'_>) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(report)?;

    let write_file = |path: &Path| -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    };
    write_file(path).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), state = %report.simulation.state, "simulation report written");
    Ok(())
}
