//! Batch driver: walk an input tree, flatten each manifest to CSV

use crate::table::FlowTable;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Default manifest file name looked for in each application directory
pub const DEFAULT_MANIFEST: &str = "graph-original.yml";

/// Errors that abort a batch run outright.
///
/// Per-document failures never surface here; they are logged and counted
/// in the summary so one bad manifest cannot sink the rest of the batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

/// Outcome counts of one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Manifests flattened and written as CSV
    pub written: usize,
    /// Manifests that parsed to an empty table (no CSV written)
    pub empty: usize,
    /// Manifests that could not be read or written
    pub failed: usize,
}

/// Process every application directory under `input`.
///
/// Each immediate subdirectory of `input` is checked for a file named
/// `manifest`; when present, its table is assembled and written to
/// `output/<subdirectory-name>.csv`. The output directory is created if
/// missing. Documents yielding an empty table are skipped and counted.
pub fn process_directory(input: &Path, output: &Path, manifest: &str) -> BatchResult<BatchSummary> {
    fs::create_dir_all(output)?;

    let mut summary = BatchSummary::default();
    for entry in WalkDir::new(input).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                summary.failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let manifest_path = entry.path().join(manifest);
        if !manifest_path.is_file() {
            debug!("no manifest in {}", entry.path().display());
            continue;
        }

        let app_name = entry.file_name().to_string_lossy().to_string();
        let csv_path = output.join(format!("{}.csv", app_name));
        match process_manifest(&manifest_path, &csv_path) {
            Ok(true) => {
                info!("wrote {}", csv_path.display());
                summary.written += 1;
            }
            Ok(false) => {
                info!("no valid data in {}", manifest_path.display());
                summary.empty += 1;
            }
            Err(e) => {
                warn!("error processing {}: {}", manifest_path.display(), e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Flatten one manifest to a CSV file.
///
/// Returns `Ok(true)` when a CSV was written, `Ok(false)` when the
/// manifest produced no rows (nothing is written in that case).
pub fn process_manifest(manifest_path: &Path, csv_path: &Path) -> BatchResult<bool> {
    let content = fs::read_to_string(manifest_path)?;
    let table = FlowTable::from_yaml(&content);
    if table.is_empty() {
        return Ok(false);
    }
    write_csv(&table, csv_path)?;
    Ok(true)
}

/// Persist a table as CSV with a header row.
///
/// Quoting of fields containing delimiters or newlines is handled by the
/// CSV layer.
pub fn write_csv(table: &FlowTable, path: &Path) -> BatchResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in table.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
