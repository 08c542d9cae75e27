//! Step outputs appended to the `GITHUB_OUTPUT` file.

use std::io::Write;
use std::path::Path;

use crate::domain::{AppError, SweepOutcome};

/// Append `deleted=` and `skipped=` entries when `GITHUB_OUTPUT` is set.
pub fn write_sweep_outputs(outcome: &SweepOutcome) -> Result<(), AppError> {
    match std::env::var_os("GITHUB_OUTPUT") {
        Some(path) if !path.is_empty() => append_sweep_outputs(Path::new(&path), outcome),
        _ => Ok(()),
    }
}

pub fn append_sweep_outputs(path: &Path, outcome: &SweepOutcome) -> Result<(), AppError> {
    let deleted = to_single_line_json(&outcome.deleted())?;
    let skipped = to_single_line_json(&outcome.skipped())?;

    let mut file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "deleted={}", deleted)?;
    writeln!(file, "skipped={}", skipped)?;
    Ok(())
}

fn to_single_line_json(names: &[&str]) -> Result<String, AppError> {
    let json = serde_json::to_string(names).map_err(|e| AppError::ParseError {
        what: "step output".into(),
        details: e.to_string(),
    })?;
    debug_assert!(!json.contains('\n'), "step output must be single-line");
    Ok(json)
}
