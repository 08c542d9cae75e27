//! Last-commit age threshold.

use chrono::{DateTime, Duration, Utc};

use crate::domain::AppError;
use crate::domain::inputs::INPUT_DAYS;

/// Cutoff computed once per run as `now - days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeThreshold {
    cutoff: DateTime<Utc>,
}

impl AgeThreshold {
    /// Fails when `now - days` falls outside the representable date range.
    pub fn from_days(now: DateTime<Utc>, days: u32) -> Result<Self, AppError> {
        Duration::try_days(i64::from(days))
            .and_then(|delta| now.checked_sub_signed(delta))
            .map(|cutoff| Self { cutoff })
            .ok_or_else(|| {
                AppError::invalid_input(
                    INPUT_DAYS,
                    format!("{} days reaches past the earliest supported date", days),
                )
            })
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    /// A commit at or after the cutoff keeps its branch alive.
    pub fn is_recent(&self, last_commit_at: DateTime<Utc>) -> bool {
        last_commit_at >= self.cutoff
    }
}
