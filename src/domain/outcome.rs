//! Per-branch results of a sweep.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What happened to one decorated branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BranchAction {
    Deleted,
    /// Dry-run: the delete request was suppressed.
    WouldDelete,
    /// Last commit was at or after the age threshold.
    SkippedRecent { last_commit_at: DateTime<Utc> },
    /// The delete request failed. `soft` failures are reported as warnings.
    Failed { message: String, soft: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchReport {
    pub branch: String,
    #[serde(flatten)]
    pub action: BranchAction,
}

/// Overall signal handed back to the invocation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    SucceededWithWarnings,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepOutcome {
    pub branches: Vec<BranchReport>,
}

impl SweepOutcome {
    pub fn record(&mut self, branch: impl Into<String>, action: BranchAction) {
        self.branches.push(BranchReport { branch: branch.into(), action });
    }

    /// Branches deleted, or that would have been deleted in dry-run.
    pub fn deleted(&self) -> Vec<&str> {
        self.names_where(|a| matches!(a, BranchAction::Deleted | BranchAction::WouldDelete))
    }

    pub fn skipped(&self) -> Vec<&str> {
        self.names_where(|a| matches!(a, BranchAction::SkippedRecent { .. }))
    }

    pub fn failed(&self) -> Vec<&str> {
        self.names_where(|a| matches!(a, BranchAction::Failed { .. }))
    }

    pub fn status(&self) -> RunStatus {
        let mut status = RunStatus::Succeeded;
        for report in &self.branches {
            match report.action {
                BranchAction::Failed { soft: false, .. } => return RunStatus::Failed,
                BranchAction::Failed { soft: true, .. } => {
                    status = RunStatus::SucceededWithWarnings
                }
                _ => {}
            }
        }
        status
    }

    fn names_where(&self, predicate: impl Fn(&BranchAction) -> bool) -> Vec<&str> {
        self.branches.iter().filter(|r| predicate(&r.action)).map(|r| r.branch.as_str()).collect()
    }
}
