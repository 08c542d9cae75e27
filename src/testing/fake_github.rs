use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::domain::AppError;
use crate::ports::{BranchInfo, GitHubPort, PullRequestInfo};

/// A remote call observed by `FakeGitHub`, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubCall {
    GetPullRequest { owner: String, repo: String, number: u64 },
    GetBranch { owner: String, repo: String, branch: String },
    DeleteRef { owner: String, repo: String, reference: String },
}

#[derive(Clone, Default)]
pub struct FakeGitHub {
    pub calls: Arc<Mutex<Vec<GitHubCall>>>,
    pull_heads: HashMap<u64, String>,
    commit_dates: HashMap<String, DateTime<Utc>>,
    failing_refs: HashSet<String>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pull_request(mut self, number: u64, head_ref: &str) -> Self {
        self.pull_heads.insert(number, head_ref.to_string());
        self
    }

    pub fn with_branch(mut self, branch: &str, last_commit_at: DateTime<Utc>) -> Self {
        self.commit_dates.insert(branch.to_string(), last_commit_at);
        self
    }

    /// Make `delete_ref` fail for `heads/<branch>`.
    pub fn failing_delete(mut self, branch: &str) -> Self {
        self.failing_refs.insert(format!("heads/{}", branch));
        self
    }

    pub fn recorded_calls(&self) -> Vec<GitHubCall> {
        self.calls.lock().unwrap().clone()
    }

    /// References passed to `delete_ref`, in order.
    pub fn deleted_refs(&self) -> Vec<String> {
        self.recorded_calls()
            .into_iter()
            .filter_map(|call| match call {
                GitHubCall::DeleteRef { reference, .. } => Some(reference),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: GitHubCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found() -> AppError {
    AppError::GitHubApi { status: 404, message: "Not Found".into() }
}

impl GitHubPort for FakeGitHub {
    fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestInfo, AppError> {
        self.record(GitHubCall::GetPullRequest { owner: owner.into(), repo: repo.into(), number });
        let head_ref = self.pull_heads.get(&number).cloned().ok_or_else(not_found)?;
        Ok(PullRequestInfo { number, head_ref })
    }

    fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<BranchInfo, AppError> {
        self.record(GitHubCall::GetBranch {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
        });
        let last_commit_at =
            self.commit_dates.get(branch).copied().ok_or_else(|| AppError::GitHubApi {
                status: 404,
                message: "Branch not found".into(),
            })?;
        Ok(BranchInfo { name: branch.to_string(), last_commit_at })
    }

    fn delete_ref(&self, owner: &str, repo: &str, reference: &str) -> Result<(), AppError> {
        self.record(GitHubCall::DeleteRef {
            owner: owner.into(),
            repo: repo.into(),
            reference: reference.into(),
        });
        if self.failing_refs.contains(reference) {
            return Err(AppError::GitHubApi {
                status: 422,
                message: "Reference does not exist".into(),
            });
        }
        Ok(())
    }
}
