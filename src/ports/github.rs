use chrono::{DateTime, Utc};

use crate::domain::AppError;

/// Pull request fields the sweep needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestInfo {
    pub number: u64,
    /// Source branch name (`head.ref`).
    pub head_ref: String,
}

/// Branch metadata used for the age check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub name: String,
    pub last_commit_at: DateTime<Utc>,
}

pub trait GitHubPort {
    /// Fetch a pull request by number.
    fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestInfo, AppError>;

    /// Fetch a branch and its last commit timestamp.
    fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<BranchInfo, AppError>;

    /// Delete a git reference such as `heads/feature-x`.
    fn delete_ref(&self, owner: &str, repo: &str, reference: &str) -> Result<(), AppError>;
}
