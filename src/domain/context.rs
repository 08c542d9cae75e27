//! Invocation context: the repository the workflow runs in.

use crate::domain::AppError;

/// Repository coordinates supplied by the invocation host.
///
/// `repo_owner`/`repo_name` come from `GITHUB_REPOSITORY` and are used for pull
/// request lookups and as deletion defaults. `payload_owner`/`payload_repo`
/// come from the triggering event and are used for branch lookups; they are
/// never affected by the `owner`/`repository` inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub repo_owner: String,
    pub repo_name: String,
    pub payload_owner: String,
    pub payload_repo: String,
}

impl InvocationContext {
    /// Context where the event payload names the same repository.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        let owner = owner.into();
        let repo = repo.into();
        Self {
            payload_owner: owner.clone(),
            payload_repo: repo.clone(),
            repo_owner: owner,
            repo_name: repo,
        }
    }

    /// Parse an `owner/repo` slug.
    pub fn from_slug(slug: &str) -> Result<Self, AppError> {
        let (owner, repo) = parse_slug(slug)?;
        Ok(Self::new(owner, repo))
    }

    pub fn with_payload(mut self, owner: Option<String>, repo: Option<String>) -> Self {
        if let Some(owner) = owner {
            self.payload_owner = owner;
        }
        if let Some(repo) = repo {
            self.payload_repo = repo;
        }
        self
    }
}

fn parse_slug(slug: &str) -> Result<(String, String), AppError> {
    match slug.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(AppError::Context(format!("'{}' is not an owner/repo slug", slug))),
    }
}
