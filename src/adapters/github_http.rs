//! GitHub REST API client implementation using reqwest.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, GitHubApiConfig};
use crate::ports::{BranchInfo, GitHubPort, PullRequestInfo};

const X_GITHUB_API_VERSION: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";
const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP client for the GitHub REST API.
#[derive(Clone)]
pub struct HttpGitHubClient {
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a client authenticated with `token`.
    pub fn new(token: &str, config: &GitHubApiConfig) -> Result<Self, AppError> {
        config.validate()?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::invalid_input("github_token", "contains invalid characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(X_GITHUB_API_VERSION, HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("branch-sweep/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    /// Build `<api_url>/repos/{owner}/{repo}/<tail...>`, encoding each segment.
    fn repo_endpoint(&self, owner: &str, repo: &str, tail: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config_error(format!("Invalid API URL '{}'", self.api_url)))?
            .pop_if_empty()
            .extend(["repos", owner, repo])
            .extend(tail.iter().copied().flat_map(|part| part.split('/')));
        Ok(url)
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().map_err(|e| AppError::Http(e.to_string()))?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "GitHub API response");

        if status.is_success() { Ok(response) } else { Err(api_error(status, response)) }
    }
}

#[derive(Debug, Deserialize)]
struct ApiPullRequest {
    number: u64,
    head: ApiHead,
}

#[derive(Debug, Deserialize)]
struct ApiHead {
    #[serde(rename = "ref")]
    git_ref: String,
}

#[derive(Debug, Deserialize)]
struct ApiBranch {
    name: String,
    commit: ApiBranchCommit,
}

#[derive(Debug, Deserialize)]
struct ApiBranchCommit {
    commit: ApiCommit,
}

#[derive(Debug, Deserialize)]
struct ApiCommit {
    #[serde(default)]
    committer: Option<ApiSignature>,
    #[serde(default)]
    author: Option<ApiSignature>,
}

#[derive(Debug, Deserialize)]
struct ApiSignature {
    #[serde(default)]
    date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubPort for HttpGitHubClient {
    fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestInfo, AppError> {
        let url = self.repo_endpoint(owner, repo, &["pulls", &number.to_string()])?;
        tracing::debug!(%url, "fetching pull request");

        let pull: ApiPullRequest = self.send(self.client.get(url))?.json().map_err(|e| {
            AppError::ParseError { what: "pull request response".into(), details: e.to_string() }
        })?;

        Ok(PullRequestInfo { number: pull.number, head_ref: pull.head.git_ref })
    }

    fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<BranchInfo, AppError> {
        let url = self.repo_endpoint(owner, repo, &["branches", branch])?;
        tracing::debug!(%url, "fetching branch");

        let api_branch: ApiBranch = self.send(self.client.get(url))?.json().map_err(|e| {
            AppError::ParseError { what: "branch response".into(), details: e.to_string() }
        })?;

        let commit = api_branch.commit.commit;
        let last_commit_at = commit
            .committer
            .and_then(|s| s.date)
            .or_else(|| commit.author.and_then(|s| s.date))
            .ok_or_else(|| AppError::ParseError {
                what: "branch response".into(),
                details: format!("no commit date for branch '{}'", api_branch.name),
            })?;

        Ok(BranchInfo { name: api_branch.name, last_commit_at })
    }

    fn delete_ref(&self, owner: &str, repo: &str, reference: &str) -> Result<(), AppError> {
        let url = self.repo_endpoint(owner, repo, &["git", "refs", reference])?;
        tracing::debug!(%url, "deleting reference");

        self.send(self.client.delete(url))?;
        Ok(())
    }
}

fn api_error(status: StatusCode, response: Response) -> AppError {
    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status.canonical_reason().map(str::to_string).unwrap_or_else(|| body.trim().to_string())
        });
    AppError::GitHubApi { status: status.as_u16(), message }
}
