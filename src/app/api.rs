//! API Facade for the application.
//!
//! Glues input loading, context detection and client construction to the
//! sweep command.

use chrono::Utc;

use crate::adapters::action_context::load_invocation_context;
use crate::adapters::github_http::HttpGitHubClient;
use crate::adapters::workflow_output::write_sweep_outputs;
use crate::app::{AppContext, commands::sweep};
use crate::domain::{GitHubApiConfig, SweepInputs};
use crate::ports::{InputSource, WorkflowReporter};

pub use crate::domain::{AppError, BranchAction, BranchReport, RunStatus, SweepOutcome};

/// Runner-level settings that are not action inputs.
#[derive(Debug, Clone, Default)]
pub struct RunnerSettings {
    /// `owner/repo` replacing `GITHUB_REPOSITORY`.
    pub repo: Option<String>,
    /// API root replacing `GITHUB_API_URL`.
    pub api_url: Option<String>,
}

/// Run a sweep against the real GitHub API.
///
/// Inputs are validated before anything else; a missing token fails here
/// without touching the network.
pub fn sweep(
    source: &impl InputSource,
    settings: &RunnerSettings,
    reporter: &impl WorkflowReporter,
) -> Result<SweepOutcome, AppError> {
    let inputs = SweepInputs::load(source)?;
    tracing::debug!(?inputs, "loaded inputs");

    let invocation = load_invocation_context(settings.repo.as_deref())?;
    tracing::debug!(?invocation, "resolved invocation context");

    let config = resolve_api_config(settings.api_url.as_deref())?;
    let github = HttpGitHubClient::new(&inputs.github_token, &config)?;

    let ctx = AppContext::new(github, reporter);
    let outcome = sweep::execute(&ctx, &inputs, &invocation, Utc::now())?;

    write_sweep_outputs(&outcome)?;
    Ok(outcome)
}

/// Explicit override, then `GITHUB_API_URL`, then api.github.com.
fn resolve_api_config(api_url: Option<&str>) -> Result<GitHubApiConfig, AppError> {
    let from_env = std::env::var("GITHUB_API_URL").ok().filter(|v| !v.trim().is_empty());
    match api_url.map(str::to_string).or(from_env) {
        Some(url) => GitHubApiConfig::with_api_url(&url),
        None => Ok(GitHubApiConfig::default()),
    }
}
