//! Invocation context detection from the Actions runner environment.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, InvocationContext};

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    repository: Option<PayloadRepository>,
}

#[derive(Debug, Deserialize)]
struct PayloadRepository {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    owner: Option<PayloadOwner>,
}

#[derive(Debug, Deserialize)]
struct PayloadOwner {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    login: Option<String>,
}

/// Resolve the context from `GITHUB_REPOSITORY` and `GITHUB_EVENT_PATH`.
///
/// `repo_override` (an `owner/repo` slug) replaces `GITHUB_REPOSITORY`.
pub fn load_invocation_context(repo_override: Option<&str>) -> Result<InvocationContext, AppError> {
    let slug = match repo_override {
        Some(slug) => slug.to_string(),
        None => std::env::var("GITHUB_REPOSITORY").map_err(|_| {
            AppError::Context("GITHUB_REPOSITORY is not set; pass --repo owner/repo".into())
        })?,
    };
    let context = InvocationContext::from_slug(&slug)?;

    match std::env::var_os("GITHUB_EVENT_PATH") {
        Some(path) if !path.is_empty() => apply_event_payload(context, Path::new(&path)),
        _ => Ok(context),
    }
}

/// Overlay the repository named in the event payload onto `context`.
pub fn apply_event_payload(
    context: InvocationContext,
    path: &Path,
) -> Result<InvocationContext, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::Context(format!("Failed to read event payload {}: {}", path.display(), e))
    })?;
    let payload: EventPayload = serde_json::from_str(&content).map_err(|e| AppError::ParseError {
        what: format!("event payload {}", path.display()),
        details: e.to_string(),
    })?;

    let Some(repository) = payload.repository else {
        tracing::debug!("event payload has no repository; using GITHUB_REPOSITORY");
        return Ok(context);
    };

    // Push payloads carry owner.name; most other events only carry owner.login.
    let owner = repository.owner.and_then(|o| o.name.or(o.login));
    Ok(context.with_payload(owner, repository.name))
}
