//! Branch cleanup workflow.
//!
//! Resolves candidates from explicit names and pull requests, filters them by
//! last-commit age and deletes the survivors one at a time.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::app::AppContext;
use crate::domain::{
    AgeThreshold, AppError, BranchAction, InvocationContext, SweepInputs, SweepOutcome, decorate,
    merge_candidates,
};
use crate::ports::{GitHubPort, WorkflowReporter};

pub const COMPLETION_MESSAGE: &str = "Ending the branch deletion...";

/// Run one sweep.
///
/// Pull request and branch lookup failures abort the run and are returned as
/// errors; branches deleted before the abort stay deleted. Deletion failures
/// are recorded in the outcome and the loop moves on to the next candidate.
pub fn execute<G, R>(
    ctx: &AppContext<G, R>,
    inputs: &SweepInputs,
    invocation: &InvocationContext,
    now: DateTime<Utc>,
) -> Result<SweepOutcome, AppError>
where
    G: GitHubPort,
    R: WorkflowReporter,
{
    let result = sweep(ctx, inputs, invocation, now);
    ctx.reporter().info(COMPLETION_MESSAGE);
    result
}

fn sweep<G, R>(
    ctx: &AppContext<G, R>,
    inputs: &SweepInputs,
    invocation: &InvocationContext,
    now: DateTime<Utc>,
) -> Result<SweepOutcome, AppError>
where
    G: GitHubPort,
    R: WorkflowReporter,
{
    let github = ctx.github();
    let reporter = ctx.reporter();

    let target_owner = inputs.owner.as_deref().unwrap_or(&invocation.repo_owner);
    let target_repo = inputs.repository.as_deref().unwrap_or(&invocation.repo_name);

    let threshold = inputs.days.map(|days| AgeThreshold::from_days(now, days)).transpose()?;
    if let Some(threshold) = threshold {
        reporter.info(&format!(
            "Branches with commits older than {} will be deleted.",
            format_timestamp(threshold.cutoff())
        ));
    }

    let mut pull_request_heads = Vec::with_capacity(inputs.numbers.len());
    for &number in &inputs.numbers {
        let pull =
            github.get_pull_request(&invocation.repo_owner, &invocation.repo_name, number)?;
        tracing::debug!(number = pull.number, head = %pull.head_ref, "resolved pull request head");
        pull_request_heads.push(pull.head_ref);
    }

    let candidates = merge_candidates(&inputs.branches, pull_request_heads);
    let mut outcome = SweepOutcome::default();

    for candidate in &candidates {
        let branch = decorate(candidate, inputs.prefix.as_deref(), inputs.suffix.as_deref());

        if let Some(threshold) = threshold {
            // Age lookups always target the repository named by the event payload.
            let info =
                github.get_branch(&invocation.payload_owner, &invocation.payload_repo, &branch)?;
            tracing::debug!(
                branch = %info.name,
                last_commit_at = %info.last_commit_at,
                "fetched branch"
            );
            if threshold.is_recent(info.last_commit_at) {
                reporter.info(&format!(
                    "Branch \"{}\" last commit date is {}. It does not meet the threshold and will not be deleted.",
                    branch,
                    format_timestamp(info.last_commit_at)
                ));
                outcome.record(branch, BranchAction::SkippedRecent {
                    last_commit_at: info.last_commit_at,
                });
                continue;
            }
        }

        reporter.info(&format!(
            "==> Deleting \"{}/{}/{}\" branch",
            target_owner, target_repo, branch
        ));

        if inputs.dry_run {
            outcome.record(branch, BranchAction::WouldDelete);
            continue;
        }

        match github.delete_ref(target_owner, target_repo, &format!("heads/{}", branch)) {
            Ok(()) => outcome.record(branch, BranchAction::Deleted),
            Err(err) => {
                let message = err.to_string();
                if inputs.soft_fail {
                    reporter.warning(&message);
                } else {
                    reporter.failure(&message);
                }
                outcome.record(branch, BranchAction::Failed { message, soft: inputs.soft_fail });
            }
        }
    }

    Ok(outcome)
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
