//! CLI Adapter.
//!
//! Every action input has a matching flag; flags win over `INPUT_*`
//! environment variables so the binary also runs outside a workflow.

use std::collections::HashMap;

use clap::Parser;

use crate::adapters::action_inputs::EnvInputs;
use crate::adapters::actions_reporter::ActionsReporter;
use crate::app::api::{self, RunnerSettings};
use crate::domain::inputs::{
    INPUT_BRANCHES, INPUT_DAYS, INPUT_DRY_RUN, INPUT_GITHUB_TOKEN, INPUT_NUMBERS, INPUT_OWNER,
    INPUT_PREFIX, INPUT_REPOSITORY, INPUT_SOFT_FAIL, INPUT_SUFFIX,
};
use crate::domain::{AppError, RunStatus};
use crate::ports::{InputSource, LayeredInputs, WorkflowReporter};

#[derive(Parser, Debug, Default)]
#[command(name = "branch-sweep")]
#[command(version)]
#[command(
    about = "Delete branches by name, by pull request, or by last-commit age",
    long_about = None
)]
pub struct Cli {
    /// Token used to call the GitHub API
    #[arg(long)]
    github_token: Option<String>,
    /// Comma-separated pull request numbers whose head branches are deleted
    #[arg(long)]
    numbers: Option<String>,
    /// Owner of the repository to delete from (defaults to the current repository)
    #[arg(long)]
    owner: Option<String>,
    /// Repository to delete from (defaults to the current repository)
    #[arg(long)]
    repository: Option<String>,
    /// Comma-separated branch names to delete
    #[arg(long)]
    branches: Option<String>,
    /// Prepended to every branch name
    #[arg(long)]
    prefix: Option<String>,
    /// Appended to every branch name
    #[arg(long)]
    suffix: Option<String>,
    /// Log what would be deleted without deleting
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    dry_run: Option<String>,
    /// Report deletion failures as warnings
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    soft_fail: Option<String>,
    /// Only delete branches whose last commit is older than this many days
    #[arg(long)]
    days: Option<String>,
    /// Repository the workflow runs in, as owner/repo (defaults to GITHUB_REPOSITORY)
    #[arg(long)]
    repo: Option<String>,
    /// GitHub API root (defaults to GITHUB_API_URL, then https://api.github.com)
    #[arg(long)]
    api_url: Option<String>,
}

impl Cli {
    /// Flag values keyed by input name.
    fn flag_inputs(&self) -> FlagInputs {
        let pairs = [
            (INPUT_GITHUB_TOKEN, &self.github_token),
            (INPUT_NUMBERS, &self.numbers),
            (INPUT_OWNER, &self.owner),
            (INPUT_REPOSITORY, &self.repository),
            (INPUT_BRANCHES, &self.branches),
            (INPUT_PREFIX, &self.prefix),
            (INPUT_SUFFIX, &self.suffix),
            (INPUT_DRY_RUN, &self.dry_run),
            (INPUT_SOFT_FAIL, &self.soft_fail),
            (INPUT_DAYS, &self.days),
        ];
        FlagInputs(
            pairs
                .into_iter()
                .filter_map(|(name, value)| value.clone().map(|v| (name.to_string(), v)))
                .collect(),
        )
    }

    fn runner_settings(&self) -> RunnerSettings {
        RunnerSettings { repo: self.repo.clone(), api_url: self.api_url.clone() }
    }
}

#[derive(Debug, Default)]
struct FlagInputs(HashMap<String, String>);

impl InputSource for FlagInputs {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let reporter = ActionsReporter::new();

    let exit_code = execute(&cli, &reporter);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn execute(cli: &Cli, reporter: &impl WorkflowReporter) -> i32 {
    let source = LayeredInputs::new(cli.flag_inputs(), EnvInputs::new());
    let result: Result<RunStatus, AppError> =
        api::sweep(&source, &cli.runner_settings(), reporter).map(|outcome| outcome.status());

    match result {
        Ok(RunStatus::Failed) => 1,
        Ok(RunStatus::Succeeded | RunStatus::SucceededWithWarnings) => 0,
        Err(e) => {
            reporter.failure(&e.to_string());
            1
        }
    }
}
