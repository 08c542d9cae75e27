//! Workflow inputs, parsed once at load time.

use crate::domain::AppError;
use crate::ports::InputSource;

pub const INPUT_GITHUB_TOKEN: &str = "github_token";
pub const INPUT_NUMBERS: &str = "numbers";
pub const INPUT_OWNER: &str = "owner";
pub const INPUT_REPOSITORY: &str = "repository";
pub const INPUT_BRANCHES: &str = "branches";
pub const INPUT_PREFIX: &str = "prefix";
pub const INPUT_SUFFIX: &str = "suffix";
pub const INPUT_DRY_RUN: &str = "dry_run";
pub const INPUT_SOFT_FAIL: &str = "soft_fail";
pub const INPUT_DAYS: &str = "days";

/// Parsed configuration for one sweep.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SweepInputs {
    /// Token used to authenticate against the GitHub API.
    pub github_token: String,
    /// Pull request numbers whose head branches become candidates.
    pub numbers: Vec<u64>,
    /// Override for the deletion target's owner.
    pub owner: Option<String>,
    /// Override for the deletion target's repository.
    pub repository: Option<String>,
    /// Literal branch names.
    pub branches: Vec<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Log deletions without issuing them.
    pub dry_run: bool,
    /// Report deletion failures as warnings instead of failing the run.
    pub soft_fail: bool,
    /// Age threshold in days; `None` disables age filtering.
    pub days: Option<u32>,
}

impl std::fmt::Debug for SweepInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepInputs")
            .field("github_token", &"[REDACTED]")
            .field("numbers", &self.numbers)
            .field("owner", &self.owner)
            .field("repository", &self.repository)
            .field("branches", &self.branches)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("dry_run", &self.dry_run)
            .field("soft_fail", &self.soft_fail)
            .field("days", &self.days)
            .finish()
    }
}

impl SweepInputs {
    /// Read and validate every input from `source`.
    pub fn load(source: &impl InputSource) -> Result<Self, AppError> {
        let github_token = read(source, INPUT_GITHUB_TOKEN)
            .ok_or_else(|| AppError::MissingInput(INPUT_GITHUB_TOKEN.to_string()))?;

        let numbers = split_list(read(source, INPUT_NUMBERS).as_deref())
            .into_iter()
            .map(|raw| parse_pull_number(&raw))
            .collect::<Result<Vec<_>, _>>()?;

        let days = read(source, INPUT_DAYS)
            .map(|raw| {
                raw.parse::<u32>().map_err(|_| {
                    AppError::invalid_input(
                        INPUT_DAYS,
                        format!("'{}' is not a non-negative whole number of days", raw),
                    )
                })
            })
            .transpose()?;

        Ok(Self {
            github_token,
            numbers,
            owner: read(source, INPUT_OWNER),
            repository: read(source, INPUT_REPOSITORY),
            branches: split_list(read(source, INPUT_BRANCHES).as_deref()),
            prefix: read(source, INPUT_PREFIX),
            suffix: read(source, INPUT_SUFFIX),
            dry_run: read_bool(source, INPUT_DRY_RUN)?,
            soft_fail: read_bool(source, INPUT_SOFT_FAIL)?,
            days,
        })
    }
}

/// Trimmed value of an input; empty values count as absent.
fn read(source: &impl InputSource, name: &str) -> Option<String> {
    source.get(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn read_bool(source: &impl InputSource, name: &str) -> Result<bool, AppError> {
    match read(source, name) {
        None => Ok(false),
        Some(raw) => parse_bool(&raw).ok_or_else(|| {
            AppError::invalid_input(
                name,
                format!("'{}' is not a boolean (expected true|True|TRUE|false|False|FALSE)", raw),
            )
        }),
    }
}

/// Booleans accepted by the YAML 1.2 core schema.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
    })
    .unwrap_or_default()
}

fn parse_pull_number(raw: &str) -> Result<u64, AppError> {
    raw.trim_start_matches('#').parse::<u64>().ok().filter(|n| *n > 0).ok_or_else(|| {
        AppError::invalid_input(INPUT_NUMBERS, format!("'{}' is not a pull request number", raw))
    })
}
