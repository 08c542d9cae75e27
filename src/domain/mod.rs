pub mod candidates;
pub mod context;
pub mod error;
pub mod github_api_config;
pub mod inputs;
pub mod outcome;
pub mod threshold;

pub use candidates::{decorate, merge_candidates};
pub use context::InvocationContext;
pub use error::AppError;
pub use github_api_config::GitHubApiConfig;
pub use inputs::SweepInputs;
pub use outcome::{BranchAction, BranchReport, RunStatus, SweepOutcome};
pub use threshold::AgeThreshold;
