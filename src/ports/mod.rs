mod github;
mod input_source;
mod reporter;

pub use github::{BranchInfo, GitHubPort, PullRequestInfo};
pub use input_source::{InputSource, LayeredInputs};
pub use reporter::WorkflowReporter;
