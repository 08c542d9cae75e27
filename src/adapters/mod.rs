pub mod action_context;
pub mod action_inputs;
pub mod actions_reporter;
pub mod github_http;
pub mod workflow_output;
