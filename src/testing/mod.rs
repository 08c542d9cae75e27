mod env_var_guard;
mod fake_github;
mod map_inputs;
mod recording_reporter;

pub use env_var_guard::EnvVarGuard;
pub use fake_github::{FakeGitHub, GitHubCall};
pub use map_inputs::MapInputs;
pub use recording_reporter::{RecordingReporter, Report};
