//! Shared testing utilities for branch-sweep CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the runner sets that must not leak into tests.
const RUNNER_VARS: [&str; 6] = [
    "GITHUB_REPOSITORY",
    "GITHUB_EVENT_PATH",
    "GITHUB_API_URL",
    "GITHUB_OUTPUT",
    "RUNNER_DEBUG",
    "RUST_LOG",
];

const INPUT_VARS: [&str; 10] = [
    "INPUT_GITHUB_TOKEN",
    "INPUT_NUMBERS",
    "INPUT_OWNER",
    "INPUT_REPOSITORY",
    "INPUT_BRANCHES",
    "INPUT_PREFIX",
    "INPUT_SUFFIX",
    "INPUT_DRY_RUN",
    "INPUT_SOFT_FAIL",
    "INPUT_DAYS",
];

/// Testing harness providing an isolated runner environment.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    api_url: String,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment talking to `api_url`.
    pub fn new(api_url: impl Into<String>) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root, api_url: api_url.into() }
    }

    /// Build a command for the compiled binary, scrubbed of runner state and
    /// pointed at the mock API for `octo-org/widgets`.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("branch-sweep").expect("Failed to locate binary");
        for var in RUNNER_VARS.iter().chain(INPUT_VARS.iter()) {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.root.path())
            .env("GITHUB_REPOSITORY", "octo-org/widgets")
            .env("GITHUB_API_URL", &self.api_url);
        cmd
    }

    /// Write an event payload and return its path.
    pub fn write_event(&self, json: &str) -> PathBuf {
        let path = self.root.path().join("event.json");
        fs::write(&path, json).expect("Failed to write event payload");
        path
    }

    /// Path of an (initially empty) `GITHUB_OUTPUT` file.
    pub fn output_file(&self) -> PathBuf {
        let path = self.root.path().join("github_output");
        fs::write(&path, "").expect("Failed to create output file");
        path
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read file")
    }
}
