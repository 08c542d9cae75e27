//! Reporter that speaks the GitHub Actions workflow-command protocol.
//!
//! Progress goes to stdout as plain lines. Warnings and failures are emitted
//! as `::warning::` / `::error::` commands so the runner annotates the job.

use crate::ports::WorkflowReporter;

#[derive(Debug, Clone, Copy, Default)]
pub struct ActionsReporter;

impl ActionsReporter {
    pub fn new() -> Self {
        Self
    }
}

impl WorkflowReporter for ActionsReporter {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        println!("{}", workflow_command("warning", message));
    }

    fn failure(&self, message: &str) {
        println!("{}", workflow_command("error", message));
    }
}

/// Render `::<command>::<message>` with the message escaped.
pub fn workflow_command(command: &str, message: &str) -> String {
    format!("::{}::{}", command, escape_data(message))
}

fn escape_data(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
