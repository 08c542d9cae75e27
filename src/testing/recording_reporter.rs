use std::sync::{Arc, Mutex};

use crate::ports::WorkflowReporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(String),
    Warning(String),
    Failure(String),
}

/// Reporter that keeps every line for assertions.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    pub reports: Arc<Mutex<Vec<Report>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.reports()
            .into_iter()
            .filter_map(|r| match r {
                Report::Info(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.reports()
            .into_iter()
            .filter_map(|r| match r {
                Report::Warning(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.reports()
            .into_iter()
            .filter_map(|r| match r {
                Report::Failure(line) => Some(line),
                _ => None,
            })
            .collect()
    }
}

impl WorkflowReporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.reports.lock().unwrap().push(Report::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.reports.lock().unwrap().push(Report::Warning(message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.reports.lock().unwrap().push(Report::Failure(message.to_string()));
    }
}
