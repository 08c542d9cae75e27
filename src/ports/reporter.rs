/// Sink for progress lines, warnings and failures.
pub trait WorkflowReporter {
    /// Informational progress line.
    fn info(&self, message: &str);

    /// Non-fatal problem; the run still succeeds.
    fn warning(&self, message: &str);

    /// Marks the run as failed without stopping it.
    fn failure(&self, message: &str);
}

impl<R: WorkflowReporter + ?Sized> WorkflowReporter for &R {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warning(&self, message: &str) {
        (**self).warning(message);
    }

    fn failure(&self, message: &str) {
        (**self).failure(message);
    }
}
