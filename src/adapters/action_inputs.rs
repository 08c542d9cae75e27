//! Action inputs read from `INPUT_<NAME>` environment variables.

use crate::ports::InputSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputs;

impl EnvInputs {
    pub fn new() -> Self {
        Self
    }
}

/// Environment variable the runner uses for an input name.
pub fn input_env_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

impl InputSource for EnvInputs {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(input_env_var(name)).ok()
    }
}
