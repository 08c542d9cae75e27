use std::collections::HashMap;

use crate::ports::InputSource;

/// In-memory input source.
#[derive(Debug, Clone, Default)]
pub struct MapInputs {
    values: HashMap<String, String>,
}

impl MapInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

impl InputSource for MapInputs {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
