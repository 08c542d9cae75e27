//! Named-input port definition.

/// Source of named string inputs (action inputs, CLI flags).
///
/// Implementations return the raw value; trimming and empty-value handling
/// happen when the inputs are parsed.
pub trait InputSource {
    /// Look up the raw value of an input by its declared name.
    fn get(&self, name: &str) -> Option<String>;
}

/// Layers two sources: values from `primary` win, `fallback` fills the gaps.
#[derive(Debug, Clone)]
pub struct LayeredInputs<P, F> {
    primary: P,
    fallback: F,
}

impl<P: InputSource, F: InputSource> LayeredInputs<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: InputSource, F: InputSource> InputSource for LayeredInputs<P, F> {
    fn get(&self, name: &str) -> Option<String> {
        self.primary.get(name).or_else(|| self.fallback.get(name))
    }
}
