use webcheck_model::StepName;
use webcheck_shared::error::Note;

/// A step import that was reached a second time while resolving a chain of
/// imports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Circular step import \"{step}\"")]
pub struct CircularImportError {
    step: StepName,
    chain: Vec<StepName>,
}

impl CircularImportError {
    /// Creates a new circular import error.
    #[must_use]
    pub const fn new(step: StepName, chain: Vec<StepName>) -> Self {
        Self { step, chain }
    }

    /// Returns the step that was imported twice.
    #[must_use]
    pub const fn step(&self) -> &StepName {
        &self.step
    }

    /// Returns the imports forming the cycle, starting and ending with [`Self::step`].
    #[must_use]
    pub fn chain(&self) -> &[StepName] {
        &self.chain
    }

    /// Returns a note describing the import chain, if one was recorded.
    #[must_use]
    pub fn notes(&self) -> Vec<Note> {
        if self.chain.is_empty() {
            return vec![];
        }

        let names: Vec<_> = self.chain.iter().map(StepName::as_str).collect();
        vec![Note::Info(format!("import chain: {}", names.join(" -> ")))]
    }
}
