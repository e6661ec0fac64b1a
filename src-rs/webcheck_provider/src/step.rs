use indexmap::IndexMap;

use webcheck_model::{Step, StepName};
use webcheck_resolver::StepLookup;

/// Importable steps held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepProvider {
    steps: IndexMap<StepName, Step>,
}

impl StepProvider {
    /// Creates a provider with no steps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: IndexMap::new(),
        }
    }

    /// Creates a provider with no steps, for tests that import none.
    #[must_use]
    pub fn empty() -> Self {
        Self::new()
    }

    /// Returns this provider with `step` importable as `name`.
    #[must_use]
    pub fn with_step(mut self, name: impl Into<StepName>, step: Step) -> Self {
        self.steps.insert(name.into(), step);
        self
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the provider holds no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<(StepName, Step)> for StepProvider {
    fn from_iter<I: IntoIterator<Item = (StepName, Step)>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl StepLookup for StepProvider {
    fn find_step(&self, name: &StepName) -> Option<Step> {
        self.steps.get(name).cloned()
    }
}
