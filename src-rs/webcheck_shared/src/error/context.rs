use std::fmt;

use indexmap::IndexMap;

/// The kinds of context an error can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    /// The source text of the action or assertion that failed.
    Content,
    /// The name of the step that failed.
    StepName,
    /// The name of the test that failed.
    TestName,
}

impl ContextKey {
    /// Returns the key as it is displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::StepName => "stepName",
            Self::TestName => "testName",
        }
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context accumulated by an error as it propagates, in the order it was added.
///
/// Adding context never mutates an existing map: [`ErrorContext::with`]
/// consumes the map and returns the extended one. Setting a key that is
/// already present replaces its value and keeps its position.
///
/// Two contexts are equal when they hold the same entries, whatever their order.
///
/// # Examples
///
/// ```rust
/// use webcheck_shared::error::{ContextKey, ErrorContext};
///
/// let context = ErrorContext::new()
///     .with(ContextKey::Content, "click $elements.button")
///     .with(ContextKey::StepName, "step name");
///
/// assert_eq!(context.get(ContextKey::StepName), Some("step name"));
/// assert_eq!(context.get(ContextKey::TestName), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext(IndexMap<ContextKey, String>);

impl ErrorContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns this context with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: ContextKey, value: impl Into<String>) -> Self {
        self.0.insert(key, value.into());
        self
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: ContextKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Iterates over the entries in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (ContextKey, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no context was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ErrorContext {
    type Item = (&'a ContextKey, &'a String);
    type IntoIter = indexmap::map::Iter<'a, ContextKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
