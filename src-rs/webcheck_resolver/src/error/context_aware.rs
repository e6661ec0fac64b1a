use webcheck_model::{DataProviderName, ElementName, PageName, StepName};
use webcheck_shared::error::{ContextKey, ErrorContext};

/// The lookups that can fail during resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextAwareErrorKind {
    /// An element reference names nothing in the enclosing step's scope.
    #[error("Unknown element \"{element}\"")]
    UnknownElement {
        /// The element that was referenced.
        element: ElementName,
    },
    /// A page exists but declares no such element.
    #[error("Unknown page element \"{element}\" in page \"{page}\"")]
    UnknownPageElement {
        /// The page that was searched.
        page: PageName,
        /// The element that was referenced.
        element: ElementName,
    },
    /// No page is imported under this name.
    #[error("Unknown page \"{page}\"")]
    UnknownPage {
        /// The page that was referenced.
        page: PageName,
    },
    /// No step is available under this name.
    #[error("Unknown step \"{step}\"")]
    UnknownStep {
        /// The step that was imported.
        step: StepName,
    },
    /// No data provider is available under this name.
    #[error("Unknown data provider \"{data_provider}\"")]
    UnknownDataProvider {
        /// The data provider that was imported.
        data_provider: DataProviderName,
    },
}

/// A failed lookup, along with where in the test it happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ContextAwareError {
    kind: ContextAwareErrorKind,
    context: ErrorContext,
}

impl ContextAwareError {
    /// Creates a new error with an empty context.
    #[must_use]
    pub fn new(kind: ContextAwareErrorKind) -> Self {
        Self {
            kind,
            context: ErrorContext::new(),
        }
    }

    /// Returns the kind of lookup that failed.
    #[must_use]
    pub const fn kind(&self) -> &ContextAwareErrorKind {
        &self.kind
    }

    /// Returns the context recorded so far.
    #[must_use]
    pub const fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Returns this error with `key` set to `value` in its context.
    #[must_use]
    pub fn with_context(mut self, key: ContextKey, value: impl Into<String>) -> Self {
        self.context = self.context.with(key, value);
        self
    }
}
