//! Error handling for webcheck reference resolution.
//!
//! Every resolver returns a [`ResolutionError`] on failure. Most failures are
//! lookups that came back empty ([`ContextAwareError`]); these pick up context
//! (the failing source text, the step name and the test name) as they travel
//! outwards. An import cycle ([`CircularImportError`]) is reported as is.

mod circular;
mod context_aware;

pub use circular::CircularImportError;
pub use context_aware::{ContextAwareError, ContextAwareErrorKind};

use webcheck_model::{DataProviderName, ElementName, PageName, StepName};
use webcheck_shared::error::{AsWebcheckError, ContextKey, ErrorContext, Note};

/// Represents an error that stopped resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// A name could not be found.
    #[error(transparent)]
    ContextAware(#[from] ContextAwareError),
    /// A step import chain leads back to itself.
    #[error(transparent)]
    CircularImport(#[from] CircularImportError),
}

impl ResolutionError {
    /// Creates an error for an element missing from a step's scope.
    #[must_use]
    pub fn unknown_element(element: ElementName) -> Self {
        Self::context_aware(ContextAwareErrorKind::UnknownElement { element })
    }

    /// Creates an error for an element missing from a page.
    #[must_use]
    pub fn unknown_page_element(page: PageName, element: ElementName) -> Self {
        Self::context_aware(ContextAwareErrorKind::UnknownPageElement { page, element })
    }

    /// Creates an error for a page the page lookup does not know.
    #[must_use]
    pub fn unknown_page(page: PageName) -> Self {
        Self::context_aware(ContextAwareErrorKind::UnknownPage { page })
    }

    /// Creates an error for a step the step lookup does not know.
    #[must_use]
    pub fn unknown_step(step: StepName) -> Self {
        Self::context_aware(ContextAwareErrorKind::UnknownStep { step })
    }

    /// Creates an error for a data provider the data set lookup does not know.
    #[must_use]
    pub fn unknown_data_provider(data_provider: DataProviderName) -> Self {
        let kind = ContextAwareErrorKind::UnknownDataProvider { data_provider };
        Self::context_aware(kind)
    }

    /// Creates an error for a step import that was reached a second time.
    ///
    /// `chain` is the list of imports from the first visit of `step` up to and
    /// including the repeated one.
    #[must_use]
    pub fn circular_import(step: StepName, chain: Vec<StepName>) -> Self {
        CircularImportError::new(step, chain).into()
    }

    fn context_aware(kind: ContextAwareErrorKind) -> Self {
        Self::ContextAware(ContextAwareError::new(kind))
    }

    /// Returns this error with `key` set to `value` in its context.
    ///
    /// Circular import errors do not carry context and are returned unchanged.
    #[must_use]
    pub fn with_context(self, key: ContextKey, value: impl Into<String>) -> Self {
        match self {
            Self::ContextAware(error) => Self::ContextAware(error.with_context(key, value)),
            Self::CircularImport(_) => self,
        }
    }

    /// Returns the kind of lookup that failed, unless this is a circular import.
    #[must_use]
    pub const fn kind(&self) -> Option<&ContextAwareErrorKind> {
        match self {
            Self::ContextAware(error) => Some(error.kind()),
            Self::CircularImport(_) => None,
        }
    }

    /// Returns the context the error picked up, unless this is a circular import.
    #[must_use]
    pub const fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::ContextAware(error) => Some(error.context()),
            Self::CircularImport(_) => None,
        }
    }
}

impl AsWebcheckError for ResolutionError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> ErrorContext {
        match self {
            Self::ContextAware(error) => error.context().clone(),
            Self::CircularImport(_) => ErrorContext::new(),
        }
    }

    fn notes(&self) -> Vec<Note> {
        match self {
            Self::ContextAware(_) => vec![],
            Self::CircularImport(error) => error.notes(),
        }
    }
}
