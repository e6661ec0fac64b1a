//! Errors for webcheck

mod context;
mod note;
mod traits;

use std::fmt;

pub use context::{ContextKey, ErrorContext};
pub use note::Note;
pub use traits::AsWebcheckError;

/// Unified error representation for webcheck
///
/// This struct represents errors in a format suitable for display to users.
/// It holds a human-readable message, the context the error picked up while
/// propagating, and any supplementary notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebcheckError {
    /// Human-readable error message
    message: String,
    /// Where the error happened, innermost first
    context: ErrorContext,
    /// Supplementary notes
    notes: Vec<Note>,
}

impl WebcheckError {
    /// Creates a new `WebcheckError` from an error that implements `AsWebcheckError`
    ///
    /// # Arguments
    ///
    /// * `error` - The error that implements `AsWebcheckError`
    ///
    /// # Returns
    ///
    /// Returns a new `WebcheckError` with the error's message, context and notes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use webcheck_shared::error::{AsWebcheckError, ContextKey, ErrorContext, WebcheckError};
    ///
    /// struct MissingThing(String);
    ///
    /// impl AsWebcheckError for MissingThing {
    ///     fn message(&self) -> String {
    ///         format!("Unknown thing \"{}\"", self.0)
    ///     }
    ///
    ///     fn context(&self) -> ErrorContext {
    ///         ErrorContext::new().with(ContextKey::TestName, "test name")
    ///     }
    /// }
    ///
    /// let error = WebcheckError::from_error(&MissingThing("x".to_string()));
    /// assert_eq!(error.message(), "Unknown thing \"x\"");
    /// assert_eq!(error.context().get(ContextKey::TestName), Some("test name"));
    /// ```
    pub fn from_error(error: &impl AsWebcheckError) -> Self {
        Self {
            message: error.message(),
            context: error.context(),
            notes: error.notes(),
        }
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context the error was raised in
    #[must_use]
    pub const fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Returns the supplementary notes
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

impl fmt::Display for WebcheckError {
    /// Formats the message, followed by one line per context entry and note.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for (key, value) in &self.context {
            write!(f, "\n  {key}: {value}")?;
        }
        for note in &self.notes {
            write!(f, "\n  = {note}")?;
        }
        Ok(())
    }
}
