use crate::error::{ErrorContext, Note};

/// Trait for types that can be converted to webcheck error messages.
///
/// This trait provides a standardized interface for error types to expose
/// their message and the context they were raised in, so that every crate's
/// errors are reported the same way.
pub trait AsWebcheckError {
    /// Returns the primary error message.
    ///
    /// This should be a concise description of what went wrong, such as
    /// `Unknown page "home"`.
    fn message(&self) -> String;

    /// Returns the context the error was raised in.
    ///
    /// Returns an empty context if none was recorded.
    fn context(&self) -> ErrorContext {
        ErrorContext::new()
    }

    /// Returns supplementary notes, such as suggestions for a fix.
    fn notes(&self) -> Vec<Note> {
        vec![]
    }
}
