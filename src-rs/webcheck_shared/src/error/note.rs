use std::fmt;

/// Supplementary information attached to an error for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    /// Additional information about the error.
    Info(String),

    /// A suggestion for resolving the error.
    Help(String),
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info(text) => write!(f, "note: {text}"),
            Self::Help(text) => write!(f, "help: {text}"),
        }
    }
}
