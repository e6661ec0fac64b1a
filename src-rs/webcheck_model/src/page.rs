use crate::scope::IdentifierScope;

/// An imported page: its URI and the elements it declares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    uri: String,
    elements: IdentifierScope,
}

impl Page {
    /// Creates a new page.
    #[must_use]
    pub fn new(uri: impl Into<String>, elements: IdentifierScope) -> Self {
        Self {
            uri: uri.into(),
            elements,
        }
    }

    /// Returns the page URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the elements declared by the page.
    #[must_use]
    pub const fn elements(&self) -> &IdentifierScope {
        &self.elements
    }
}
