use crate::name::PageName;

/// The browser a test runs in and the URL it starts at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Configuration {
    browser: String,
    url: String,
}

impl Configuration {
    /// Creates a new configuration.
    #[must_use]
    pub fn new(browser: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            browser: browser.into(),
            url: url.into(),
        }
    }

    /// Returns the browser identifier.
    #[must_use]
    pub fn browser(&self) -> &str {
        &self.browser
    }

    /// Returns the URL, which may still be a [`PageUrlReference`].
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns this configuration starting at `url` instead.
    #[must_use]
    pub fn with_url(self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..self
        }
    }
}

/// A `page_import_name.url` reference to the URI of an imported page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageUrlReference {
    page: PageName,
}

impl PageUrlReference {
    /// The property a page URL reference reads.
    pub const PROPERTY: &'static str = "url";

    /// Parses `text` as a page URL reference.
    ///
    /// The text must be exactly `<import_name>.url`, with a non-empty import
    /// name that contains no `.`.
    ///
    /// # Example
    ///
    /// ```
    /// use webcheck_model::{PageName, PageUrlReference};
    ///
    /// let reference = PageUrlReference::parse("page_import_name.url").unwrap();
    /// assert_eq!(reference.page(), &PageName::new("page_import_name"));
    ///
    /// assert!(PageUrlReference::parse("http://example.com/").is_none());
    /// assert!(PageUrlReference::parse(".url").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let (page, property) = text.split_once('.')?;
        if page.is_empty() || property != Self::PROPERTY {
            return None;
        }
        Some(Self {
            page: PageName::new(page),
        })
    }

    /// Returns the import name of the page.
    #[must_use]
    pub const fn page(&self) -> &PageName {
        &self.page
    }
}
