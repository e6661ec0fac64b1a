//! Page provider reference implementation
//!
//! This module provides an in-memory implementation of the `PageLookup` trait
//! required by `webcheck_resolver`.

use indexmap::IndexMap;

use webcheck_model::{Page, PageName};
use webcheck_resolver::PageLookup;

/// Pages held in memory, keyed by the name they are imported under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageProvider {
    pages: IndexMap<PageName, Page>,
}

impl PageProvider {
    /// Creates a provider with no pages.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: IndexMap::new(),
        }
    }

    /// Creates a provider with no pages, for tests that import none.
    #[must_use]
    pub fn empty() -> Self {
        Self::new()
    }

    /// Returns this provider with `page` imported as `name`.
    #[must_use]
    pub fn with_page(mut self, name: impl Into<PageName>, page: Page) -> Self {
        self.pages.insert(name.into(), page);
        self
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the provider holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl FromIterator<(PageName, Page)> for PageProvider {
    fn from_iter<I: IntoIterator<Item = (PageName, Page)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

impl PageLookup for PageProvider {
    fn find_page(&self, name: &PageName) -> Option<Page> {
        let page = self.pages.get(name).cloned();
        if page.is_none() {
            tracing::debug!(page = %name, "page not found");
        }
        page
    }
}
