#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Webcheck Resolver
//!
//! This crate links a parsed webcheck test specification, replacing every
//! symbolic reference with the entity it names.
//!
//! # Overview
//!
//! Resolution works on the model tree of `webcheck_model`, one level at a
//! time:
//!
//! - **Suites and tests**: each test's configuration, then each of its steps
//! - **Steps**: step imports, data provider imports, then the step body
//! - **Actions and assertions**: the identifiers and values they carry
//! - **Identifiers and values**: page element, element and attribute
//!   references
//!
//! Each level has its own `resolve_*` function. [`Resolver`] bundles the three
//! lookups needed for whole tests and suites.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use webcheck_model::{
//!     Action, Configuration, DataProviderName, DataSetCollection, Identifier, IdentifierScope,
//!     InteractionVerb, Page, PageName, Step, StepName, Test,
//! };
//! use webcheck_resolver::{DataSetLookup, PageLookup, Resolver, StepLookup};
//!
//! struct Pages;
//!
//! impl PageLookup for Pages {
//!     fn find_page(&self, name: &PageName) -> Option<Page> {
//!         let elements = IdentifierScope::new()
//!             .with_identifier("button", Identifier::css(".button"));
//!         (name.as_str() == "home").then(|| Page::new("http://example.com/", elements))
//!     }
//! }
//!
//! struct NoSteps;
//!
//! impl StepLookup for NoSteps {
//!     fn find_step(&self, _name: &StepName) -> Option<Step> {
//!         None
//!     }
//! }
//!
//! struct NoData;
//!
//! impl DataSetLookup for NoData {
//!     fn find_data_set_collection(&self, _name: &DataProviderName) -> Option<DataSetCollection> {
//!         None
//!     }
//! }
//!
//! let click = Action::interaction(
//!     "click home.elements.button",
//!     InteractionVerb::Click,
//!     Identifier::page_element_reference("home", "button"),
//! );
//! let steps = IndexMap::from([(StepName::new("open"), Step::new(vec![click], vec![]))]);
//! let test = Test::new("smoke", Configuration::new("chrome", "home.url"), steps);
//!
//! let resolver = Resolver::new(Pages, NoSteps, NoData);
//! let resolved = resolver.resolve_test(&test).expect("test should resolve");
//!
//! assert_eq!(resolved.configuration().url(), "http://example.com/");
//! ```

use webcheck_model::{Test, TestSuite};

pub mod error;
mod resolver;
mod util;

#[cfg(test)]
mod test;

pub use crate::error::ResolutionError;
pub use crate::resolver::{
    resolve_action, resolve_assertion, resolve_configuration, resolve_data_provider_import,
    resolve_identifier, resolve_page_element_reference, resolve_step, resolve_step_import,
    resolve_test, resolve_test_suite, resolve_value,
};
pub use crate::util::{DataSetLookup, PageLookup, StepLookup};

/// The lookups needed to resolve whole tests and suites.
///
/// Lookups can be passed by value or by reference, since every lookup trait
/// is implemented for references to implementors.
#[derive(Debug, Clone)]
pub struct Resolver<P, S, D> {
    pages: P,
    steps: S,
    data_sets: D,
}

impl<P, S, D> Resolver<P, S, D>
where
    P: PageLookup,
    S: StepLookup,
    D: DataSetLookup,
{
    /// Creates a new resolver from its page, step and data set lookups.
    #[must_use]
    pub const fn new(pages: P, steps: S, data_sets: D) -> Self {
        Self {
            pages,
            steps,
            data_sets,
        }
    }

    /// Resolves every reference in a test.
    ///
    /// # Errors
    ///
    /// See [`resolve_test`].
    pub fn resolve_test(&self, test: &Test) -> Result<Test, ResolutionError> {
        resolve_test(test, &self.pages, &self.steps, &self.data_sets)
    }

    /// Resolves every test of a suite.
    ///
    /// # Errors
    ///
    /// See [`resolve_test_suite`].
    pub fn resolve_test_suite(&self, suite: &TestSuite) -> Result<TestSuite, ResolutionError> {
        resolve_test_suite(suite, &self.pages, &self.steps, &self.data_sets)
    }
}
