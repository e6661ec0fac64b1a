//! Utility types and traits for webcheck reference resolution.

use webcheck_model::{DataProviderName, DataSetCollection, Page, PageName, Step, StepName};

mod import_stack;

pub use import_stack::ImportStack;

/// Trait for finding imported pages by name.
///
/// Implementations may read pages from anywhere (memory, disk, a remote
/// store); resolution treats each call as a blocking lookup.
pub trait PageLookup {
    /// Finds the page imported under `name`.
    ///
    /// # Arguments
    ///
    /// * `name` - The import name of the page
    ///
    /// # Returns
    ///
    /// Returns `Some(Page)` if a page is known under that name, or `None`
    /// otherwise. Resolution reports `None` as an unknown page.
    fn find_page(&self, name: &PageName) -> Option<Page>;
}

/// Trait for finding steps that other steps import.
pub trait StepLookup {
    /// Finds the step named `name`.
    ///
    /// # Returns
    ///
    /// Returns `Some(Step)` if a step is known under that name, or `None`
    /// otherwise. The returned step may itself still be waiting on imports.
    fn find_step(&self, name: &StepName) -> Option<Step>;
}

/// Trait for finding the data sets a data provider import names.
pub trait DataSetLookup {
    /// Finds the data set collection provided under `name`.
    ///
    /// # Returns
    ///
    /// Returns `Some(DataSetCollection)` if a provider is known under that
    /// name, or `None` otherwise.
    fn find_data_set_collection(&self, name: &DataProviderName) -> Option<DataSetCollection>;
}

impl<T: PageLookup + ?Sized> PageLookup for &T {
    fn find_page(&self, name: &PageName) -> Option<Page> {
        (**self).find_page(name)
    }
}

impl<T: StepLookup + ?Sized> StepLookup for &T {
    fn find_step(&self, name: &StepName) -> Option<Step> {
        (**self).find_step(name)
    }
}

impl<T: DataSetLookup + ?Sized> DataSetLookup for &T {
    fn find_data_set_collection(&self, name: &DataProviderName) -> Option<DataSetCollection> {
        (**self).find_data_set_collection(name)
    }
}
