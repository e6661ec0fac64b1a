use indexmap::IndexMap;

use webcheck_model::{DataProviderName, DataSetCollection};
use webcheck_resolver::DataSetLookup;

/// Data set collections held in memory, keyed by data provider name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSetProvider {
    collections: IndexMap<DataProviderName, DataSetCollection>,
}

impl DataSetProvider {
    /// Creates a provider with no data sets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: IndexMap::new(),
        }
    }

    /// Creates a provider with no data sets, for tests that import none.
    #[must_use]
    pub fn empty() -> Self {
        Self::new()
    }

    /// Returns this provider with `collection` provided as `name`.
    #[must_use]
    pub fn with_collection(
        mut self,
        name: impl Into<DataProviderName>,
        collection: DataSetCollection,
    ) -> Self {
        self.collections.insert(name.into(), collection);
        self
    }

    /// Returns the number of data providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns `true` if the provider holds no data sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl FromIterator<(DataProviderName, DataSetCollection)> for DataSetProvider {
    fn from_iter<I: IntoIterator<Item = (DataProviderName, DataSetCollection)>>(iter: I) -> Self {
        Self {
            collections: iter.into_iter().collect(),
        }
    }
}

impl DataSetLookup for DataSetProvider {
    fn find_data_set_collection(&self, name: &DataProviderName) -> Option<DataSetCollection> {
        self.collections.get(name).cloned()
    }
}
