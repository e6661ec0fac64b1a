use indexmap::IndexMap;

/// One named row of test data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataSet {
    name: String,
    data: IndexMap<String, String>,
}

impl DataSet {
    /// Creates a new data set.
    #[must_use]
    pub fn new(name: impl Into<String>, data: IndexMap<String, String>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Returns the name of the data set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the data, in declaration order.
    #[must_use]
    pub const fn data(&self) -> &IndexMap<String, String> {
        &self.data
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// The data sets a step runs once for each of.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataSetCollection(Vec<DataSet>);

impl DataSetCollection {
    /// Creates a new collection.
    #[must_use]
    pub const fn new(data_sets: Vec<DataSet>) -> Self {
        Self(data_sets)
    }

    /// Returns the data sets in order.
    #[must_use]
    pub fn data_sets(&self) -> &[DataSet] {
        &self.0
    }

    /// Returns the number of data sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the collection has no data sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<DataSet> for DataSetCollection {
    fn from_iter<I: IntoIterator<Item = DataSet>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_set_reads_values_by_key() {
        let data = [("username", "admin"), ("password", "secret")]
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        let data_set = DataSet::new("admin", data);

        assert_eq!(data_set.get("username"), Some("admin"));
        assert_eq!(data_set.get("email"), None);
        assert_eq!(data_set.data().len(), 2);
    }
}
