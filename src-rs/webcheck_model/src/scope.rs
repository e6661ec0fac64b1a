use indexmap::IndexMap;

use crate::{
    identifier::{DomIdentifier, Identifier},
    name::ElementName,
};

/// The named identifiers visible to one step or declared by one page, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentifierScope(IndexMap<ElementName, Identifier>);

impl IdentifierScope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns this scope with `identifier` declared under `name`.
    ///
    /// A previous declaration of the same name is replaced in place.
    #[must_use]
    pub fn with_identifier(mut self, name: impl Into<ElementName>, identifier: Identifier) -> Self {
        self.0.insert(name.into(), identifier);
        self
    }

    /// Returns the identifier declared under `name`, whatever its kind.
    #[must_use]
    pub fn get(&self, name: &ElementName) -> Option<&Identifier> {
        self.0.get(name)
    }

    /// Returns the concrete locator declared under `name`.
    ///
    /// A name bound to a symbolic reference is treated as unknown.
    #[must_use]
    pub fn get_dom(&self, name: &ElementName) -> Option<&DomIdentifier> {
        self.get(name).and_then(Identifier::as_dom)
    }

    /// Iterates over the declarations in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, ElementName, Identifier> {
        self.0.iter()
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ElementName, Identifier)> for IdentifierScope {
    fn from_iter<I: IntoIterator<Item = (ElementName, Identifier)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for IdentifierScope {
    type Item = (ElementName, Identifier);
    type IntoIter = indexmap::map::IntoIter<ElementName, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IdentifierScope {
    type Item = (&'a ElementName, &'a Identifier);
    type IntoIter = indexmap::map::Iter<'a, ElementName, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
