use std::fmt;

use crate::{
    identifier::{DomIdentifier, PageElementReference},
    name::{ElementName, PageName},
};

/// The object an [`ObjectProperty`] reads from at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// `$browser`
    Browser,
    /// `$page`
    Page,
    /// `$data`
    Data,
    /// `$env`
    Environment,
}

impl ObjectKind {
    /// Returns the prefix the object is written with.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Browser => "$browser",
            Self::Page => "$page",
            Self::Data => "$data",
            Self::Environment => "$env",
        }
    }
}

/// A property of a run-time object, such as `$page.url`.
///
/// Object properties are only known when a test executes, so resolution
/// leaves them untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectProperty {
    kind: ObjectKind,
    property: String,
}

impl ObjectProperty {
    /// Creates a new object property.
    #[must_use]
    pub fn new(kind: ObjectKind, property: impl Into<String>) -> Self {
        Self {
            kind,
            property: property.into(),
        }
    }

    /// Returns the kind of object the property belongs to.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Returns the property name.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }
}

impl fmt::Display for ObjectProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind.prefix(), self.property)
    }
}

/// The `element_name.attribute_name` text of an `$elements.element_name.attribute_name`
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeReference(String);

impl AttributeReference {
    /// Creates a new attribute reference from its raw `element.attribute` text.
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self(property.into())
    }

    /// Returns the raw `element.attribute` text.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.0
    }

    /// Splits the reference into its element name and attribute name.
    ///
    /// Returns `None` if the text contains no `.`. Anything after a second `.`
    /// is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use webcheck_model::{AttributeReference, ElementName};
    ///
    /// let reference = AttributeReference::new("heading.title");
    /// assert_eq!(reference.split(), Some((ElementName::new("heading"), "title")));
    /// assert_eq!(AttributeReference::new("heading").split(), None);
    /// ```
    #[must_use]
    pub fn split(&self) -> Option<(ElementName, &str)> {
        let mut parts = self.0.split('.');
        let element = parts.next()?;
        let attribute = parts.next()?;
        Some((ElementName::new(element), attribute))
    }
}

/// A value as written in a test: concrete, or a symbolic reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A literal string.
    Literal(String),
    /// A property of a run-time object.
    ObjectProperty(ObjectProperty),
    /// The element located by an identifier.
    Element(DomIdentifier),
    /// An attribute of the element located by an identifier. The identifier
    /// carries the attribute name.
    Attribute(DomIdentifier),
    /// `page_import_name.elements.element_name`
    PageElementReference(PageElementReference),
    /// `$elements.element_name`
    ElementReference(ElementName),
    /// `$elements.element_name.attribute_name`
    AttributeReference(AttributeReference),
}

impl Value {
    /// Creates a literal value.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates a reference to an element of an imported page.
    #[must_use]
    pub fn page_element_reference(
        page: impl Into<PageName>,
        element: impl Into<ElementName>,
    ) -> Self {
        Self::PageElementReference(PageElementReference::new(page.into(), element.into()))
    }

    /// Creates a reference to an element of the enclosing step's scope.
    #[must_use]
    pub fn element_reference(element: impl Into<ElementName>) -> Self {
        Self::ElementReference(element.into())
    }

    /// Creates a reference to an attribute of an element of the enclosing step's scope.
    #[must_use]
    pub fn attribute_reference(property: impl Into<String>) -> Self {
        Self::AttributeReference(AttributeReference::new(property))
    }

    /// Returns `true` if this value is a symbolic reference.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(
            self,
            Self::PageElementReference(_) | Self::ElementReference(_) | Self::AttributeReference(_)
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "\"{value}\""),
            Self::ObjectProperty(property) => fmt::Display::fmt(property, f),
            Self::Element(identifier) | Self::Attribute(identifier) => {
                fmt::Display::fmt(identifier, f)
            }
            Self::PageElementReference(reference) => fmt::Display::fmt(reference, f),
            Self::ElementReference(element) => write!(f, "$elements.{element}"),
            Self::AttributeReference(reference) => write!(f, "$elements.{}", reference.property()),
        }
    }
}
