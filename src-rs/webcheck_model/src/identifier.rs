use std::fmt;

use crate::name::{ElementName, PageName};

/// A locator expression understood by the browser driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A CSS selector, such as `.selector`.
    Css(String),
    /// An XPath expression, such as `//h1`.
    XPath(String),
}

impl Selector {
    /// Creates a CSS selector.
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Creates an XPath selector.
    #[must_use]
    pub fn xpath(selector: impl Into<String>) -> Self {
        Self::XPath(selector.into())
    }

    /// Returns the locator expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Css(selector) | Self::XPath(selector) => selector,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

/// A concrete locator for one element of a page.
///
/// Besides the selector itself, a DOM identifier may pin down which of several
/// matching elements is meant (the 1-based ordinal position), which attribute
/// of the element is being read, and the name the element was declared under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomIdentifier {
    selector: Selector,
    ordinal_position: usize,
    attribute_name: Option<String>,
    name: Option<ElementName>,
}

impl DomIdentifier {
    /// Creates a DOM identifier for the first element matching `selector`.
    #[must_use]
    pub const fn new(selector: Selector) -> Self {
        Self {
            selector,
            ordinal_position: 1,
            attribute_name: None,
            name: None,
        }
    }

    /// Returns this identifier pointing at the `position`th match instead.
    #[must_use]
    pub const fn with_ordinal_position(mut self, position: usize) -> Self {
        self.ordinal_position = position;
        self
    }

    /// Returns this identifier narrowed to one attribute of the element.
    #[must_use]
    pub fn with_attribute_name(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = Some(attribute_name.into());
        self
    }

    /// Returns this identifier tagged with the name it was declared under.
    #[must_use]
    pub fn with_name(mut self, name: ElementName) -> Self {
        self.name = Some(name);
        self
    }

    /// Returns the selector.
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Returns the 1-based position among matching elements.
    #[must_use]
    pub const fn ordinal_position(&self) -> usize {
        self.ordinal_position
    }

    /// Returns the attribute name, if any.
    #[must_use]
    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute_name.as_deref()
    }

    /// Returns the declared element name, if any.
    #[must_use]
    pub const fn name(&self) -> Option<&ElementName> {
        self.name.as_ref()
    }
}

impl fmt::Display for DomIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ordinal_position != 1 {
            write!(f, "{}:", self.ordinal_position)?;
        }
        write!(f, "{}", self.selector)?;
        if let Some(attribute_name) = &self.attribute_name {
            write!(f, ".{attribute_name}")?;
        }
        Ok(())
    }
}

/// A reference to the element `element` declared by the page imported as `page`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageElementReference {
    page: PageName,
    element: ElementName,
}

impl PageElementReference {
    /// Creates a new page element reference.
    #[must_use]
    pub const fn new(page: PageName, element: ElementName) -> Self {
        Self { page, element }
    }

    /// Returns the page import name.
    #[must_use]
    pub const fn page(&self) -> &PageName {
        &self.page
    }

    /// Returns the element name within the page.
    #[must_use]
    pub const fn element(&self) -> &ElementName {
        &self.element
    }
}

impl fmt::Display for PageElementReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.elements.{}", self.page, self.element)
    }
}

/// A locator as written in a test: concrete, or a symbolic reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A concrete locator.
    Dom(DomIdentifier),
    /// `page_import_name.elements.element_name`
    PageElementReference(PageElementReference),
    /// `$elements.element_name`, looked up in the enclosing step's scope.
    ElementReference(ElementName),
}

impl Identifier {
    /// Creates a concrete CSS identifier.
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Dom(DomIdentifier::new(Selector::css(selector)))
    }

    /// Creates a concrete XPath identifier.
    #[must_use]
    pub fn xpath(selector: impl Into<String>) -> Self {
        Self::Dom(DomIdentifier::new(Selector::xpath(selector)))
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

    /// Returns `true` if this identifier is a symbolic reference.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        !matches!(self, Self::Dom(_))
    }

    /// Returns the concrete locator, if this identifier is one.
    #[must_use]
    pub const fn as_dom(&self) -> Option<&DomIdentifier> {
        match self {
            Self::Dom(identifier) => Some(identifier),
            Self::PageElementReference(_) | Self::ElementReference(_) => None,
        }
    }
}

impl From<DomIdentifier> for Identifier {
    fn from(identifier: DomIdentifier) -> Self {
        Self::Dom(identifier)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dom(identifier) => fmt::Display::fmt(identifier, f),
            Self::PageElementReference(reference) => fmt::Display::fmt(reference, f),
            Self::ElementReference(element) => write!(f, "$elements.{element}"),
        }
    }
}
