//! Value resolution
//!
//! Values are examined by assertions and entered by input actions. Literals
//! and object properties such as `$page.url` are left alone. References are
//! resolved as follows:
//!
//! - `page_import_name.elements.element_name` becomes the element's locator
//! - `$elements.element_name` becomes the locator declared by the step
//! - `$elements.element_name.attribute_name` becomes that locator narrowed to
//!   the attribute

use std::borrow::Cow;

use webcheck_model::{IdentifierScope, Value};

use crate::{
    error::ResolutionError,
    resolver::resolve_page_element::resolve_page_element_reference,
    util::PageLookup,
};

/// Resolves a value to a concrete value.
///
/// # Arguments
///
/// * `value` - The value to resolve
/// * `pages` - The lookup used for page element references
/// * `scope` - The identifiers declared by the enclosing step
///
/// # Returns
///
/// Returns `Cow::Borrowed(value)` if there was nothing to resolve. This
/// includes attribute references that cannot be split into an element and an
/// attribute name.
///
/// # Errors
///
/// * `UnknownElement` if an element or attribute reference names nothing
///   concrete in `scope`
/// * any error of [`resolve_page_element_reference`]
pub fn resolve_value<'a>(
    value: &'a Value,
    pages: &impl PageLookup,
    scope: &IdentifierScope,
) -> Result<Cow<'a, Value>, ResolutionError> {
    match value {
        Value::Literal(_) | Value::ObjectProperty(_) | Value::Element(_) | Value::Attribute(_) => {
            Ok(Cow::Borrowed(value))
        }

        Value::PageElementReference(reference) => {
            let resolved = resolve_page_element_reference(reference, pages)?;
            Ok(Cow::Owned(Value::Element(resolved)))
        }

        Value::ElementReference(element) => {
            let resolved = scope
                .get_dom(element)
                .cloned()
                .ok_or_else(|| ResolutionError::unknown_element(element.clone()))?;
            Ok(Cow::Owned(Value::Element(resolved)))
        }

        Value::AttributeReference(reference) => {
            let Some((element, attribute)) = reference.split() else {
                tracing::trace!(
                    property = reference.property(),
                    "skipping malformed attribute reference"
                );
                return Ok(Cow::Borrowed(value));
            };

            let resolved = scope
                .get_dom(&element)
                .cloned()
                .ok_or_else(|| ResolutionError::unknown_element(element.clone()))?;

            tracing::trace!(%element, attribute, "resolved attribute reference");

            Ok(Cow::Owned(Value::Attribute(resolved.with_attribute_name(attribute))))
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use webcheck_model::{ObjectKind, ObjectProperty};

    use crate::test::{
        TestPageLookup,
        construct::{
            ELEMENT_NAME, PAGE_IMPORT_NAME, css, page_with_element, scope_with_element,
        },
    };

    use super::*;

    fn property(kind: ObjectKind, name: &str) -> Value {
        Value::ObjectProperty(ObjectProperty::new(kind, name))
    }

    #[rstest]
    #[case::literal(Value::literal("value"))]
    #[case::browser_property(property(ObjectKind::Browser, "size"))]
    #[case::page_property(property(ObjectKind::Page, "url"))]
    #[case::data_property(property(ObjectKind::Data, "key"))]
    #[case::environment_property(property(ObjectKind::Environment, "KEY"))]
    #[case::element(Value::Element(css(".selector")))]
    #[case::attribute(Value::Attribute(css(".selector").with_attribute_name("href")))]
    #[case::malformed_attribute_reference(Value::attribute_reference("element_name"))]
    fn value_is_unchanged(#[case] value: Value) {
        let pages = TestPageLookup::new();

        let resolved = resolve_value(&value, &pages, &scope_with_element())
            .expect("resolution should succeed");

        assert!(matches!(resolved, Cow::Borrowed(_)));
        assert_eq!(resolved.as_ref(), &value);
    }

    #[test]
    fn page_element_reference() {
        let value = Value::page_element_reference(PAGE_IMPORT_NAME, ELEMENT_NAME);
        let pages = TestPageLookup::new().with_page(PAGE_IMPORT_NAME, page_with_element());

        let resolved = resolve_value(&value, &pages, &IdentifierScope::new())
            .expect("resolution should succeed");

        assert_eq!(resolved.into_owned(), Value::Element(css(".selector")));
    }

    #[test]
    fn element_reference() {
        let value = Value::element_reference(ELEMENT_NAME);
        let pages = TestPageLookup::new();

        let resolved = resolve_value(&value, &pages, &scope_with_element())
            .expect("resolution should succeed");

        assert_eq!(resolved.into_owned(), Value::Element(css(".selector")));
    }

    #[test]
    fn attribute_reference() {
        // create the value and an empty page lookup
        let value = Value::attribute_reference("element_name.attribute_name");
        let pages = TestPageLookup::new();

        // resolve the value
        let resolved = resolve_value(&value, &pages, &scope_with_element())
            .expect("resolution should succeed");

        // check the locator carries the attribute
        let Value::Attribute(identifier) = resolved.into_owned() else {
            panic!("expected an attribute value");
        };
        let expected = css(".selector").with_attribute_name("attribute_name");
        assert_eq!(identifier, expected);
    }

    #[rstest]
    #[case::element_reference(Value::element_reference(ELEMENT_NAME))]
    #[case::attribute_reference(Value::attribute_reference("element_name.attribute_name"))]
    fn unknown_element(#[case] value: Value) {
        let pages = TestPageLookup::new();

        let error = resolve_value(&value, &pages, &IdentifierScope::new())
            .expect_err("resolution should fail");

        assert_eq!(error.to_string(), r#"Unknown element "element_name""#);
    }
}
