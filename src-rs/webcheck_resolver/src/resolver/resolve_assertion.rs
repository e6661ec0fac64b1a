use std::borrow::Cow;

use webcheck_model::{Assertion, IdentifierScope};

use crate::{error::ResolutionError, resolver::resolve_value::resolve_value, util::PageLookup};

/// Resolves the examined value of an assertion and, for comparisons, the
/// expected value.
///
/// Both values are resolved against the same scope. An assertion with nothing
/// to resolve comes back as `Cow::Borrowed`.
///
/// # Errors
///
/// Returns any error of [`resolve_value`](crate::resolve_value).
pub fn resolve_assertion<'a>(
    assertion: &'a Assertion,
    pages: &impl PageLookup,
    scope: &IdentifierScope,
) -> Result<Cow<'a, Assertion>, ResolutionError> {
    let mut resolved = Cow::Borrowed(assertion);

    if let Cow::Owned(examined) = resolve_value(assertion.examined(), pages, scope)? {
        resolved = Cow::Owned(assertion.clone().with_examined(examined));
    }

    if let Some(expected) = assertion.expected()
        && let Cow::Owned(expected) = resolve_value(expected, pages, scope)?
    {
        resolved = Cow::Owned(resolved.into_owned().with_expected(expected));
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use webcheck_model::{Comparison, Expectation, ObjectKind, ObjectProperty, Value};

    use crate::test::{
        TestPageLookup,
        construct::{
            ELEMENT_NAME, PAGE_IMPORT_NAME, css, exists, page_with_element, scope_with_element,
        },
    };

    use super::*;

    #[test]
    fn concrete_assertion_is_unchanged() {
        let assertion = Assertion::comparison(
            "$page.title is \"Home\"",
            Value::ObjectProperty(ObjectProperty::new(ObjectKind::Page, "title")),
            Comparison::Is,
            Value::literal("Home"),
        );
        let pages = TestPageLookup::new();

        let resolved = resolve_assertion(&assertion, &pages, &scope_with_element())
            .expect("resolution should succeed");

        assert!(matches!(resolved, Cow::Borrowed(_)));
    }

    #[test]
    fn existence_with_page_element_reference() {
        let examined = Value::page_element_reference(PAGE_IMPORT_NAME, ELEMENT_NAME);
        let assertion = exists(examined);
        let pages = TestPageLookup::new().with_page(PAGE_IMPORT_NAME, page_with_element());

        let resolved = resolve_assertion(&assertion, &pages, &IdentifierScope::new())
            .expect("resolution should succeed");

        assert_eq!(resolved.examined(), &Value::Element(css(".selector")));
        assert_eq!(resolved.expected(), None);
        assert_eq!(
            resolved.source(),
            "page_import_name.elements.element_name exists"
        );
    }

    #[test]
    fn comparison_resolves_both_values() {
        // create an assertion with references on both sides
        let assertion = Assertion::comparison(
            "$elements.element_name.title is page_import_name.elements.element_name",
            Value::attribute_reference("element_name.title"),
            Comparison::Is,
            Value::page_element_reference(PAGE_IMPORT_NAME, ELEMENT_NAME),
        );
        let pages = TestPageLookup::new().with_page(PAGE_IMPORT_NAME, page_with_element());

        // resolve the assertion
        let resolved = resolve_assertion(&assertion, &pages, &scope_with_element())
            .expect("resolution should succeed");

        // check both values
        assert_eq!(
            resolved.examined(),
            &Value::Attribute(css(".selector").with_attribute_name("title"))
        );
        assert_eq!(resolved.expected(), Some(&Value::Element(css(".selector"))));
        let Expectation::Comparison { comparison, .. } = resolved.expectation() else {
            panic!("expected a comparison, got {resolved:?}");
        };
        assert_eq!(*comparison, Comparison::Is);
    }

    #[test]
    fn expected_value_only() {
        let assertion = Assertion::comparison(
            "\".heading\" is $elements.element_name",
            Value::Element(css(".heading")),
            Comparison::Is,
            Value::element_reference(ELEMENT_NAME),
        );
        let pages = TestPageLookup::new();

        let resolved = resolve_assertion(&assertion, &pages, &scope_with_element())
            .expect("resolution should succeed");

        assert_eq!(resolved.examined(), &Value::Element(css(".heading")));
        assert_eq!(resolved.expected(), Some(&Value::Element(css(".selector"))));
    }

    #[test]
    fn unknown_element_in_expected_value() {
        let assertion = Assertion::comparison(
            "\".heading\" is $elements.element_name",
            Value::Element(css(".heading")),
            Comparison::Is,
            Value::element_reference(ELEMENT_NAME),
        );
        let pages = TestPageLookup::new();

        let error = resolve_assertion(&assertion, &pages, &IdentifierScope::new())
            .expect_err("resolution should fail");

        assert_eq!(error.to_string(), r#"Unknown element "element_name""#);
    }
}
