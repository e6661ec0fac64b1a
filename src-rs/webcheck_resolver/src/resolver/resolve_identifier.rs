//! Identifier resolution
//!
//! Identifiers locate the element an action acts on. Besides concrete
//! locators, they can be written as
//!
//! - `page_import_name.elements.element_name`, an element of an imported page
//! - `$elements.element_name`, an element declared by the enclosing step

use std::borrow::Cow;

use webcheck_model::{Identifier, IdentifierScope};

use crate::{
    error::ResolutionError,
    resolver::resolve_page_element::resolve_page_element_reference,
    util::PageLookup,
};

/// Resolves an identifier to a concrete locator.
///
/// # Arguments
///
/// * `identifier` - The identifier to resolve
/// * `pages` - The lookup used for page element references
/// * `scope` - The identifiers declared by the enclosing step
///
/// # Returns
///
/// Returns `Cow::Borrowed(identifier)` if the identifier was already a
/// concrete locator, or the resolved locator otherwise.
///
/// # Errors
///
/// * `UnknownElement` if an element reference names nothing concrete in `scope`
/// * any error of [`resolve_page_element_reference`]
pub fn resolve_identifier<'a>(
    identifier: &'a Identifier,
    pages: &impl PageLookup,
    scope: &IdentifierScope,
) -> Result<Cow<'a, Identifier>, ResolutionError> {
    match identifier {
        Identifier::Dom(_) => Ok(Cow::Borrowed(identifier)),

        Identifier::PageElementReference(reference) => {
            let resolved = resolve_page_element_reference(reference, pages)?;
            Ok(Cow::Owned(Identifier::Dom(resolved)))
        }

        Identifier::ElementReference(element) => {
            let resolved = scope
                .get_dom(element)
                .cloned()
                .ok_or_else(|| ResolutionError::unknown_element(element.clone()))?;

            tracing::trace!(%element, identifier = %resolved, "resolved element reference");

            Ok(Cow::Owned(Identifier::Dom(resolved)))
        }
    }
}
