//! Page element resolution
//!
//! A page element reference, written `page_import_name.elements.element_name`,
//! names an element declared by an imported page. Pages are expected to
//! declare concrete locators; an element bound to another reference is
//! reported as unknown rather than resolved further.

use webcheck_model::{DomIdentifier, PageElementReference};

use crate::{error::ResolutionError, util::PageLookup};

/// Resolves a reference to an element of an imported page.
///
/// # Arguments
///
/// * `reference` - The page and element names
/// * `pages` - The lookup used to find the page
///
/// # Returns
///
/// Returns the concrete locator the page declares for the element.
///
/// # Errors
///
/// * `UnknownPage` if `pages` does not know the page
/// * `UnknownPageElement` if the page declares no concrete locator under the
///   element name
pub fn resolve_page_element_reference(
    reference: &PageElementReference,
    pages: &impl PageLookup,
) -> Result<DomIdentifier, ResolutionError> {
    let page = pages
        .find_page(reference.page())
        .ok_or_else(|| ResolutionError::unknown_page(reference.page().clone()))?;

    let identifier = page
        .elements()
        .get_dom(reference.element())
        .cloned()
        .ok_or_else(|| {
            ResolutionError::unknown_page_element(
                reference.page().clone(),
                reference.element().clone(),
            )
        })?;

    tracing::trace!(%reference, %identifier, "resolved page element reference");

    Ok(identifier)
}
