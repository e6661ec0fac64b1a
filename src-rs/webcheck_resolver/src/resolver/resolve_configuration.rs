use webcheck_model::{Configuration, PageUrlReference};

use crate::{error::ResolutionError, util::PageLookup};

/// Resolves a `page_import_name.url` start URL to the URI of that page.
///
/// Any other URL is taken to be literal. The browser is copied as is.
///
/// # Errors
///
/// * `UnknownPage` if the URL refers to a page `pages` does not know
pub fn resolve_configuration(
    configuration: &Configuration,
    pages: &impl PageLookup,
) -> Result<Configuration, ResolutionError> {
    let Some(reference) = PageUrlReference::parse(configuration.url()) else {
        return Ok(configuration.clone());
    };

    let page = pages
        .find_page(reference.page())
        .ok_or_else(|| ResolutionError::unknown_page(reference.page().clone()))?;

    tracing::trace!(page = %reference.page(), uri = page.uri(), "resolved page url");

    Ok(configuration.clone().with_url(page.uri()))
}
