use std::borrow::Cow;

use webcheck_model::{Action, IdentifierScope};

use crate::{
    error::ResolutionError,
    resolver::{resolve_identifier::resolve_identifier, resolve_value::resolve_value},
    util::PageLookup,
};

/// Resolves the identifier of an action, and the value of an input action.
///
/// The identifier is resolved first. The action is only rebuilt for the parts
/// that actually changed, so an action with nothing to resolve comes back as
/// `Cow::Borrowed`.
///
/// # Errors
///
/// Returns any error of
/// [`resolve_identifier`](crate::resolve_identifier) or
/// [`resolve_value`](crate::resolve_value).
pub fn resolve_action<'a>(
    action: &'a Action,
    pages: &impl PageLookup,
    scope: &IdentifierScope,
) -> Result<Cow<'a, Action>, ResolutionError> {
    let Some(identifier) = action.identifier() else {
        return Ok(Cow::Borrowed(action));
    };

    let mut resolved = Cow::Borrowed(action);

    if let Cow::Owned(identifier) = resolve_identifier(identifier, pages, scope)? {
        resolved = Cow::Owned(action.clone().with_identifier(identifier));
    }

    if let Some(value) = action.value()
        && let Cow::Owned(value) = resolve_value(value, pages, scope)?
    {
        resolved = Cow::Owned(resolved.into_owned().with_value(value));
    }

    Ok(resolved)
}
