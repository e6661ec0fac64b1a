//! Step resolution
//!
//! Resolving a step happens in three passes over its body:
//!
//! 1. the identifiers the step declares, each resolved against an empty scope
//!    so that declarations cannot refer to one another
//! 2. the actions, against the scope from the first pass
//! 3. the assertions, against the same scope
//!
//! Errors from the second and third passes carry the source text of the
//! failing action or assertion as `content` context.

use std::borrow::Cow;

use webcheck_model::{IdentifierScope, Step};
use webcheck_shared::error::ContextKey;

use crate::{
    error::ResolutionError,
    resolver::{
        resolve_action::resolve_action, resolve_assertion::resolve_assertion,
        resolve_identifier::resolve_identifier,
    },
    util::PageLookup,
};

/// Resolves every reference in the body of a step.
///
/// A step still waiting on imports is returned as is; its imports have to be
/// merged first. A pending step with nothing left to import is unwrapped.
///
/// # Returns
///
/// Returns the step as [`Step::Resolved`], with its resolved identifier
/// scope, actions and assertions.
///
/// # Errors
///
/// Returns the first error raised while resolving the identifier scope, an
/// action or an assertion.
pub fn resolve_step(step: &Step, pages: &impl PageLookup) -> Result<Step, ResolutionError> {
    let body = match step {
        Step::PendingImport(pending) if pending.requires_resolution() => {
            tracing::debug!("skipping step with pending imports");
            return Ok(step.clone());
        }
        Step::PendingImport(pending) => pending.body(),
        Step::Resolved(body) => body,
    };

    let identifiers = resolve_identifier_scope(body.identifiers(), pages)?;

    let actions = body
        .actions()
        .iter()
        .map(|action| {
            resolve_action(action, pages, &identifiers)
                .map(Cow::into_owned)
                .map_err(|error| error.with_context(ContextKey::Content, action.source()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let assertions = body
        .assertions()
        .iter()
        .map(|assertion| {
            resolve_assertion(assertion, pages, &identifiers)
                .map(Cow::into_owned)
                .map_err(|error| error.with_context(ContextKey::Content, assertion.source()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let resolved = body
        .clone()
        .with_actions(actions)
        .with_assertions(assertions)
        .with_identifiers(identifiers);

    Ok(Step::Resolved(resolved))
}

/// Resolves each declared identifier on its own, keeping the declared names.
fn resolve_identifier_scope(
    scope: &IdentifierScope,
    pages: &impl PageLookup,
) -> Result<IdentifierScope, ResolutionError> {
    let empty_scope = IdentifierScope::new();

    scope
        .iter()
        .map(|(name, identifier)| {
            resolve_identifier(identifier, pages, &empty_scope)
                .map(|identifier| (name.clone(), identifier.into_owned()))
        })
        .collect()
}
