//! Step import resolution
//!
//! A step can inherit the actions and assertions of another named step, and
//! can import its data sets from a named data provider:
//!
//! ```text
//! steps:
//!   log in:
//!     use: login_steps.log_in
//!     data: users
//! ```
//!
//! Imported actions and assertions are placed before the step's own. The
//! imported step may itself import another step; such chains are resolved
//! recursively and a chain that reaches the same step twice is an error.

use webcheck_model::Step;

use crate::{
    error::ResolutionError,
    util::{DataSetLookup, ImportStack, StepLookup},
};

/// Merges the step a step imports into it.
///
/// Steps that are not waiting on an import are returned as is. Once the step
/// import is merged, the step collapses to [`Step::Resolved`] unless a data
/// provider import is still pending.
///
/// # Errors
///
/// * `UnknownStep` if the imported step, or any step it imports in turn, is
///   not known to `steps`
/// * `CircularImport` if the chain of imports reaches the same step twice
pub fn resolve_step_import(
    step: &Step,
    steps: &impl StepLookup,
) -> Result<Step, ResolutionError> {
    resolve_step_import_within(step, steps, &ImportStack::new())
}

fn resolve_step_import_within(
    step: &Step,
    steps: &impl StepLookup,
    import_stack: &ImportStack<'_>,
) -> Result<Step, ResolutionError> {
    let Step::PendingImport(pending) = step else {
        return Ok(step.clone());
    };

    let Some(name) = pending.step_import() else {
        return Ok(pending.clone().into_step());
    };

    // check for circular imports before the lookup, since a step importing
    // itself is always found
    if let Some(chain) = import_stack.find_circular_import(name) {
        return Err(ResolutionError::circular_import(name.clone(), chain));
    }

    let parent = steps
        .find_step(name)
        .ok_or_else(|| ResolutionError::unknown_step(name.clone()))?;

    let parent = if parent.requires_resolution() {
        resolve_step_import_within(&parent, steps, &import_stack.push(name))?
    } else {
        parent
    };

    tracing::debug!(
        step = %name,
        actions = parent.body().actions().len(),
        assertions = parent.body().assertions().len(),
        "merging imported step"
    );

    let body = pending
        .body()
        .clone()
        .with_prepended(parent.body().actions(), parent.body().assertions());

    let pending = pending.clone().without_step_import();
    Ok(pending.with_body(body).into_step())
}

/// Attaches the data sets a step imports from a data provider.
///
/// Steps that are not waiting on a data provider import are returned as is,
/// apart from collapsing a pending step whose imports are all done. The data
/// sets are attached even while a step import is still pending; the step then
/// stays [`Step::PendingImport`].
///
/// # Errors
///
/// * `UnknownDataProvider` if `data_sets` does not know the provider
pub fn resolve_data_provider_import(
    step: &Step,
    data_sets: &impl DataSetLookup,
) -> Result<Step, ResolutionError> {
    let Step::PendingImport(pending) = step else {
        return Ok(step.clone());
    };

    let Some(name) = pending.data_provider_import() else {
        return Ok(pending.clone().into_step());
    };

    let collection = data_sets
        .find_data_set_collection(name)
        .ok_or_else(|| ResolutionError::unknown_data_provider(name.clone()))?;

    tracing::debug!(data_provider = %name, data_sets = collection.len(), "attaching data sets");

    let body = pending.body().clone().with_data_sets(collection);

    let pending = pending.clone().without_data_provider_import();
    Ok(pending.with_body(body).into_step())
}
