use webcheck_model::TestSuite;

use crate::{
    error::ResolutionError,
    resolver::resolve_test::resolve_test,
    util::{DataSetLookup, PageLookup, StepLookup},
};

/// Resolves every test of a suite, in order.
///
/// The suite keeps its name.
///
/// # Errors
///
/// Returns the first error raised while resolving a test. No partially
/// resolved suite is returned.
#[tracing::instrument(level = "debug", skip_all, fields(suite = suite.name()))]
pub fn resolve_test_suite(
    suite: &TestSuite,
    pages: &impl PageLookup,
    steps: &impl StepLookup,
    data_sets: &impl DataSetLookup,
) -> Result<TestSuite, ResolutionError> {
    let tests = suite
        .tests()
        .iter()
        .map(|test| resolve_test(test, pages, steps, data_sets))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(tests = tests.len(), "resolved test suite");

    Ok(TestSuite::new(suite.name(), tests))
}
