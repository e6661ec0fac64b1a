//! End-to-end resolution of test suites through the reference providers.

use indexmap::IndexMap;
use rstest::rstest;

use webcheck_model::{
    Action, Assertion, Comparison, Configuration, DataSet, DataSetCollection, DomIdentifier,
    Existence, Identifier, IdentifierScope, InteractionVerb, Page, Selector, Step, StepBody,
    StepName, Test, TestSuite, Value,
};
use webcheck_provider::{DataSetProvider, PageProvider, StepProvider};
use webcheck_resolver::{
    ResolutionError, Resolver, error::ContextAwareErrorKind, resolve_action, resolve_value,
};
use webcheck_shared::error::{AsWebcheckError, ContextKey, ErrorContext, WebcheckError};

const PAGE_IMPORT_NAME: &str = "page_import_name";
const ELEMENT_NAME: &str = "element_name";
const CLICK_PAGE_ELEMENT: &str = "click page_import_name.elements.element_name";

fn selector() -> DomIdentifier {
    DomIdentifier::new(Selector::css(".selector"))
}

fn page_provider() -> PageProvider {
    let elements = IdentifierScope::new().with_identifier(ELEMENT_NAME, selector().into());
    PageProvider::new().with_page(PAGE_IMPORT_NAME, Page::new("http://example.com/", elements))
}

fn click(source: &str, identifier: Identifier) -> Action {
    Action::interaction(source, InteractionVerb::Click, identifier)
}

fn click_page_element() -> Action {
    let identifier = Identifier::page_element_reference(PAGE_IMPORT_NAME, ELEMENT_NAME);
    click(CLICK_PAGE_ELEMENT, identifier)
}

fn click_element() -> Action {
    let identifier = Identifier::element_reference(ELEMENT_NAME);
    click("click $elements.element_name", identifier)
}

fn wait(duration: &str) -> Action {
    Action::wait(format!("wait {duration}"), duration)
}

fn exists(source: &str, examined: Value) -> Assertion {
    Assertion::existence(source, examined, Existence::Exists)
}

fn single_step_test(step: Step) -> Test {
    let steps = IndexMap::from([(StepName::new("step name"), step)]);
    let configuration = Configuration::new("chrome", "http://example.com/");
    Test::new("test name", configuration, steps)
}

fn suite(tests: Vec<Test>) -> TestSuite {
    TestSuite::new("suite name", tests)
}

fn page_without_element() -> PageProvider {
    PageProvider::new().with_page(PAGE_IMPORT_NAME, Page::default())
}

#[test]
fn page_element_reference_in_action() {
    // create the action and the page provider
    let action = click_page_element();
    let pages = page_provider();
    let scope = IdentifierScope::new();

    // resolve the action
    let resolved = resolve_action(&action, &pages, &scope).expect("resolution should succeed");

    // check the identifier is the page's locator
    let identifier = Identifier::Dom(selector());
    assert_eq!(resolved.identifier(), Some(&identifier));
}

#[rstest]
#[case::unknown_page_element(
    page_without_element(),
    r#"Unknown page element "element_name" in page "page_import_name""#
)]
#[case::unknown_page(PageProvider::empty(), r#"Unknown page "page_import_name""#)]
fn page_element_reference_failures(#[case] pages: PageProvider, #[case] message: &str) {
    let step = Step::new(vec![click_page_element()], vec![]);
    let steps = StepProvider::empty();
    let data_sets = DataSetProvider::empty();
    let resolver = Resolver::new(&pages, &steps, &data_sets);

    let error = resolver
        .resolve_test_suite(&suite(vec![single_step_test(step)]))
        .expect_err("resolution should fail");

    assert_eq!(error.to_string(), message);
    let context = error.context().expect("expected a context-aware error");
    assert_eq!(context.get(ContextKey::Content), Some(CLICK_PAGE_ELEMENT));
}

#[test]
fn element_and_attribute_references() {
    // create a step declaring element_name and referring to it
    let scope = IdentifierScope::new().with_identifier(ELEMENT_NAME, selector().into());
    let assertion = Assertion::comparison(
        "$elements.element_name.attribute_name is \"value\"",
        Value::attribute_reference("element_name.attribute_name"),
        Comparison::Is,
        Value::literal("value"),
    );
    let body = StepBody::new(vec![click_element()], vec![assertion]).with_identifiers(scope);

    // resolve the suite
    let pages = PageProvider::empty();
    let steps = StepProvider::empty();
    let data_sets = DataSetProvider::empty();
    let resolver = Resolver::new(pages, steps, data_sets);
    let resolved = resolver
        .resolve_test_suite(&suite(vec![single_step_test(Step::Resolved(body))]))
        .expect("resolution should succeed");

    // check the element and attribute were substituted
    let test = &resolved.tests()[0];
    let step = test
        .step(&StepName::new("step name"))
        .expect("step should be kept");
    let identifier = Identifier::Dom(selector());
    let attribute = Value::Attribute(selector().with_attribute_name("attribute_name"));
    assert_eq!(step.body().actions()[0].identifier(), Some(&identifier));
    assert_eq!(step.body().assertions()[0].examined(), &attribute);
}

#[test]
fn unknown_element_carries_full_context() {
    // create a test whose assertion refers to an undeclared element
    let assertion = exists(
        "$elements.element_name exists",
        Value::element_reference(ELEMENT_NAME),
    );
    let step = Step::new(vec![], vec![assertion]);
    let pages = PageProvider::empty();
    let steps = StepProvider::empty();
    let data_sets = DataSetProvider::empty();
    let resolver = Resolver::new(pages, steps, data_sets);

    // resolve the suite
    let error = resolver
        .resolve_test_suite(&suite(vec![single_step_test(step)]))
        .expect_err("resolution should fail");

    // check the error kind and its context
    let expected_kind = ContextAwareErrorKind::UnknownElement {
        element: ELEMENT_NAME.into(),
    };
    let expected = ErrorContext::new()
        .with(ContextKey::TestName, "test name")
        .with(ContextKey::StepName, "step name")
        .with(ContextKey::Content, "$elements.element_name exists");
    assert_eq!(error.kind(), Some(&expected_kind));
    assert_eq!(error.to_string(), r#"Unknown element "element_name""#);
    assert_eq!(error.context(), Some(&expected));

    // check the displayed error
    let webcheck_error = WebcheckError::from_error(&error);
    assert_eq!(webcheck_error.message(), error.message());
    assert_eq!(webcheck_error.context(), &expected);
}

#[rstest]
#[case::self_import(vec![("start", "start")], "start", "start")]
#[case::longer_cycle(vec![("one", "two"), ("two", "three"), ("three", "two")], "one", "two")]
fn circular_step_imports(
    #[case] imports: Vec<(&str, &str)>,
    #[case] root_import: &str,
    #[case] repeated: &str,
) {
    // create the importable steps
    let steps: StepProvider = imports
        .into_iter()
        .map(|(name, import)| {
            let step = Step::pending_import(StepBody::default(), import, "");
            (StepName::new(name), step)
        })
        .collect();
    let test = single_step_test(Step::pending_import(StepBody::default(), root_import, ""));
    let resolver = Resolver::new(PageProvider::empty(), steps, DataSetProvider::empty());

    // resolve the suite
    let error = resolver
        .resolve_test_suite(&suite(vec![test]))
        .expect_err("resolution should fail");

    // check the repeated step is reported, without context
    let ResolutionError::CircularImport(circular) = &error else {
        panic!("expected circular import error, got {error:?}");
    };
    let message = format!("Circular step import \"{repeated}\"");
    assert_eq!(circular.step(), &StepName::new(repeated));
    assert_eq!(error.to_string(), message);
    assert_eq!(error.context(), None);
}

#[test]
fn resolved_steps_have_empty_scope() {
    let scope = IdentifierScope::new().with_identifier(ELEMENT_NAME, selector().into());
    let first = StepBody::new(vec![click_element()], vec![]).with_identifiers(scope.clone());
    let second = StepBody::new(vec![wait("1")], vec![]).with_identifiers(scope);
    let steps = IndexMap::from([
        (StepName::new("first"), Step::Resolved(first)),
        (StepName::new("second"), Step::pending_import(second, "", "")),
    ]);
    let configuration = Configuration::new("chrome", "page_import_name.url");
    let test = Test::new("test name", configuration, steps);
    let resolver = Resolver::new(
        page_provider(),
        StepProvider::empty(),
        DataSetProvider::empty(),
    );

    let resolved = resolver
        .resolve_test_suite(&suite(vec![test]))
        .expect("resolution should succeed");

    let test = &resolved.tests()[0];
    assert_eq!(test.configuration().url(), "http://example.com/");
    for step in test.steps().values() {
        assert!(matches!(step, Step::Resolved(_)));
        assert!(step.body().identifiers().is_empty());
    }
}

#[test]
fn imported_steps_come_first() {
    // create a parent step, itself importing a grandparent
    let grandparent_assertion = exists("\".a\" exists", Value::Element(selector()));
    let grandparent = Step::new(vec![wait("1")], vec![grandparent_assertion]);
    let parent_assertion = exists("\".b\" exists", Value::literal("b"));
    let parent_body = StepBody::new(vec![wait("2")], vec![parent_assertion]);
    let parent = Step::pending_import(parent_body, "grandparent", "");
    let steps = StepProvider::new()
        .with_step("grandparent", grandparent)
        .with_step("parent", parent);

    // create the data provider
    let values = IndexMap::from([("name".to_string(), "alice".to_string())]);
    let users = DataSetCollection::new(vec![DataSet::new("alice", values)]);
    let data_sets = DataSetProvider::new().with_collection("users", users.clone());

    // create a test importing the parent and the data provider
    let child_assertion = exists("\".c\" exists", Value::literal("c"));
    let child_body = StepBody::new(vec![wait("3")], vec![child_assertion]);
    let child = Step::pending_import(child_body, "parent", "users");
    let resolver = Resolver::new(PageProvider::empty(), steps, data_sets);

    // resolve the test
    let resolved = resolver
        .resolve_test(&single_step_test(child))
        .expect("resolution should succeed");

    // check the merged order and the attached data sets
    let step = resolved
        .step(&StepName::new("step name"))
        .expect("step should be kept");
    let actions: Vec<_> = step.body().actions().iter().map(Action::source).collect();
    let assertions: Vec<_> = step
        .body()
        .assertions()
        .iter()
        .map(Assertion::source)
        .collect();
    assert_eq!(actions, ["wait 1", "wait 2", "wait 3"]);
    assert_eq!(
        assertions,
        ["\".a\" exists", "\".b\" exists", "\".c\" exists"]
    );
    assert_eq!(step.body().data_sets(), Some(&users));
}

#[test]
fn resolution_is_idempotent() {
    // create a test mixing every kind of reference
    let scope = IdentifierScope::new().with_identifier(ELEMENT_NAME, selector().into());
    let input = Action::input(
        "set $elements.element_name to \"text\"",
        Identifier::element_reference(ELEMENT_NAME),
        Value::literal("text"),
    );
    let title_exists = exists(
        "$elements.element_name.title exists",
        Value::attribute_reference("element_name.title"),
    );
    let actions = vec![click_page_element(), input];
    let body = StepBody::new(actions, vec![title_exists]).with_identifiers(scope);
    let suite = suite(vec![single_step_test(Step::Resolved(body))]);
    let resolver = Resolver::new(
        page_provider(),
        StepProvider::empty(),
        DataSetProvider::empty(),
    );

    // resolve twice
    let once = resolver
        .resolve_test_suite(&suite)
        .expect("resolution should succeed");
    let twice = resolver
        .resolve_test_suite(&once)
        .expect("resolution should succeed");

    // check nothing changed the second time
    assert_eq!(once, twice);
    assert_eq!(once.name(), "suite name");
}

#[test]
fn concrete_value_is_borrowed() {
    let value = Value::Element(selector());
    let pages = PageProvider::empty();
    let scope = IdentifierScope::new();

    let resolved = resolve_value(&value, &pages, &scope).expect("resolution should succeed");

    assert!(matches!(resolved, std::borrow::Cow::Borrowed(_)));
}
