//! One resolver per level of the model tree.
//!
//! Resolution runs top-down (suite, test, step, action or assertion,
//! identifier or value) and errors travel back up, picking up context at the
//! step and test levels. Leaf resolvers return [`std::borrow::Cow`]: a
//! borrowed result means the node had nothing to resolve.

mod resolve_action;
mod resolve_assertion;
mod resolve_configuration;
mod resolve_identifier;
mod resolve_page_element;
mod resolve_step;
mod resolve_step_import;
mod resolve_test_suite;
mod resolve_value;

pub use resolve_action::resolve_action;
pub use resolve_assertion::resolve_assertion;
pub use resolve_configuration::resolve_configuration;
pub use resolve_identifier::resolve_identifier;
pub use resolve_page_element::resolve_page_element_reference;
pub use resolve_step::resolve_step;
pub use resolve_step_import::{resolve_data_provider_import, resolve_step_import};
pub use resolve_test::resolve_test;
pub use resolve_test_suite::resolve_test_suite;
pub use resolve_value::resolve_value;
