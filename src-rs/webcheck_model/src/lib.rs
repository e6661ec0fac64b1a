#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Model tree for webcheck browser test specifications

mod action;
mod assertion;
mod configuration;
mod data_set;
mod identifier;
mod name;
mod page;
mod scope;
mod step;
mod value;

pub use action::{Action, ActionKind, InteractionVerb, NoArgumentsVerb};
pub use assertion::{Assertion, Comparison, Existence, Expectation};
pub use configuration::{Configuration, PageUrlReference};
pub use data_set::{DataSet, DataSetCollection};
pub use identifier::{DomIdentifier, Identifier, PageElementReference, Selector};
pub use name::{DataProviderName, ElementName, PageName, StepName, TestName};
pub use page::Page;
pub use scope::IdentifierScope;
pub use step::{PendingImport, Step, StepBody};
pub use test::{Test, TestSuite};
pub use value::{AttributeReference, ObjectKind, ObjectProperty, Value};
