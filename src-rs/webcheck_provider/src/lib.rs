#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Reference lookup implementations for the webcheck resolver

mod data_set;
mod page;
mod step;

pub use data_set::DataSetProvider;
pub use page::PageProvider;
pub use step::StepProvider;
