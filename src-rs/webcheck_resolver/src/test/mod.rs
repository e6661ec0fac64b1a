//! Test utilities for the resolver.


pub use lookup::{TestDataSetLookup, TestPageLookup, TestStepLookup};
