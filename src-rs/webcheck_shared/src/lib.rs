#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Shared utilities for webcheck

pub mod error;
