//! Start-tag extraction for HTML documents.
//!
//! [`tokenize`] turns markup into a [`TagStream`]: the names of all start tags in document
//! order. [`Tokenizer`] is the same scan exposed as a lazy iterator.

pub mod perf_fixtures;

mod tokenizer;
mod types;

pub use crate::tokenizer::Tokenizer;
pub use crate::tokenizer::tokenize;
pub use crate::types::{TagName, TagStream};
