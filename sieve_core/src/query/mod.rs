//! Translation of conditions into search-engine bool queries
//!
//! This module provides:
//! - Query fragments for single conditions (term, terms, match, range)
//! - The bool query accumulator and its `{"query":{"bool":...}}` envelope
//! - The translator folding a condition list into a document

mod bool_query;
mod fragment;
mod query_errors;
mod translate;

pub use bool_query::*;
pub use fragment::QueryFragment;
pub use query_errors::QueryError;
pub use translate::{CaseMode, Translator, translate};
