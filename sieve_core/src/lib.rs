//! Translate flat filter condition lists into search-engine bool queries.
//!
//! ```
//! use sieve_core::{Condition, translate};
//!
//! let conditions = vec![Condition::new("text", "eq", "and", "name", "dvt")];
//! let document = translate(&conditions).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(document).unwrap(),
//!     r#"{"query":{"bool":{"must":[{"term":{"name":"dvt"}}]}}}"#
//! );
//! ```

pub mod condition;
pub mod query;

pub use condition::{
    ComparisonOperator, Condition, LogicalOperator, RangeBound, ValueType, normalize, validate,
};
pub use query::{
    BoolQuery, CaseMode, Clause, QueryError, QueryFragment, SearchQuery, Translator, translate,
};
