//! Filter conditions as supplied by callers
//!
//! A [`Condition`] keeps its type and operators as the raw strings it was
//! given. They are only turned into typed values by validation and
//! translation, so that unknown or wrongly-cased names can be reported.

mod types;
mod validation;

pub use types::*;
pub use validation::{validate, validate_condition};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single filter predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub value_type: String,
    pub comparison_operator: String,
    pub logical_operator: String,
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

impl Condition {
    /// Create a new condition
    pub fn new(
        value_type: impl Into<String>,
        comparison_operator: impl Into<String>,
        logical_operator: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            value_type: value_type.into(),
            comparison_operator: comparison_operator.into(),
            logical_operator: logical_operator.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns a copy with type and operators lower-cased.
    /// Key and value are left untouched.
    pub fn normalized(&self) -> Self {
        Self {
            value_type: self.value_type.to_lowercase(),
            comparison_operator: self.comparison_operator.to_lowercase(),
            logical_operator: self.logical_operator.to_lowercase(),
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

/// Lower-case the type and operators of every condition
pub fn normalize(conditions: &[Condition]) -> Vec<Condition> {
    conditions.iter().map(Condition::normalized).collect()
}
