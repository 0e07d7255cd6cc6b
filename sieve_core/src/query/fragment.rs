//! Query fragments: the predicate produced for a single condition

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::condition::{ComparisonOperator, RangeBound};

/// One predicate in a bool query bucket.
///
/// Serializes as a single-key object naming the predicate kind, e.g.
/// `{"term":{"name":"dvt"}}` or `{"range":{"age":{"gte":18}}}`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryFragment {
    /// Exact value match (`eq`, `neq`)
    Term { field: String, value: Value },
    /// Match any of several values (`in`, `nin`)
    Terms { field: String, value: Value },
    /// Full-text match (`like`, `nlike`)
    Match { field: String, value: Value },
    /// Bounded comparison (`lt`, `lte`, `gt`, `gte`)
    Range {
        field: String,
        bound: RangeBound,
        value: Value,
    },
}

impl QueryFragment {
    /// Build the fragment for an operator applied to a field
    pub fn from_parts(operator: ComparisonOperator, field: impl Into<String>, value: Value) -> Self {
        let field = field.into();

        if let Some(bound) = operator.range_bound() {
            return QueryFragment::Range {
                field,
                bound,
                value,
            };
        }

        match operator {
            ComparisonOperator::In | ComparisonOperator::Nin => QueryFragment::Terms { field, value },
            ComparisonOperator::Like | ComparisonOperator::Nlike => {
                QueryFragment::Match { field, value }
            }
            _ => QueryFragment::Term { field, value },
        }
    }

    /// Name of the predicate kind, used as the fragment's key
    pub fn kind(&self) -> &'static str {
        match self {
            QueryFragment::Term { .. } => "term",
            QueryFragment::Terms { .. } => "terms",
            QueryFragment::Match { .. } => "match",
            QueryFragment::Range { .. } => "range",
        }
    }

    pub fn field(&self) -> &str {
        match self {
            QueryFragment::Term { field, .. }
            | QueryFragment::Terms { field, .. }
            | QueryFragment::Match { field, .. }
            | QueryFragment::Range { field, .. } => field,
        }
    }
}

/// A map with exactly one entry
struct SingleEntry<'a, V>(&'a str, &'a V);

impl<V: Serialize> Serialize for SingleEntry<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, self.1)?;
        map.end()
    }
}

impl Serialize for QueryFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QueryFragment::Term { field, value }
            | QueryFragment::Terms { field, value }
            | QueryFragment::Match { field, value } => {
                SingleEntry(self.kind(), &SingleEntry(field, value)).serialize(serializer)
            }
            QueryFragment::Range {
                field,
                bound,
                value,
            } => SingleEntry(
                self.kind(),
                &SingleEntry(field, &SingleEntry(bound.as_str(), value)),
            )
            .serialize(serializer),
        }
    }
}
