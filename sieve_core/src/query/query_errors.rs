//! Error types for condition validation and query translation

use std::fmt;

/// Errors that can occur while validating conditions or building a query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Condition type is not one of the known value types
    UnsupportedType {
        value_type: String,
        supported: Vec<String>,
    },
    /// Logical operator is neither `and` nor `or`
    UnsupportedLogicalOperator {
        operator: String,
        supported: Vec<String>,
    },
    /// Comparison operator is not allowed for the condition type.
    /// `value_type` is `None` when the operator is not recognized at all.
    UnsupportedComparisonOperator {
        value_type: Option<String>,
        operator: String,
        supported: Vec<String>,
    },
    /// The finished document could not be serialized
    Serialization(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnsupportedType {
                value_type,
                supported,
            } => {
                write!(
                    f,
                    "Unsupported data type '{}'. Supported: {}",
                    value_type,
                    supported.join(", ")
                )
            }
            QueryError::UnsupportedLogicalOperator {
                operator,
                supported,
            } => {
                write!(
                    f,
                    "Unsupported logical operator '{}'. Supported: {}",
                    operator,
                    supported.join(", ")
                )
            }
            QueryError::UnsupportedComparisonOperator {
                value_type: Some(value_type),
                operator,
                supported,
            } => {
                write!(
                    f,
                    "Cannot use '{}' operator on {} conditions. Supported: {}",
                    operator,
                    value_type,
                    supported.join(", ")
                )
            }
            QueryError::UnsupportedComparisonOperator {
                value_type: None,
                operator,
                supported,
            } => {
                write!(
                    f,
                    "Unsupported comparison operator '{}'. Supported: {}",
                    operator,
                    supported.join(", ")
                )
            }
            QueryError::Serialization(message) => {
                write!(f, "Query could not be serialized: {}", message)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl From<serde_json::Error> for QueryError {
    fn from(error: serde_json::Error) -> Self {
        QueryError::Serialization(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_comparison_operator_for_type() {
        let error = QueryError::UnsupportedComparisonOperator {
            value_type: Some("date".to_string()),
            operator: "eq".to_string(),
            supported: vec!["lt".to_string(), "gte".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "Cannot use 'eq' operator on date conditions. Supported: lt, gte"
        );
    }

    #[test]
    fn test_display_unknown_comparison_operator() {
        let error = QueryError::UnsupportedComparisonOperator {
            value_type: None,
            operator: "between".to_string(),
            supported: vec!["eq".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "Unsupported comparison operator 'between'. Supported: eq"
        );
    }

    #[test]
    fn test_display_unsupported_type() {
        let error = QueryError::UnsupportedType {
            value_type: "geo".to_string(),
            supported: vec!["text".to_string(), "number".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "Unsupported data type 'geo'. Supported: text, number"
        );
    }
}
