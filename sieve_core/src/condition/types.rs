//! Typed names for condition types and operators

use std::fmt;
use std::str::FromStr;

use crate::query::QueryError;

/// Semantic domain of a condition value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Text,
    Number,
    Array,
    Date,
}

impl ValueType {
    pub const ALL: [ValueType; 4] = [
        ValueType::Text,
        ValueType::Number,
        ValueType::Array,
        ValueType::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Number => "number",
            ValueType::Array => "array",
            ValueType::Date => "date",
        }
    }

    /// Comparison operators that may be used with this type
    pub fn allowed_operators(&self) -> &'static [ComparisonOperator] {
        use ComparisonOperator::*;

        match self {
            ValueType::Text => &[Eq, Neq, Like, Nlike],
            ValueType::Number => &[Eq, Neq, Lt, Lte, Gt, Gte],
            ValueType::Array => &[In, Nin],
            ValueType::Date => &[Lt, Lte, Gt, Gte],
        }
    }

    pub fn allows(&self, operator: ComparisonOperator) -> bool {
        self.allowed_operators().contains(&operator)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::ALL
            .into_iter()
            .find(|value_type| value_type.as_str() == s)
            .ok_or_else(|| QueryError::UnsupportedType {
                value_type: s.to_string(),
                supported: names(&ValueType::ALL, ValueType::as_str),
            })
    }
}

/// The predicate test a condition applies to its field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Eq,
    Neq,
    Like,
    Nlike,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Nin,
}

impl ComparisonOperator {
    pub const ALL: [ComparisonOperator; 10] = [
        ComparisonOperator::Eq,
        ComparisonOperator::Neq,
        ComparisonOperator::Like,
        ComparisonOperator::Nlike,
        ComparisonOperator::Lt,
        ComparisonOperator::Lte,
        ComparisonOperator::Gt,
        ComparisonOperator::Gte,
        ComparisonOperator::In,
        ComparisonOperator::Nin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "eq",
            ComparisonOperator::Neq => "neq",
            ComparisonOperator::Like => "like",
            ComparisonOperator::Nlike => "nlike",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Lte => "lte",
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Gte => "gte",
            ComparisonOperator::In => "in",
            ComparisonOperator::Nin => "nin",
        }
    }

    /// Negating operators always exclude, whatever the logical operator says.
    pub fn is_negating(&self) -> bool {
        matches!(
            self,
            ComparisonOperator::Neq | ComparisonOperator::Nlike | ComparisonOperator::Nin
        )
    }

    /// The range bound this operator maps to, if it is a range operator
    pub fn range_bound(&self) -> Option<RangeBound> {
        match self {
            ComparisonOperator::Lt => Some(RangeBound::Lt),
            ComparisonOperator::Lte => Some(RangeBound::Lte),
            ComparisonOperator::Gt => Some(RangeBound::Gt),
            ComparisonOperator::Gte => Some(RangeBound::Gte),
            _ => None,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOperator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonOperator::ALL
            .into_iter()
            .find(|operator| operator.as_str() == s)
            .ok_or_else(|| QueryError::UnsupportedComparisonOperator {
                value_type: None,
                operator: s.to_string(),
                supported: names(&ComparisonOperator::ALL, ComparisonOperator::as_str),
            })
    }
}

/// Logical operator deciding which bucket a non-negating condition joins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub const ALL: [LogicalOperator; 2] = [LogicalOperator::And, LogicalOperator::Or];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalOperator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogicalOperator::ALL
            .into_iter()
            .find(|operator| operator.as_str() == s)
            .ok_or_else(|| QueryError::UnsupportedLogicalOperator {
                operator: s.to_string(),
                supported: names(&LogicalOperator::ALL, LogicalOperator::as_str),
            })
    }
}

/// Bound of a range fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeBound {
    Lt,
    Lte,
    Gt,
    Gte,
}

impl RangeBound {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeBound::Lt => "lt",
            RangeBound::Lte => "lte",
            RangeBound::Gt => "gt",
            RangeBound::Gte => "gte",
        }
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn names<T>(items: &[T], name: fn(&T) -> &'static str) -> Vec<String> {
    items.iter().map(|item| name(item).to_string()).collect()
}
