//! Bool query accumulator and the document envelope around it

use log::debug;
use serde::Serialize;

use super::fragment::QueryFragment;
use super::QueryError;
use crate::condition::{ComparisonOperator, Condition, LogicalOperator};

/// The bucket of a bool query a fragment is placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Must,
    MustNot,
    Should,
}

impl Clause {
    /// Pick the bucket for a condition.
    ///
    /// Negating operators always land in `must_not`, and the logical
    /// operator is not looked at for them.
    pub fn route(operator: ComparisonOperator, logical_operator: &str) -> Result<Self, QueryError> {
        if operator.is_negating() {
            return Ok(Clause::MustNot);
        }

        match logical_operator.parse::<LogicalOperator>()? {
            LogicalOperator::And => Ok(Clause::Must),
            LogicalOperator::Or => Ok(Clause::Should),
        }
    }
}

/// Accumulates fragments into `must`, `must_not` and `should` buckets.
/// Empty buckets are left out when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<QueryFragment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must_not: Vec<QueryFragment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<QueryFragment>,
}

impl BoolQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment to the end of a bucket
    pub fn with_fragment(mut self, clause: Clause, fragment: QueryFragment) -> Self {
        match clause {
            Clause::Must => self.must.push(fragment),
            Clause::MustNot => self.must_not.push(fragment),
            Clause::Should => self.should.push(fragment),
        }
        self
    }

    /// Translate one condition and add its fragment to the right bucket.
    ///
    /// Operator names are parsed here as well, so a condition that skipped
    /// validation still fails instead of producing a malformed fragment.
    pub fn with_condition(self, condition: &Condition) -> Result<Self, QueryError> {
        let operator: ComparisonOperator = condition.comparison_operator.parse()?;
        let fragment = QueryFragment::from_parts(operator, &condition.key, condition.value.clone());
        let clause = Clause::route(operator, &condition.logical_operator)?;

        debug!(
            "Routing {} fragment on '{}' to {:?}",
            fragment.kind(),
            condition.key,
            clause
        );

        Ok(self.with_fragment(clause, fragment))
    }

    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.must_not.is_empty() && self.should.is_empty()
    }

    /// Total number of fragments across all buckets
    pub fn len(&self) -> usize {
        self.must.len() + self.must_not.len() + self.should.len()
    }
}

/// The full search document: `{"query":{"bool":{...}}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchQuery {
    pub query: QueryBody,
}

/// Body of the `query` key
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryBody {
    #[serde(rename = "bool")]
    pub bool_query: BoolQuery,
}

impl From<BoolQuery> for SearchQuery {
    fn from(bool_query: BoolQuery) -> Self {
        Self {
            query: QueryBody { bool_query },
        }
    }
}

impl SearchQuery {
    pub fn bool_query(&self) -> &BoolQuery {
        &self.query.bool_query
    }

    /// Serialize the document to compact JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, QueryError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Serialize the document to indented JSON bytes
    pub fn to_bytes_pretty(&self) -> Result<Vec<u8>, QueryError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_route_negating_ignores_logical_operator() {
        for operator in [
            ComparisonOperator::Neq,
            ComparisonOperator::Nlike,
            ComparisonOperator::Nin,
        ] {
            assert_eq!(Clause::route(operator, "and"), Ok(Clause::MustNot));
            assert_eq!(Clause::route(operator, "or"), Ok(Clause::MustNot));
            assert_eq!(Clause::route(operator, "whatever"), Ok(Clause::MustNot));
        }
    }

    #[test]
    fn test_route_by_logical_operator() {
        assert_eq!(Clause::route(ComparisonOperator::Eq, "and"), Ok(Clause::Must));
        assert_eq!(Clause::route(ComparisonOperator::Like, "or"), Ok(Clause::Should));
        assert_eq!(Clause::route(ComparisonOperator::In, "or"), Ok(Clause::Should));
    }

    #[test]
    fn test_route_unknown_logical_operator() {
        assert_matches!(
            Clause::route(ComparisonOperator::Gt, "xor"),
            Err(QueryError::UnsupportedLogicalOperator { operator, .. }) if operator == "xor"
        );
    }

    #[test]
    fn test_with_condition_unknown_comparison_operator() {
        let result = BoolQuery::new().with_condition(&Condition::new("text", "is", "and", "name", "x"));

        assert_matches!(
            result,
            Err(QueryError::UnsupportedComparisonOperator { value_type: None, operator, .. })
                if operator == "is"
        );
    }

    #[test]
    fn test_with_condition_routes_each_bucket() {
        let query = BoolQuery::new()
            .with_condition(&Condition::new("text", "eq", "and", "name", "dvt"))
            .and_then(|q| q.with_condition(&Condition::new("text", "nlike", "or", "summary", "x")))
            .and_then(|q| q.with_condition(&Condition::new("number", "lt", "or", "age", 30)))
            .unwrap();

        assert_eq!(query.must.len(), 1);
        assert_eq!(query.must_not.len(), 1);
        assert_eq!(query.should.len(), 1);
        assert_eq!(query.len(), 3);
        assert_eq!(query.must_not[0].kind(), "match");
        assert_eq!(query.should[0].kind(), "range");
    }

    #[test]
    fn test_empty_buckets_are_omitted() {
        let query = BoolQuery::new().with_fragment(
            Clause::Should,
            QueryFragment::from_parts(ComparisonOperator::Eq, "name", json!("dvt")),
        );

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"should": [{"term": {"name": "dvt"}}]})
        );
    }

    #[test]
    fn test_empty_document() {
        let document = SearchQuery::from(BoolQuery::new());

        assert!(document.bool_query().is_empty());
        assert_eq!(document.to_bytes().unwrap(), br#"{"query":{"bool":{}}}"#.to_vec());
    }

    #[test]
    fn test_bucket_key_order() {
        let query = BoolQuery::new()
            .with_fragment(
                Clause::Should,
                QueryFragment::from_parts(ComparisonOperator::Eq, "c", json!(3)),
            )
            .with_fragment(
                Clause::MustNot,
                QueryFragment::from_parts(ComparisonOperator::Neq, "b", json!(2)),
            )
            .with_fragment(
                Clause::Must,
                QueryFragment::from_parts(ComparisonOperator::Eq, "a", json!(1)),
            );

        let bytes = SearchQuery::from(query).to_bytes().unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"query":{"bool":{"must":[{"term":{"a":1}}],"must_not":[{"term":{"b":2}}],"should":[{"term":{"c":3}}]}}}"#
        );
    }
}
