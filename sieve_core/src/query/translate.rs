//! Translation of condition lists into search documents

use log::debug;

use super::bool_query::{BoolQuery, SearchQuery};
use super::QueryError;
use crate::condition::{normalize, validate, Condition};

/// How the names of types and operators are matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Validate first, then lower-case. Names must already be lower case.
    #[default]
    Strict,
    /// Lower-case first, then validate. Accepts names in any case.
    Insensitive,
}

/// Validates conditions and folds them into a bool query document
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    case_mode: CaseMode,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_mode(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = case_mode;
        self
    }

    pub fn case_mode(&self) -> CaseMode {
        self.case_mode
    }

    /// Validate, normalize and translate conditions into a search document.
    ///
    /// Fails on the first invalid condition; nothing is produced in that case.
    pub fn build(&self, conditions: &[Condition]) -> Result<SearchQuery, QueryError> {
        let conditions = match self.case_mode {
            CaseMode::Strict => {
                validate(conditions)?;
                normalize(conditions)
            }
            CaseMode::Insensitive => {
                let normalized = normalize(conditions);
                validate(&normalized)?;
                normalized
            }
        };

        let bool_query = conditions
            .iter()
            .try_fold(BoolQuery::new(), BoolQuery::with_condition)?;

        debug!(
            "Built bool query: {} must, {} must_not, {} should",
            bool_query.must.len(),
            bool_query.must_not.len(),
            bool_query.should.len()
        );

        Ok(bool_query.into())
    }

    /// Translate conditions into compact JSON bytes
    pub fn translate(&self, conditions: &[Condition]) -> Result<Vec<u8>, QueryError> {
        self.build(conditions)?.to_bytes()
    }

    /// Translate conditions into indented JSON bytes
    pub fn translate_pretty(&self, conditions: &[Condition]) -> Result<Vec<u8>, QueryError> {
        self.build(conditions)?.to_bytes_pretty()
    }
}

/// Translate conditions with the default (strict) settings
pub fn translate(conditions: &[Condition]) -> Result<Vec<u8>, QueryError> {
    Translator::new().translate(conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn translate_str(translator: Translator, conditions: &[Condition]) -> Result<String, QueryError> {
        translator
            .translate(conditions)
            .map(|bytes| String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn test_strict_rejects_mixed_case() {
        let conditions = [Condition::new("Text", "EQ", "And", "name", "dvt")];

        assert_matches!(
            translate_str(Translator::new(), &conditions),
            Err(QueryError::UnsupportedType { .. })
        );
    }

    #[test]
    fn test_insensitive_accepts_mixed_case() {
        let conditions = [Condition::new("Text", "EQ", "And", "name", "dvt")];
        let translator = Translator::new().with_case_mode(CaseMode::Insensitive);

        assert_eq!(
            translate_str(translator, &conditions).unwrap(),
            r#"{"query":{"bool":{"must":[{"term":{"name":"dvt"}}]}}}"#
        );
    }

    #[test]
    fn test_insensitive_keeps_key_case() {
        let conditions = [Condition::new("NUMBER", "GTE", "OR", "MaxAge", 18)];
        let translator = Translator::new().with_case_mode(CaseMode::Insensitive);

        assert_eq!(
            translate_str(translator, &conditions).unwrap(),
            r#"{"query":{"bool":{"should":[{"range":{"MaxAge":{"gte":18}}}]}}}"#
        );
    }

    #[test]
    fn test_default_case_mode_is_strict() {
        assert_eq!(Translator::new().case_mode(), CaseMode::Strict);
    }

    #[test]
    fn test_pretty_output_parses_to_same_document() {
        let conditions = [Condition::new("text", "like", "or", "summary", "already")];
        let compact: serde_json::Value =
            serde_json::from_slice(&Translator::new().translate(&conditions).unwrap()).unwrap();
        let pretty_bytes = Translator::new().translate_pretty(&conditions).unwrap();
        let pretty: serde_json::Value = serde_json::from_slice(&pretty_bytes).unwrap();

        assert_eq!(compact, pretty);
        assert!(pretty_bytes.contains(&b'\n'));
    }
}
