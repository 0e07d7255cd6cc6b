use log::debug;

use super::types::{ComparisonOperator, LogicalOperator, ValueType, names};
use super::Condition;
use crate::query::QueryError;

/// Validates every condition, stopping at the first invalid one.
///
/// Names are matched case-sensitively against their lower-case forms.
pub fn validate(conditions: &[Condition]) -> Result<(), QueryError> {
    debug!("Validating {} conditions", conditions.len());

    for (index, condition) in conditions.iter().enumerate() {
        if let Err(error) = validate_condition(condition) {
            debug!(
                "Condition {} on '{}' failed validation: {}",
                index, condition.key, error
            );
            return Err(error);
        }
    }

    Ok(())
}

/// Validates a single condition.
///
/// Checks the type first, then the logical operator, then whether the
/// comparison operator is allowed for the type.
pub fn validate_condition(condition: &Condition) -> Result<(), QueryError> {
    let value_type: ValueType = condition.value_type.parse()?;
    condition.logical_operator.parse::<LogicalOperator>()?;

    let allowed = value_type.allowed_operators();
    let permitted = condition
        .comparison_operator
        .parse::<ComparisonOperator>()
        .is_ok_and(|operator| allowed.contains(&operator));

    if permitted {
        Ok(())
    } else {
        Err(QueryError::UnsupportedComparisonOperator {
            value_type: Some(value_type.to_string()),
            operator: condition.comparison_operator.clone(),
            supported: names(allowed, ComparisonOperator::as_str),
        })
    }
}
