//! Query conditions
//!
//! A condition is a single filter unit: target field, operator and one or two
//! literal values. Field and operator are fixed at construction; the values
//! can only be rewritten by the specification pre-passes inside this crate.

use crate::error::{QueryError, QueryResult};
use crate::operator::QueryOperatorType;
use crate::value::QueryValue;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryCondition {
	field: String,
	operator: QueryOperatorType,
	values: Vec<QueryValue>,
}

impl QueryCondition {
	/// Create a condition from its parts
	///
	/// # Examples
	///
	/// ```
	/// use commerce_query::{QueryCondition, QueryOperatorType, QueryValue};
	///
	/// let condition = QueryCondition::new(
	///     "extension",
	///     QueryOperatorType::Equal,
	///     vec![QueryValue::from("jpg")],
	/// );
	/// assert_eq!(condition.field(), "extension");
	/// assert_eq!(condition.values().len(), 1);
	/// ```
	pub fn new(
		field: impl Into<String>,
		operator: QueryOperatorType,
		values: Vec<QueryValue>,
	) -> Self {
		Self {
			field: field.into(),
			operator,
			values,
		}
	}

	/// Condition carrying exactly one value
	pub fn single(
		field: impl Into<String>,
		operator: QueryOperatorType,
		value: impl Into<QueryValue>,
	) -> Self {
		Self::new(field, operator, vec![value.into()])
	}

	/// Inclusive BETWEEN condition
	///
	/// # Examples
	///
	/// ```
	/// use commerce_query::{QueryCondition, QueryOperatorType};
	///
	/// let condition = QueryCondition::between("contentLength", 34000i64, 35000i64);
	/// assert_eq!(condition.operator(), QueryOperatorType::Between);
	/// assert_eq!(condition.values().len(), 2);
	/// ```
	pub fn between(
		field: impl Into<String>,
		lower: impl Into<QueryValue>,
		upper: impl Into<QueryValue>,
	) -> Self {
		Self::new(
			field,
			QueryOperatorType::Between,
			vec![lower.into(), upper.into()],
		)
	}

	pub fn equal(field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
		Self::single(field, QueryOperatorType::Equal, value)
	}

	pub fn field(&self) -> &str {
		&self.field
	}

	pub fn operator(&self) -> QueryOperatorType {
		self.operator
	}

	pub fn values(&self) -> &[QueryValue] {
		&self.values
	}

	pub fn first_value(&self) -> Option<&QueryValue> {
		self.values.first()
	}

	pub(crate) fn values_mut(&mut self) -> &mut Vec<QueryValue> {
		&mut self.values
	}

	/// Structural checks that need no registry
	///
	/// Rejects an empty field name, an empty value list and a value count
	/// that does not match the operator's arity.
	pub fn validate_shape(&self) -> QueryResult<()> {
		if self.field.trim().is_empty() {
			return Err(QueryError::MalformedCondition(
				"field name is missing".to_string(),
			));
		}
		if self.values.is_empty() {
			return Err(QueryError::MalformedCondition(format!(
				"no values given for field '{}'",
				self.field
			)));
		}
		let expected = self.operator.arity();
		if self.values.len() != expected {
			return Err(QueryError::MalformedCondition(format!(
				"{} on field '{}' takes {} value(s), got {}",
				self.operator,
				self.field,
				expected,
				self.values.len()
			)));
		}
		Ok(())
	}
}

impl fmt::Display for QueryCondition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let values = self
			.values
			.iter()
			.map(QueryValue::to_literal)
			.collect::<Vec<_>>()
			.join(", ");
		write!(f, "{} {} [{}]", self.field, self.operator, values)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_valid_shapes() {
		assert!(QueryCondition::equal("name", "x").validate_shape().is_ok());
		assert!(
			QueryCondition::between("contentLength", 1i64, 2i64)
				.validate_shape()
				.is_ok()
		);
	}

	#[rstest]
	#[case(QueryCondition::new("", QueryOperatorType::Equal, vec![QueryValue::from("x")]))]
	#[case(QueryCondition::new("  ", QueryOperatorType::Equal, vec![QueryValue::from("x")]))]
	#[case(QueryCondition::new("name", QueryOperatorType::Equal, vec![]))]
	#[case(QueryCondition::new("name", QueryOperatorType::Equal, vec![QueryValue::from("a"), QueryValue::from("b")]))]
	#[case(QueryCondition::new("contentLength", QueryOperatorType::Between, vec![QueryValue::Long(1)]))]
	fn test_malformed_shapes(#[case] condition: QueryCondition) {
		assert!(matches!(
			condition.validate_shape(),
			Err(QueryError::MalformedCondition(_))
		));
	}

	#[test]
	fn test_display() {
		let condition = QueryCondition::between("contentLength", 1i64, 2i64);
		assert_eq!(condition.to_string(), "contentLength BETWEEN [1, 2]");
	}
}
