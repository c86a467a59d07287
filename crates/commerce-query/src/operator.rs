use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a query condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryOperatorType {
	GreaterThan,
	LessThan,
	GreaterThanEqual,
	LessThanEqual,
	NotEqual,
	Equal,
	/// Case-insensitive pattern match on the literal as given
	Match,
	/// Case-insensitive contains (`%literal%`)
	MatchBetween,
	/// Case-insensitive suffix (`%literal`)
	MatchBefore,
	/// Case-insensitive prefix (`literal%`)
	MatchEnd,
	/// Equality against the identifier of a referenced object
	EqualObjectUuid,
	/// Inclusive range over two values
	Between,
}

impl QueryOperatorType {
	pub const ALL: [QueryOperatorType; 12] = [
		QueryOperatorType::GreaterThan,
		QueryOperatorType::LessThan,
		QueryOperatorType::GreaterThanEqual,
		QueryOperatorType::LessThanEqual,
		QueryOperatorType::NotEqual,
		QueryOperatorType::Equal,
		QueryOperatorType::Match,
		QueryOperatorType::MatchBetween,
		QueryOperatorType::MatchBefore,
		QueryOperatorType::MatchEnd,
		QueryOperatorType::EqualObjectUuid,
		QueryOperatorType::Between,
	];

	/// Number of values a condition with this operator carries
	pub fn arity(&self) -> usize {
		if self.is_range() { 2 } else { 1 }
	}

	pub fn is_range(&self) -> bool {
		matches!(self, QueryOperatorType::Between)
	}

	pub fn is_pattern(&self) -> bool {
		matches!(
			self,
			QueryOperatorType::Match
				| QueryOperatorType::MatchBetween
				| QueryOperatorType::MatchBefore
				| QueryOperatorType::MatchEnd
		)
	}

	pub fn is_ordering(&self) -> bool {
		matches!(
			self,
			QueryOperatorType::GreaterThan
				| QueryOperatorType::LessThan
				| QueryOperatorType::GreaterThanEqual
				| QueryOperatorType::LessThanEqual
		)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			QueryOperatorType::GreaterThan => "GREATER_THAN",
			QueryOperatorType::LessThan => "LESS_THAN",
			QueryOperatorType::GreaterThanEqual => "GREATER_THAN_EQUAL",
			QueryOperatorType::LessThanEqual => "LESS_THAN_EQUAL",
			QueryOperatorType::NotEqual => "NOT_EQUAL",
			QueryOperatorType::Equal => "EQUAL",
			QueryOperatorType::Match => "MATCH",
			QueryOperatorType::MatchBetween => "MATCH_BETWEEN",
			QueryOperatorType::MatchBefore => "MATCH_BEFORE",
			QueryOperatorType::MatchEnd => "MATCH_END",
			QueryOperatorType::EqualObjectUuid => "EQUAL_OBJECT_UUID",
			QueryOperatorType::Between => "BETWEEN",
		}
	}
}

impl fmt::Display for QueryOperatorType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
