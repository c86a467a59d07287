use crate::data_type::DataType;
use crate::operator::QueryOperatorType;
use thiserror::Error;

/// Errors raised while declaring, accepting or compiling query conditions
///
/// Every variant describes a caller or schema mistake; none is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
	#[error("Malformed condition: {0}")]
	MalformedCondition(String),

	#[error("Unknown field '{field}' for {query_type}")]
	UnknownField { field: String, query_type: String },

	#[error(
		"Operator {operator} is not allowed on field '{field}' of type {field_type}; allowed: {}",
		format_operators(.allowed)
	)]
	InvalidOperator {
		field: String,
		field_type: DataType,
		operator: QueryOperatorType,
		allowed: Vec<QueryOperatorType>,
	},

	#[error("Value '{literal}' is not a constant of {enum_name} (field '{field}')")]
	UnresolvedEnumLiteral {
		field: String,
		enum_name: String,
		literal: String,
	},

	#[error("Invalid {data_type} value for field '{field}': {value}")]
	InvalidValue {
		field: String,
		data_type: DataType,
		value: String,
	},

	#[error("BETWEEN on field '{field}' mixes {lower} and {upper} values")]
	RangeTypeMismatch {
		field: String,
		lower: DataType,
		upper: DataType,
	},

	#[error("BETWEEN on field '{field}' does not support {data_type} values")]
	UnsupportedRangeType { field: String, data_type: DataType },

	#[error("Field '{0}' is declared more than once")]
	DuplicateField(String),

	#[error("Invalid declaration of field '{field}': {reason}")]
	InvalidFieldDeclaration { field: String, reason: String },

	#[error("Invalid search payload: {0}")]
	InvalidPayload(String),

	#[error("Invalid pattern: {0}")]
	Pattern(String),
}

pub type QueryResult<T> = Result<T, QueryError>;

fn format_operators(operators: &[QueryOperatorType]) -> String {
	operators
		.iter()
		.map(|op| op.to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

impl From<regex::Error> for QueryError {
	fn from(e: regex::Error) -> Self {
		QueryError::Pattern(e.to_string())
	}
}

impl From<serde_json::Error> for QueryError {
	fn from(e: serde_json::Error) -> Self {
		QueryError::InvalidPayload(e.to_string())
	}
}
