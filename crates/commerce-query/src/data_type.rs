//! Semantic data types of queryable fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a registry field
///
/// Drives operator validation when a condition is accepted and value
/// coercion when a search payload is translated or a predicate is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
	String,
	Integer,
	Long,
	Double,
	Float,
	Date,
	Enum,
	Uuid,
	Boolean,
}

impl DataType {
	pub const ALL: [DataType; 9] = [
		DataType::String,
		DataType::Integer,
		DataType::Long,
		DataType::Double,
		DataType::Float,
		DataType::Date,
		DataType::Enum,
		DataType::Uuid,
		DataType::Boolean,
	];

	/// Types a BETWEEN condition can range over
	pub fn supports_range(&self) -> bool {
		matches!(
			self,
			DataType::Date | DataType::Long | DataType::Integer | DataType::Double | DataType::Float
		)
	}

	pub fn is_numeric(&self) -> bool {
		matches!(
			self,
			DataType::Integer | DataType::Long | DataType::Double | DataType::Float
		)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			DataType::String => "STRING",
			DataType::Integer => "INTEGER",
			DataType::Long => "LONG",
			DataType::Double => "DOUBLE",
			DataType::Float => "FLOAT",
			DataType::Date => "DATE",
			DataType::Enum => "ENUM",
			DataType::Uuid => "UUID",
			DataType::Boolean => "BOOLEAN",
		}
	}
}

impl fmt::Display for DataType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
