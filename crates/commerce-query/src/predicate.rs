//! Compiled predicates and their in-memory evaluation

use crate::data_type::DataType;
use crate::error::QueryResult;
use crate::value::QueryValue;
use commerce_core::EntityType;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// A record a predicate can be evaluated against
///
/// Field names are the registry names (`contentLength`, `statusType`, ...).
/// `None` stands for an unset field or a name the record does not know.
pub trait Record {
	fn entity_type(&self) -> EntityType;

	fn field_value(&self, field: &str) -> Option<QueryValue>;
}

/// Ordering operator of a comparison predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
	Gt,
	Lt,
	Gte,
	Lte,
}

impl ComparisonOperator {
	pub fn accepts(&self, ordering: Ordering) -> bool {
		match self {
			ComparisonOperator::Gt => ordering == Ordering::Greater,
			ComparisonOperator::Lt => ordering == Ordering::Less,
			ComparisonOperator::Gte => ordering != Ordering::Less,
			ComparisonOperator::Lte => ordering != Ordering::Greater,
		}
	}
}

/// Case-insensitive LIKE pattern
///
/// The wildcard character matches any run of characters and `_` matches a
/// single one; everything else matches literally. The wildcard is recognized
/// before lowercasing, so an uppercase wildcard keeps working. The pattern is
/// compiled once to an anchored regex and to the equivalent SQL pattern.
///
/// # Examples
///
/// ```
/// use commerce_query::LikePattern;
///
/// let pattern = LikePattern::new("%License%").unwrap();
/// assert!(pattern.is_match("my-license-v2.pdf"));
/// assert!(!pattern.is_match("licenced.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct LikePattern {
	pattern: String,
	wildcard: char,
	sql: String,
	regex: Regex,
}

impl LikePattern {
	/// Escape character of [`LikePattern::sql_pattern`]
	pub const SQL_ESCAPE: char = '\\';

	pub fn new(pattern: &str) -> QueryResult<Self> {
		Self::with_wildcard(pattern, '%')
	}

	pub fn with_wildcard(pattern: &str, wildcard: char) -> QueryResult<Self> {
		let mut text = String::with_capacity(pattern.len());
		let mut sql = String::with_capacity(pattern.len() + 4);
		let mut source = String::with_capacity(pattern.len() + 8);
		source.push_str("(?s)^");
		let mut buf = [0u8; 4];
		for c in pattern.chars() {
			if c == wildcard {
				text.push(c);
				sql.push('%');
				source.push_str(".*");
				continue;
			}
			for c in c.to_lowercase() {
				text.push(c);
				match c {
					'_' => {
						sql.push('_');
						source.push('.');
					}
					'%' | Self::SQL_ESCAPE => {
						sql.push(Self::SQL_ESCAPE);
						sql.push(c);
						source.push_str(&regex::escape(c.encode_utf8(&mut buf)));
					}
					_ => {
						sql.push(c);
						source.push_str(&regex::escape(c.encode_utf8(&mut buf)));
					}
				}
			}
		}
		source.push('$');
		Ok(Self {
			regex: Regex::new(&source)?,
			pattern: text,
			wildcard,
			sql,
		})
	}

	/// Pattern text, lowercased apart from wildcards
	pub fn as_str(&self) -> &str {
		&self.pattern
	}

	pub fn wildcard(&self) -> char {
		self.wildcard
	}

	/// Equivalent SQL LIKE pattern over a lowercased column
	///
	/// Wildcards become `%`; literal `%` and the escape character are
	/// escaped with [`LikePattern::SQL_ESCAPE`].
	pub fn sql_pattern(&self) -> &str {
		&self.sql
	}

	pub fn is_match(&self, text: &str) -> bool {
		self.regex.is_match(&text.to_lowercase())
	}
}

impl PartialEq for LikePattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern && self.wildcard == other.wildcard
	}
}

impl fmt::Display for LikePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.pattern)
	}
}

/// A compiled filter over records
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
	Equal {
		field: String,
		value: QueryValue,
	},
	/// Unset fields never match
	NotEqual {
		field: String,
		value: QueryValue,
	},
	/// Matched against the text form of the value; `column_type` is the
	/// declared type of the field
	Like {
		field: String,
		pattern: LikePattern,
		column_type: DataType,
	},
	Compare {
		field: String,
		op: ComparisonOperator,
		value: QueryValue,
	},
	/// Identifier of the referenced object equals `id`
	EqualObjectId {
		field: String,
		id: Uuid,
	},
	/// Inclusive on both ends
	Between {
		field: String,
		low: QueryValue,
		high: QueryValue,
	},
	And(Vec<Predicate>),
}

impl Predicate {
	pub fn compare(field: impl Into<String>, op: ComparisonOperator, value: QueryValue) -> Self {
		Predicate::Compare {
			field: field.into(),
			op,
			value,
		}
	}

	/// Field the predicate filters on; `None` for conjunctions
	pub fn field(&self) -> Option<&str> {
		match self {
			Predicate::Equal { field, .. }
			| Predicate::NotEqual { field, .. }
			| Predicate::Like { field, .. }
			| Predicate::Compare { field, .. }
			| Predicate::EqualObjectId { field, .. }
			| Predicate::Between { field, .. } => Some(field),
			Predicate::And(_) => None,
		}
	}

	pub fn matches(&self, record: &dyn Record) -> bool {
		match self {
			Predicate::And(predicates) => predicates.iter().all(|p| p.matches(record)),
			Predicate::Equal { field, value } => {
				record.field_value(field).is_some_and(|actual| actual.equals(value))
			}
			Predicate::NotEqual { field, value } => {
				record.field_value(field).is_some_and(|actual| !actual.equals(value))
			}
			Predicate::Like { field, pattern, .. } => record
				.field_value(field)
				.is_some_and(|actual| pattern.is_match(&actual.to_literal())),
			Predicate::Compare { field, op, value } => record
				.field_value(field)
				.and_then(|actual| actual.compare(value))
				.is_some_and(|ordering| op.accepts(ordering)),
			Predicate::EqualObjectId { field, id } => record
				.field_value(field)
				.is_some_and(|actual| actual.as_uuid() == Some(*id)),
			Predicate::Between { field, low, high } => {
				record.field_value(field).is_some_and(|actual| {
					actual
						.compare(low)
						.is_some_and(|o| ComparisonOperator::Gte.accepts(o))
						&& actual
							.compare(high)
							.is_some_and(|o| ComparisonOperator::Lte.accepts(o))
				})
			}
		}
	}
}
