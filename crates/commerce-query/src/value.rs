//! Literal values carried by query conditions and returned by records

use crate::data_type::DataType;
use crate::error::{QueryError, QueryResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use commerce_core::QueryEnum;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// A resolved enumeration constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumConstant {
	enum_name: &'static str,
	name: &'static str,
}

impl EnumConstant {
	pub fn new(enum_name: &'static str, name: &'static str) -> Self {
		Self { enum_name, name }
	}

	pub fn of<E: QueryEnum>(value: E) -> Self {
		Self::new(E::NAME, value.as_str())
	}

	pub fn enum_name(&self) -> &'static str {
		self.enum_name
	}

	pub fn name(&self) -> &'static str {
		self.name
	}
}

/// A typed literal
///
/// Conditions hold literals as supplied by the caller; records expose their
/// field values in the same representation so predicates can compare the two.
///
/// # Examples
///
/// ```
/// use commerce_query::{DataType, QueryValue};
///
/// let value = QueryValue::parse(DataType::Long, "contentLength", "34000").unwrap();
/// assert_eq!(value, QueryValue::Long(34000));
/// assert_eq!(value.to_literal(), "34000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
	String(String),
	Integer(i32),
	Long(i64),
	Double(f64),
	Float(f32),
	Date(DateTime<Utc>),
	Uuid(Uuid),
	Boolean(bool),
	Enum(EnumConstant),
}

impl QueryValue {
	pub fn enumeration<E: QueryEnum>(value: E) -> Self {
		QueryValue::Enum(EnumConstant::of(value))
	}

	/// Concrete type of this literal
	pub fn data_type(&self) -> DataType {
		match self {
			QueryValue::String(_) => DataType::String,
			QueryValue::Integer(_) => DataType::Integer,
			QueryValue::Long(_) => DataType::Long,
			QueryValue::Double(_) => DataType::Double,
			QueryValue::Float(_) => DataType::Float,
			QueryValue::Date(_) => DataType::Date,
			QueryValue::Uuid(_) => DataType::Uuid,
			QueryValue::Boolean(_) => DataType::Boolean,
			QueryValue::Enum(_) => DataType::Enum,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			QueryValue::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_uuid(&self) -> Option<Uuid> {
		match self {
			QueryValue::Uuid(id) => Some(*id),
			QueryValue::String(s) => Uuid::parse_str(s.trim()).ok(),
			_ => None,
		}
	}

	/// String form of the literal
	pub fn to_literal(&self) -> String {
		match self {
			QueryValue::String(s) => s.clone(),
			QueryValue::Integer(v) => v.to_string(),
			QueryValue::Long(v) => v.to_string(),
			QueryValue::Double(v) => v.to_string(),
			QueryValue::Float(v) => v.to_string(),
			QueryValue::Date(v) => v.to_rfc3339(),
			QueryValue::Uuid(v) => v.to_string(),
			QueryValue::Boolean(v) => v.to_string(),
			QueryValue::Enum(v) => v.name().to_string(),
		}
	}

	/// Parse a string literal as `data_type`
	///
	/// ENUM literals stay strings: they are resolved against the field's
	/// enumeration when the specification is built.
	pub fn parse(data_type: DataType, field: &str, literal: &str) -> QueryResult<Self> {
		coerce_literal(data_type, literal).ok_or_else(|| QueryError::InvalidValue {
			field: field.to_string(),
			data_type,
			value: literal.to_string(),
		})
	}

	/// Convert a JSON literal from a search payload
	///
	/// Dates are accepted as RFC 3339 timestamps, `YYYY-MM-DD` dates or epoch
	/// milliseconds.
	pub fn from_json(data_type: DataType, field: &str, value: &Value) -> QueryResult<Self> {
		let invalid = || QueryError::InvalidValue {
			field: field.to_string(),
			data_type,
			value: value.to_string(),
		};

		match value {
			Value::String(s) => Self::parse(data_type, field, s),
			Value::Number(n) => match data_type {
				DataType::Integer => n
					.as_i64()
					.and_then(|v| i32::try_from(v).ok())
					.map(QueryValue::Integer)
					.ok_or_else(invalid),
				DataType::Long => n.as_i64().map(QueryValue::Long).ok_or_else(invalid),
				DataType::Double => n.as_f64().map(QueryValue::Double).ok_or_else(invalid),
				DataType::Float => n
					.as_f64()
					.map(|v| QueryValue::Float(v as f32))
					.ok_or_else(invalid),
				DataType::Date => n
					.as_i64()
					.and_then(DateTime::<Utc>::from_timestamp_millis)
					.map(QueryValue::Date)
					.ok_or_else(invalid),
				DataType::String => Ok(QueryValue::String(n.to_string())),
				DataType::Enum | DataType::Uuid | DataType::Boolean => Err(invalid()),
			},
			Value::Bool(b) => match data_type {
				DataType::Boolean => Ok(QueryValue::Boolean(*b)),
				DataType::String => Ok(QueryValue::String(b.to_string())),
				_ => Err(invalid()),
			},
			Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid()),
		}
	}

	/// Order a record's field value (`self`) against a condition literal
	///
	/// Literals of a different type are coerced to the field value's type
	/// first; string fields compare against the literal's string form.
	pub fn compare(&self, literal: &QueryValue) -> Option<Ordering> {
		use QueryValue as V;

		match (self, literal) {
			(V::String(a), V::String(b)) => Some(a.as_str().cmp(b.as_str())),
			(V::String(a), other) => Some(a.as_str().cmp(other.to_literal().as_str())),
			(V::Integer(a), V::Integer(b)) => Some(a.cmp(b)),
			(V::Long(a), V::Long(b)) => Some(a.cmp(b)),
			(V::Date(a), V::Date(b)) => Some(a.cmp(b)),
			(V::Uuid(a), V::Uuid(b)) => Some(a.cmp(b)),
			(V::Boolean(a), V::Boolean(b)) => Some(a.cmp(b)),
			(V::Enum(a), V::Enum(b)) => {
				if a.enum_name() == b.enum_name() {
					Some(a.name().cmp(b.name()))
				} else {
					None
				}
			}
			(V::Enum(a), V::String(b)) => Some(a.name().cmp(b.as_str())),
			(a, b) if a.data_type().is_numeric() && b.data_type().is_numeric() => {
				compare_numeric(a, b)
			}
			(field_value, V::String(s)) => {
				let coerced = coerce_literal(field_value.data_type(), s)?;
				if coerced.data_type() == DataType::String {
					return None;
				}
				field_value.compare(&coerced)
			}
			_ => None,
		}
	}

	/// Equality of a record's field value (`self`) with a condition literal
	pub fn equals(&self, literal: &QueryValue) -> bool {
		self.compare(literal) == Some(Ordering::Equal)
	}

	fn as_i64(&self) -> Option<i64> {
		match self {
			QueryValue::Integer(v) => Some(i64::from(*v)),
			QueryValue::Long(v) => Some(*v),
			_ => None,
		}
	}

	fn as_f64(&self) -> Option<f64> {
		match self {
			QueryValue::Integer(v) => Some(f64::from(*v)),
			QueryValue::Long(v) => Some(*v as f64),
			QueryValue::Double(v) => Some(*v),
			QueryValue::Float(v) => Some(f64::from(*v)),
			_ => None,
		}
	}
}

fn compare_numeric(a: &QueryValue, b: &QueryValue) -> Option<Ordering> {
	if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
		return Some(x.cmp(&y));
	}
	// A FLOAT on either side compares at single precision
	if matches!(a, QueryValue::Float(_)) || matches!(b, QueryValue::Float(_)) {
		let x = a.as_f64()? as f32;
		let y = b.as_f64()? as f32;
		return x.partial_cmp(&y);
	}
	a.as_f64()?.partial_cmp(&b.as_f64()?)
}

fn coerce_literal(data_type: DataType, literal: &str) -> Option<QueryValue> {
	let trimmed = literal.trim();
	match data_type {
		DataType::String | DataType::Enum => Some(QueryValue::String(literal.to_string())),
		DataType::Integer => trimmed.parse().ok().map(QueryValue::Integer),
		DataType::Long => trimmed.parse().ok().map(QueryValue::Long),
		DataType::Double => trimmed.parse().ok().map(QueryValue::Double),
		DataType::Float => trimmed.parse().ok().map(QueryValue::Float),
		DataType::Date => parse_date(trimmed).map(QueryValue::Date),
		DataType::Uuid => Uuid::parse_str(trimmed).ok().map(QueryValue::Uuid),
		DataType::Boolean => trimmed.parse().ok().map(QueryValue::Boolean),
	}
}

fn parse_date(literal: &str) -> Option<DateTime<Utc>> {
	if let Ok(dt) = DateTime::parse_from_rfc3339(literal) {
		return Some(dt.with_timezone(&Utc));
	}
	if let Ok(naive) = NaiveDateTime::parse_from_str(literal, "%Y-%m-%dT%H:%M:%S") {
		return Some(naive.and_utc());
	}
	NaiveDate::parse_from_str(literal, "%Y-%m-%d")
		.ok()
		.and_then(|date| date.and_hms_opt(0, 0, 0))
		.map(|naive| naive.and_utc())
}

impl fmt::Display for QueryValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_literal())
	}
}

impl From<String> for QueryValue {
	fn from(s: String) -> Self {
		QueryValue::String(s)
	}
}

impl From<&str> for QueryValue {
	fn from(s: &str) -> Self {
		QueryValue::String(s.to_string())
	}
}

impl From<i32> for QueryValue {
	fn from(v: i32) -> Self {
		QueryValue::Integer(v)
	}
}

impl From<i64> for QueryValue {
	fn from(v: i64) -> Self {
		QueryValue::Long(v)
	}
}

impl From<f64> for QueryValue {
	fn from(v: f64) -> Self {
		QueryValue::Double(v)
	}
}

impl From<f32> for QueryValue {
	fn from(v: f32) -> Self {
		QueryValue::Float(v)
	}
}

impl From<bool> for QueryValue {
	fn from(v: bool) -> Self {
		QueryValue::Boolean(v)
	}
}

impl From<Uuid> for QueryValue {
	fn from(v: Uuid) -> Self {
		QueryValue::Uuid(v)
	}
}

impl From<DateTime<Utc>> for QueryValue {
	fn from(v: DateTime<Utc>) -> Self {
		QueryValue::Date(v)
	}
}

impl From<NaiveDate> for QueryValue {
	fn from(v: NaiveDate) -> Self {
		QueryValue::Date(v.and_time(chrono::NaiveTime::MIN).and_utc())
	}
}
