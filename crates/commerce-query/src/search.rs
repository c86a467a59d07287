//! JSON search payloads
//!
//! Clients submit searches as
//!
//! ```json
//! { "conditions": [ { "field": "contentLength", "operator": "BETWEEN", "values": [34000, 35000] } ] }
//! ```
//!
//! [`SearchRequest::apply_to`] coerces each literal according to the target
//! field's data type and feeds the resulting conditions to a [`QueryObject`].

use crate::condition::QueryCondition;
use crate::data_type::DataType;
use crate::error::{QueryError, QueryResult};
use crate::object::QueryObject;
use crate::operator::QueryOperatorType;
use crate::value::QueryValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
	#[serde(default)]
	pub conditions: Vec<SearchCondition>,
}

/// One condition as sent by a client
///
/// `field` and `operator` are optional on the wire so that a missing one is
/// reported as a malformed condition rather than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCondition {
	#[serde(default)]
	pub field: Option<String>,
	#[serde(default)]
	pub operator: Option<QueryOperatorType>,
	#[serde(default)]
	pub values: Vec<Value>,
}

impl SearchRequest {
	pub fn from_json(payload: &str) -> QueryResult<Self> {
		Ok(serde_json::from_str(payload)?)
	}

	/// Translate and add every condition to `query`
	///
	/// Either all conditions are accepted or `query` is left unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use commerce_query::{QueryObject, QueryValue, SearchRequest};
	///
	/// let request = SearchRequest::from_json(
	///     r#"{"conditions": [{"field": "contentLength", "operator": "BETWEEN", "values": [34000, "35000"]}]}"#,
	/// )
	/// .unwrap();
	/// let mut query = QueryObject::document().unwrap();
	/// request.apply_to(&mut query).unwrap();
	/// assert_eq!(
	///     query.conditions()[0].values(),
	///     &[QueryValue::Long(34000), QueryValue::Long(35000)]
	/// );
	/// ```
	pub fn apply_to(&self, query: &mut QueryObject) -> QueryResult<()> {
		let mut staged = query.clone();
		for condition in &self.conditions {
			let condition = condition.to_condition(&staged)?;
			staged.add_condition(condition)?;
		}
		*query = staged;
		Ok(())
	}
}

impl SearchCondition {
	/// Build a typed condition for the fields of `query`
	///
	/// The field name must match a declared field exactly; unknown fields
	/// are reported before any literal is converted.
	pub fn to_condition(&self, query: &QueryObject) -> QueryResult<QueryCondition> {
		let field = self
			.field
			.as_deref()
			.filter(|f| !f.is_empty())
			.ok_or_else(|| QueryError::MalformedCondition("field name is missing".to_string()))?;
		let operator = self.operator.ok_or_else(|| {
			QueryError::MalformedCondition(format!("operator is missing for field '{field}'"))
		})?;
		let declared = query.field(field).ok_or_else(|| QueryError::UnknownField {
			field: field.to_string(),
			query_type: query.query_type().to_string(),
		})?;

		let value_type = if operator.is_pattern() {
			DataType::String
		} else if operator == QueryOperatorType::EqualObjectUuid {
			DataType::Uuid
		} else {
			declared.field_type()
		};

		let values = self
			.values
			.iter()
			.map(|value| QueryValue::from_json(value_type, field, value))
			.collect::<QueryResult<Vec<_>>>()?;

		Ok(QueryCondition::new(field, operator, values))
	}
}
