//! Query objects
//!
//! A [`QueryObject`] owns the field registry of one entity type and the
//! conditions accepted so far. Conditions are validated one at a time as they
//! are added; a rejected condition leaves the object untouched.

use crate::condition::QueryCondition;
use crate::data_type::DataType;
use crate::entity_fields::{query_type_name, registry_for};
use crate::error::{QueryError, QueryResult};
use crate::field::{FieldRegistry, QueryField};
use crate::specification::{Specification, SpecificationBuilder};
use commerce_conf::QuerySettings;
use commerce_core::EntityType;

#[derive(Debug, Clone)]
pub struct QueryObject {
	entity_type: EntityType,
	query_type: String,
	fields: FieldRegistry,
	conditions: Vec<QueryCondition>,
	settings: QuerySettings,
}

impl QueryObject {
	/// Query object for `entity_type` with its full field registry
	///
	/// # Examples
	///
	/// ```
	/// use commerce_core::EntityType;
	/// use commerce_query::QueryObject;
	///
	/// let query = QueryObject::for_entity(EntityType::Document).unwrap();
	/// assert_eq!(query.query_type(), "DocumentQuery");
	/// assert!(query.field("contentLength").is_some());
	/// assert!(query.conditions().is_empty());
	/// ```
	pub fn for_entity(entity_type: EntityType) -> QueryResult<Self> {
		Ok(Self::with_registry(
			entity_type,
			query_type_name(entity_type),
			registry_for(entity_type)?,
		))
	}

	/// Query object over a caller-assembled registry
	pub fn with_registry(
		entity_type: EntityType,
		query_type: impl Into<String>,
		fields: FieldRegistry,
	) -> Self {
		Self {
			entity_type,
			query_type: query_type.into(),
			fields,
			conditions: Vec::new(),
			settings: QuerySettings::default(),
		}
	}

	pub fn person() -> QueryResult<Self> {
		Self::for_entity(EntityType::Person)
	}

	pub fn document() -> QueryResult<Self> {
		Self::for_entity(EntityType::Document)
	}

	pub fn email_address() -> QueryResult<Self> {
		Self::for_entity(EntityType::EmailAddress)
	}

	pub fn phone_number() -> QueryResult<Self> {
		Self::for_entity(EntityType::PhoneNumber)
	}

	pub fn postal_address() -> QueryResult<Self> {
		Self::for_entity(EntityType::PostalAddress)
	}

	pub fn with_settings(mut self, settings: QuerySettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn entity_type(&self) -> EntityType {
		self.entity_type
	}

	pub fn query_type(&self) -> &str {
		&self.query_type
	}

	pub fn fields(&self) -> &FieldRegistry {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&QueryField> {
		self.fields.get(name)
	}

	pub fn conditions(&self) -> &[QueryCondition] {
		&self.conditions
	}

	pub fn settings(&self) -> &QuerySettings {
		&self.settings
	}

	/// Validate and accept a condition
	///
	/// The condition is rejected when it is malformed, names a field the
	/// registry does not declare, or uses an operator other than EQUAL on an
	/// ENUM field. Enum literals are resolved later, when the specification
	/// is built.
	///
	/// # Examples
	///
	/// ```
	/// use commerce_query::{QueryCondition, QueryError, QueryObject, QueryOperatorType};
	///
	/// let mut query = QueryObject::document().unwrap();
	/// query
	///     .add_condition(QueryCondition::equal("extension", "jpg"))
	///     .unwrap()
	///     .add_condition(QueryCondition::between("contentLength", 34000i64, 35000i64))
	///     .unwrap();
	/// assert_eq!(query.conditions().len(), 2);
	///
	/// let err = query
	///     .add_condition(QueryCondition::single("statusType", QueryOperatorType::Match, "ACTIVE"))
	///     .unwrap_err();
	/// assert!(matches!(err, QueryError::InvalidOperator { .. }));
	/// assert_eq!(query.conditions().len(), 2);
	/// ```
	pub fn add_condition(&mut self, condition: QueryCondition) -> QueryResult<&mut Self> {
		condition.validate_shape()?;

		let field = self
			.fields
			.get(condition.field())
			.ok_or_else(|| QueryError::UnknownField {
				field: condition.field().to_string(),
				query_type: self.query_type.clone(),
			})?;

		if field.field_type() == DataType::Enum && !field.allows(condition.operator()) {
			return Err(QueryError::InvalidOperator {
				field: condition.field().to_string(),
				field_type: field.field_type(),
				operator: condition.operator(),
				allowed: field.allowed_operators().to_vec(),
			});
		}

		tracing::debug!(
			query_type = %self.query_type,
			condition = %condition,
			"accepted query condition"
		);
		self.conditions.push(condition);
		Ok(self)
	}

	/// Specification over the accepted conditions
	///
	/// Enum literals are resolved against the fields' enumerations according
	/// to [`QuerySettings::enum_literal_policy`]. The query object itself is
	/// not modified, so this can be called any number of times.
	pub fn get_specification(&self) -> QueryResult<Specification> {
		let mut builder = SpecificationBuilder::new(self.entity_type, self.settings.clone());
		for condition in &self.conditions {
			// Accepted conditions always name a registered field
			let field = self
				.fields
				.get(condition.field())
				.ok_or_else(|| QueryError::UnknownField {
					field: condition.field().to_string(),
					query_type: self.query_type.clone(),
				})?;
			builder = builder.with(condition.clone(), field)?;
		}
		let specification = builder.build();
		tracing::debug!(
			query_type = %self.query_type,
			conditions = specification.len(),
			"built specification"
		);
		Ok(specification)
	}
}
