//! Field declarations and per-entity registries

use crate::data_type::DataType;
use crate::error::{QueryError, QueryResult};
use crate::operator::QueryOperatorType;
use commerce_core::{EnumDescriptor, QueryEnum};
use indexmap::IndexMap;

/// A queryable field of an entity type
///
/// `enum_type` is present exactly when `field_type` is [`DataType::Enum`];
/// [`FieldRegistryBuilder::build`] rejects declarations that break this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryField {
	field_name: String,
	field_type: DataType,
	enum_type: Option<EnumDescriptor>,
}

impl QueryField {
	pub fn new(field_name: impl Into<String>, field_type: DataType) -> Self {
		Self {
			field_name: field_name.into(),
			field_type,
			enum_type: None,
		}
	}

	/// ENUM field bound to the enumeration `E`
	///
	/// # Examples
	///
	/// ```
	/// use commerce_core::StatusType;
	/// use commerce_query::{DataType, QueryField};
	///
	/// let field = QueryField::enumeration::<StatusType>("statusType");
	/// assert_eq!(field.field_type(), DataType::Enum);
	/// assert_eq!(field.enum_type().map(|e| e.name()), Some("StatusType"));
	/// ```
	pub fn enumeration<E: QueryEnum>(field_name: impl Into<String>) -> Self {
		Self::with_enum_type(field_name, E::descriptor())
	}

	pub fn with_enum_type(field_name: impl Into<String>, descriptor: EnumDescriptor) -> Self {
		Self {
			field_name: field_name.into(),
			field_type: DataType::Enum,
			enum_type: Some(descriptor),
		}
	}

	pub fn name(&self) -> &str {
		&self.field_name
	}

	pub fn field_type(&self) -> DataType {
		self.field_type
	}

	pub fn enum_type(&self) -> Option<&EnumDescriptor> {
		self.enum_type.as_ref()
	}

	/// Operators a condition on this field may use
	pub fn allowed_operators(&self) -> &'static [QueryOperatorType] {
		match self.field_type {
			DataType::Enum => &[QueryOperatorType::Equal],
			_ => &QueryOperatorType::ALL,
		}
	}

	pub fn allows(&self, operator: QueryOperatorType) -> bool {
		self.allowed_operators().contains(&operator)
	}

	fn check_declaration(&self) -> QueryResult<()> {
		if self.field_name.trim().is_empty() {
			return Err(QueryError::InvalidFieldDeclaration {
				field: self.field_name.clone(),
				reason: "field name is empty".to_string(),
			});
		}
		match (self.field_type, &self.enum_type) {
			(DataType::Enum, None) => Err(QueryError::InvalidFieldDeclaration {
				field: self.field_name.clone(),
				reason: "ENUM field without an enumeration".to_string(),
			}),
			(other, Some(descriptor)) if other != DataType::Enum => {
				Err(QueryError::InvalidFieldDeclaration {
					field: self.field_name.clone(),
					reason: format!("{other} field bound to enumeration {}", descriptor.name()),
				})
			}
			_ => Ok(()),
		}
	}
}

/// Ordered, name-indexed set of queryable fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRegistry {
	fields: IndexMap<String, QueryField>,
}

impl FieldRegistry {
	pub fn builder() -> FieldRegistryBuilder {
		FieldRegistryBuilder::new()
	}

	/// Look up a field by exact name
	pub fn get(&self, name: &str) -> Option<&QueryField> {
		self.fields.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Fields in declaration order
	pub fn iter(&self) -> impl Iterator<Item = &QueryField> {
		self.fields.values()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

/// Collects field declarations and validates them into a [`FieldRegistry`]
///
/// # Examples
///
/// ```
/// use commerce_query::{DataType, FieldRegistry, QueryError, QueryField};
///
/// let err = FieldRegistry::builder()
///     .field(QueryField::new("name", DataType::String))
///     .field(QueryField::new("name", DataType::Long))
///     .build()
///     .unwrap_err();
/// assert_eq!(err, QueryError::DuplicateField("name".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRegistryBuilder {
	fields: Vec<QueryField>,
}

impl FieldRegistryBuilder {
	pub fn new() -> Self {
		Self { fields: Vec::new() }
	}

	pub fn field(mut self, field: QueryField) -> Self {
		self.fields.push(field);
		self
	}

	pub fn fields(mut self, fields: impl IntoIterator<Item = QueryField>) -> Self {
		self.fields.extend(fields);
		self
	}

	pub fn build(self) -> QueryResult<FieldRegistry> {
		let mut fields = IndexMap::with_capacity(self.fields.len());
		for field in self.fields {
			field.check_declaration()?;
			if fields.contains_key(field.name()) {
				return Err(QueryError::DuplicateField(field.field_name));
			}
			fields.insert(field.field_name.clone(), field);
		}
		Ok(FieldRegistry { fields })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use commerce_core::StatusType;
	use rstest::rstest;

	#[test]
	fn test_registry_keeps_declaration_order() {
		let registry = FieldRegistry::builder()
			.field(QueryField::new("b", DataType::String))
			.field(QueryField::new("a", DataType::Long))
			.field(QueryField::enumeration::<StatusType>("c"))
			.build()
			.unwrap();

		assert_eq!(registry.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
		assert_eq!(registry.get("a").unwrap().field_type(), DataType::Long);
		assert!(!registry.contains("A"));
	}

	#[rstest]
	#[case(QueryField::new("statusType", DataType::Enum))]
	#[case(QueryField {
		field_name: "name".to_string(),
		field_type: DataType::String,
		enum_type: Some(StatusType::descriptor()),
	})]
	#[case(QueryField::new("", DataType::String))]
	fn test_invalid_declarations(#[case] field: QueryField) {
		let result = FieldRegistry::builder().field(field).build();
		assert!(matches!(
			result,
			Err(QueryError::InvalidFieldDeclaration { .. })
		));
	}

	#[test]
	fn test_enum_fields_allow_only_equal() {
		let field = QueryField::enumeration::<StatusType>("statusType");
		assert_eq!(field.allowed_operators(), &[QueryOperatorType::Equal]);
		assert!(!field.allows(QueryOperatorType::NotEqual));

		let plain = QueryField::new("name", DataType::String);
		assert!(QueryOperatorType::ALL.iter().all(|op| plain.allows(*op)));
	}
}
