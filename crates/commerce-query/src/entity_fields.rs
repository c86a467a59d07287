//! Field declarations of the commerce entity types
//!
//! Every registry is composed in the same order: base fields, audit fields,
//! status fields, then the fields specific to the entity type.

use crate::data_type::DataType;
use crate::error::QueryResult;
use crate::field::{FieldRegistry, QueryField};
use commerce_core::{
	DocumentType, EmailAddressType, EntityType, GenderType, PersonType, PhoneType,
	PostalAddressType, StatusType,
};

fn string(name: &str) -> QueryField {
	QueryField::new(name, DataType::String)
}

/// Identity and ownership fields shared by all entities
pub fn base_fields() -> Vec<QueryField> {
	vec![
		QueryField::new("id", DataType::Uuid),
		string("name"),
		string("description"),
		string("reference"),
		QueryField::enumeration::<EntityType>("entityType"),
		QueryField::new("parent", DataType::Uuid),
		QueryField::enumeration::<EntityType>("parentType"),
	]
}

pub fn audit_fields() -> Vec<QueryField> {
	vec![
		QueryField::new("createdDate", DataType::Date),
		QueryField::new("modifiedDate", DataType::Date),
		string("createdBy"),
		string("modifiedBy"),
	]
}

pub fn status_fields() -> Vec<QueryField> {
	vec![
		QueryField::enumeration::<StatusType>("statusType"),
		QueryField::new("since", DataType::Date),
	]
}

/// Fields only the given entity type declares
pub fn specific_fields(entity_type: EntityType) -> Vec<QueryField> {
	match entity_type {
		EntityType::Document => vec![
			string("extension"),
			string("filename"),
			string("contentPath"),
			QueryField::enumeration::<DocumentType>("documentType"),
			QueryField::new("contentLength", DataType::Long),
			string("mimeType"),
			string("tags"),
		],
		EntityType::Person => vec![
			string("lastName"),
			string("firstName"),
			QueryField::new("birthDate", DataType::Date),
			QueryField::enumeration::<PersonType>("personType"),
			QueryField::enumeration::<GenderType>("genderType"),
			QueryField::new("parentId", DataType::Uuid),
		],
		EntityType::EmailAddress => vec![
			string("email"),
			QueryField::new("isDefaultEmail", DataType::Boolean),
			QueryField::enumeration::<EmailAddressType>("addressType"),
			QueryField::new("parentId", DataType::Uuid),
		],
		EntityType::PhoneNumber => vec![
			string("countryCode"),
			string("areaCode"),
			string("phoneNumber"),
			string("extension"),
			QueryField::enumeration::<PhoneType>("phoneType"),
			QueryField::new("isDefaultPhone", DataType::Boolean),
			QueryField::new("parentId", DataType::Uuid),
		],
		EntityType::PostalAddress => vec![
			string("street"),
			string("houseNumber"),
			string("city"),
			string("zipCode"),
			string("state"),
			string("country"),
			QueryField::enumeration::<PostalAddressType>("addressType"),
			QueryField::new("isDefaultAddress", DataType::Boolean),
			QueryField::new("parentId", DataType::Uuid),
		],
	}
}

/// Full registry of `entity_type`
pub fn registry_for(entity_type: EntityType) -> QueryResult<FieldRegistry> {
	FieldRegistry::builder()
		.fields(base_fields())
		.fields(audit_fields())
		.fields(status_fields())
		.fields(specific_fields(entity_type))
		.build()
}

/// Name of the query type serving `entity_type`, used in error messages
pub fn query_type_name(entity_type: EntityType) -> &'static str {
	match entity_type {
		EntityType::Person => "PersonQuery",
		EntityType::Document => "DocumentQuery",
		EntityType::EmailAddress => "EmailAddressQuery",
		EntityType::PhoneNumber => "PhoneNumberQuery",
		EntityType::PostalAddress => "PostalAddressQuery",
	}
}
