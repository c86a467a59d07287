//! Closed domain enumerations
//!
//! Literal names are the constant names used by search payloads and stored
//! records, e.g. `"ACTIVE"` for [`StatusType::Active`].

use crate::enumeration::query_enum;

query_enum! {
	/// Domain class a query or record belongs to
	pub enum EntityType {
		Person => "PERSON",
		Document => "DOCUMENT",
		EmailAddress => "EMAIL_ADDRESS",
		PhoneNumber => "PHONE_NUMBER",
		PostalAddress => "POSTAL_ADDRESS",
	}
}

query_enum! {
	/// Lifecycle status of an entity
	pub enum StatusType {
		Active => "ACTIVE",
		Inactive => "INACTIVE",
		Pending => "PENDING",
		Deleted => "DELETED",
	}
}

query_enum! {
	pub enum DocumentType {
		Image => "IMAGE",
		Pdf => "PDF",
		Text => "TEXT",
		Html => "HTML",
		Spreadsheet => "SPREADSHEET",
		Archive => "ARCHIVE",
		Other => "OTHER",
	}
}

query_enum! {
	pub enum PersonType {
		Customer => "CUSTOMER",
		Employee => "EMPLOYEE",
		Supplier => "SUPPLIER",
		Contact => "CONTACT",
	}
}

query_enum! {
	pub enum GenderType {
		Female => "FEMALE",
		Male => "MALE",
		Diverse => "DIVERSE",
		Unknown => "UNKNOWN",
	}
}

query_enum! {
	pub enum EmailAddressType {
		Private => "PRIVATE",
		Business => "BUSINESS",
		Other => "OTHER",
	}
}

query_enum! {
	pub enum PhoneType {
		Mobile => "MOBILE",
		Landline => "LANDLINE",
		Fax => "FAX",
		Business => "BUSINESS",
	}
}

query_enum! {
	pub enum PostalAddressType {
		Home => "HOME",
		Billing => "BILLING",
		Shipping => "SHIPPING",
		Business => "BUSINESS",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::enumeration::QueryEnum;
	use rstest::rstest;

	#[rstest]
	#[case(EntityType::Person, "PERSON")]
	#[case(EntityType::EmailAddress, "EMAIL_ADDRESS")]
	#[case(EntityType::PostalAddress, "POSTAL_ADDRESS")]
	fn test_entity_type_literals(#[case] entity_type: EntityType, #[case] literal: &str) {
		assert_eq!(entity_type.as_str(), literal);
		assert_eq!(EntityType::from_name(literal), Some(entity_type));
		assert_eq!(entity_type.to_string(), literal);
	}

	#[test]
	fn test_serde_uses_literal_names() {
		let json = serde_json::to_string(&PhoneType::Mobile).unwrap();
		assert_eq!(json, "\"MOBILE\"");

		let parsed: StatusType = serde_json::from_str("\"INACTIVE\"").unwrap();
		assert_eq!(parsed, StatusType::Inactive);
	}

	#[test]
	fn test_unknown_name_is_rejected() {
		assert_eq!(GenderType::from_name("female"), None);
		assert_eq!(DocumentType::from_name("DOCX"), None);
	}

	#[test]
	fn test_constants_follow_declaration_order() {
		assert_eq!(
			PostalAddressType::CONSTANTS,
			&["HOME", "BILLING", "SHIPPING", "BUSINESS"]
		);
	}
}
