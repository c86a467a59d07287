//! Contact channels owned by persons and other entities

use super::common::{Audit, EntityBase, Status, entity_model, enumeration, identifier, text};
use commerce_core::{EmailAddressType, EntityType, OwnerReference, PhoneType, PostalAddressType};
use commerce_query::QueryValue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn owned_base(entity_type: EntityType, owner: Option<OwnerReference>) -> EntityBase {
	let mut base = EntityBase::new(entity_type);
	base.parent = owner;
	base
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
	#[serde(flatten)]
	pub base: EntityBase,
	#[serde(flatten)]
	pub audit: Audit,
	#[serde(flatten)]
	pub status: Status,
	pub email: Option<String>,
	pub is_default_email: bool,
	pub address_type: Option<EmailAddressType>,
	pub parent_id: Option<Uuid>,
}

impl EmailAddress {
	/// Address owned by `owner`, if any; `parent_id` mirrors the owner's id
	pub fn new(email: impl Into<String>, owner: Option<OwnerReference>) -> Self {
		Self {
			base: owned_base(EntityType::EmailAddress, owner),
			audit: Audit::default(),
			status: Status::default(),
			email: Some(email.into()),
			is_default_email: false,
			address_type: None,
			parent_id: owner.map(|o| o.id),
		}
	}
}

entity_model!(EmailAddress, EntityType::EmailAddress, |this, field| {
	"email" => text(&this.email),
	"isDefaultEmail" => Some(QueryValue::Boolean(this.is_default_email)),
	"addressType" => enumeration(&this.address_type),
	"parentId" => identifier(&this.parent_id),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
	#[serde(flatten)]
	pub base: EntityBase,
	#[serde(flatten)]
	pub audit: Audit,
	#[serde(flatten)]
	pub status: Status,
	pub country_code: Option<String>,
	pub area_code: Option<String>,
	pub phone_number: Option<String>,
	pub extension: Option<String>,
	pub phone_type: Option<PhoneType>,
	pub is_default_phone: bool,
	pub parent_id: Option<Uuid>,
}

impl PhoneNumber {
	pub fn new(phone_number: impl Into<String>, owner: Option<OwnerReference>) -> Self {
		Self {
			base: owned_base(EntityType::PhoneNumber, owner),
			audit: Audit::default(),
			status: Status::default(),
			country_code: None,
			area_code: None,
			phone_number: Some(phone_number.into()),
			extension: None,
			phone_type: None,
			is_default_phone: false,
			parent_id: owner.map(|o| o.id),
		}
	}
}

entity_model!(PhoneNumber, EntityType::PhoneNumber, |this, field| {
	"countryCode" => text(&this.country_code),
	"areaCode" => text(&this.area_code),
	"phoneNumber" => text(&this.phone_number),
	"extension" => text(&this.extension),
	"phoneType" => enumeration(&this.phone_type),
	"isDefaultPhone" => Some(QueryValue::Boolean(this.is_default_phone)),
	"parentId" => identifier(&this.parent_id),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
	#[serde(flatten)]
	pub base: EntityBase,
	#[serde(flatten)]
	pub audit: Audit,
	#[serde(flatten)]
	pub status: Status,
	pub street: Option<String>,
	pub house_number: Option<String>,
	pub city: Option<String>,
	pub zip_code: Option<String>,
	pub state: Option<String>,
	pub country: Option<String>,
	pub address_type: Option<PostalAddressType>,
	pub is_default_address: bool,
	pub parent_id: Option<Uuid>,
}

impl PostalAddress {
	pub fn new(city: impl Into<String>, owner: Option<OwnerReference>) -> Self {
		Self {
			base: owned_base(EntityType::PostalAddress, owner),
			audit: Audit::default(),
			status: Status::default(),
			street: None,
			house_number: None,
			city: Some(city.into()),
			zip_code: None,
			state: None,
			country: None,
			address_type: None,
			is_default_address: false,
			parent_id: owner.map(|o| o.id),
		}
	}
}

entity_model!(PostalAddress, EntityType::PostalAddress, |this, field| {
	"street" => text(&this.street),
	"houseNumber" => text(&this.house_number),
	"city" => text(&this.city),
	"zipCode" => text(&this.zip_code),
	"state" => text(&this.state),
	"country" => text(&this.country),
	"addressType" => enumeration(&this.address_type),
	"isDefaultAddress" => Some(QueryValue::Boolean(this.is_default_address)),
	"parentId" => identifier(&this.parent_id),
});
