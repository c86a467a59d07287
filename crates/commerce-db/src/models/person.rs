use super::common::{
	Audit, EntityBase, Status, date, entity_model, enumeration, identifier, text,
};
use chrono::{DateTime, Utc};
use commerce_core::{EntityType, GenderType, PersonType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
	#[serde(flatten)]
	pub base: EntityBase,
	#[serde(flatten)]
	pub audit: Audit,
	#[serde(flatten)]
	pub status: Status,
	pub last_name: Option<String>,
	pub first_name: Option<String>,
	pub birth_date: Option<DateTime<Utc>>,
	pub person_type: Option<PersonType>,
	pub gender_type: Option<GenderType>,
	pub parent_id: Option<Uuid>,
}

impl Person {
	pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
		Self {
			base: EntityBase::new(EntityType::Person),
			audit: Audit::default(),
			status: Status::default(),
			last_name: Some(last_name.into()),
			first_name: Some(first_name.into()),
			birth_date: None,
			person_type: None,
			gender_type: None,
			parent_id: None,
		}
	}
}

entity_model!(Person, EntityType::Person, |this, field| {
	"lastName" => text(&this.last_name),
	"firstName" => text(&this.first_name),
	"birthDate" => date(&this.birth_date),
	"personType" => enumeration(&this.person_type),
	"genderType" => enumeration(&this.gender_type),
	"parentId" => identifier(&this.parent_id),
});
