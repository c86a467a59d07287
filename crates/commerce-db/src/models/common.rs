//! Parts shared by every entity model

use chrono::{DateTime, Utc};
use commerce_core::{EntityType, OwnerReference, QueryEnum, StatusType};
use commerce_query::{QueryValue, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity, description and ownership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBase {
	pub id: Uuid,
	pub name: Option<String>,
	pub description: Option<String>,
	pub reference: Option<String>,
	pub entity_type: EntityType,
	pub parent: Option<OwnerReference>,
}

impl EntityBase {
	/// Fresh base with a random identifier
	pub fn new(entity_type: EntityType) -> Self {
		Self {
			id: Uuid::new_v4(),
			name: None,
			description: None,
			reference: None,
			entity_type,
			parent: None,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
	pub created_date: Option<DateTime<Utc>>,
	pub modified_date: Option<DateTime<Utc>>,
	pub created_by: Option<String>,
	pub modified_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
	pub status_type: StatusType,
	pub since: Option<DateTime<Utc>>,
}

impl Default for Status {
	fn default() -> Self {
		Self {
			status_type: StatusType::Active,
			since: None,
		}
	}
}

/// A stored domain entity
pub trait Entity: Record + Clone {
	const ENTITY_TYPE: EntityType;

	fn base(&self) -> &EntityBase;

	fn audit(&self) -> &Audit;

	fn status(&self) -> &Status;

	fn id(&self) -> Uuid {
		self.base().id
	}

	fn owner(&self) -> Option<&OwnerReference> {
		self.base().parent.as_ref()
	}
}

pub(crate) fn text(value: &Option<String>) -> Option<QueryValue> {
	value.clone().map(QueryValue::String)
}

pub(crate) fn date(value: &Option<DateTime<Utc>>) -> Option<QueryValue> {
	value.map(QueryValue::Date)
}

pub(crate) fn identifier(value: &Option<Uuid>) -> Option<QueryValue> {
	value.map(QueryValue::Uuid)
}

pub(crate) fn enumeration<E: QueryEnum>(value: &Option<E>) -> Option<QueryValue> {
	value.map(QueryValue::enumeration)
}

/// Value of a base, audit or status field
pub(crate) fn common_field_value(
	base: &EntityBase,
	audit: &Audit,
	status: &Status,
	field: &str,
) -> Option<QueryValue> {
	match field {
		"id" => Some(QueryValue::Uuid(base.id)),
		"name" => text(&base.name),
		"description" => text(&base.description),
		"reference" => text(&base.reference),
		"entityType" => Some(QueryValue::enumeration(base.entity_type)),
		"parent" => base.parent.map(|owner| QueryValue::Uuid(owner.id)),
		"parentType" => base
			.parent
			.map(|owner| QueryValue::enumeration(owner.entity_type)),
		"createdDate" => date(&audit.created_date),
		"modifiedDate" => date(&audit.modified_date),
		"createdBy" => text(&audit.created_by),
		"modifiedBy" => text(&audit.modified_by),
		"statusType" => Some(QueryValue::enumeration(status.status_type)),
		"since" => date(&status.since),
		_ => None,
	}
}

/// Implements [`Entity`] and the base/audit/status part of [`Record`]
macro_rules! entity_model {
	($model:ty, $entity_type:expr, |$this:ident, $field:ident| { $($name:literal => $value:expr),* $(,)? }) => {
		impl $crate::models::common::Entity for $model {
			const ENTITY_TYPE: commerce_core::EntityType = $entity_type;

			fn base(&self) -> &$crate::models::common::EntityBase {
				&self.base
			}

			fn audit(&self) -> &$crate::models::common::Audit {
				&self.audit
			}

			fn status(&self) -> &$crate::models::common::Status {
				&self.status
			}
		}

		impl commerce_query::Record for $model {
			fn entity_type(&self) -> commerce_core::EntityType {
				$entity_type
			}

			fn field_value(&self, $field: &str) -> Option<commerce_query::QueryValue> {
				let $this = self;
				match $field {
					$($name => $value,)*
					_ => $crate::models::common::common_field_value(
						&$this.base,
						&$this.audit,
						&$this.status,
						$field,
					),
				}
			}
		}
	};
}

pub(crate) use entity_model;
