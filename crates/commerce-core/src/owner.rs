//! Ownership references
//!
//! Documents, email addresses, phone numbers and postal addresses can be owned
//! by another entity. Instead of a shared base class the owner is addressed by
//! its entity type and identifier, the same pair `EQUAL_OBJECT_UUID`
//! conditions compare against.

use crate::types::EntityType;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
	pub entity_type: EntityType,
	pub id: Uuid,
}

impl OwnerReference {
	/// Create a reference to the entity `id` of type `entity_type`
	///
	/// # Examples
	///
	/// ```
	/// use commerce_core::{EntityType, OwnerReference};
	/// use uuid::Uuid;
	///
	/// let id = Uuid::new_v4();
	/// let owner = OwnerReference::new(EntityType::Person, id);
	/// assert!(owner.is(EntityType::Person));
	/// assert_eq!(owner.id, id);
	/// ```
	pub fn new(entity_type: EntityType, id: Uuid) -> Self {
		Self { entity_type, id }
	}

	pub fn is(&self, entity_type: EntityType) -> bool {
		self.entity_type == entity_type
	}
}

impl fmt::Display for OwnerReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.entity_type, self.id)
	}
}
