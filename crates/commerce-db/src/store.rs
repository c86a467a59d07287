//! In-memory entity store
//!
//! Holds records of one entity type in insertion order and executes
//! specifications by compiling them once and evaluating the predicate
//! against every record.

use crate::error::{StoreError, StoreResult};
use crate::models::Entity;
use commerce_query::Specification;
use indexmap::IndexMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct InMemoryStore<T: Entity> {
	records: IndexMap<Uuid, T>,
}

impl<T: Entity> InMemoryStore<T> {
	pub fn new() -> Self {
		Self {
			records: IndexMap::new(),
		}
	}

	/// Store a record under its identifier
	pub fn insert(&mut self, record: T) -> StoreResult<Uuid> {
		let id = record.id();
		if self.records.contains_key(&id) {
			return Err(StoreError::DuplicateId(id));
		}
		self.records.insert(id, record);
		Ok(id)
	}

	pub fn get(&self, id: &Uuid) -> Option<&T> {
		self.records.get(id)
	}

	pub fn remove(&mut self, id: &Uuid) -> Option<T> {
		self.records.shift_remove(id)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> {
		self.records.values()
	}

	/// Records satisfying every condition of `specification`, in insertion order
	pub fn find(&self, specification: &Specification) -> StoreResult<Vec<&T>> {
		if specification.entity_type() != T::ENTITY_TYPE {
			return Err(StoreError::EntityTypeMismatch {
				store: T::ENTITY_TYPE,
				specification: specification.entity_type(),
			});
		}

		let predicate = specification.to_predicate()?;
		let matches: Vec<&T> = self
			.records
			.values()
			.filter(|record| predicate.matches(*record))
			.collect();
		tracing::debug!(
			entity_type = %T::ENTITY_TYPE,
			conditions = specification.len(),
			scanned = self.records.len(),
			matched = matches.len(),
			"executed specification"
		);
		Ok(matches)
	}

	pub fn count(&self, specification: &Specification) -> StoreResult<usize> {
		Ok(self.find(specification)?.len())
	}
}

impl<T: Entity> Default for InMemoryStore<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Entity> FromIterator<T> for InMemoryStore<T> {
	/// Later records with an already stored identifier replace earlier ones
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			records: iter.into_iter().map(|record| (record.id(), record)).collect(),
		}
	}
}
