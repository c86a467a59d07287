use commerce_core::EntityType;
use commerce_query::QueryError;
use thiserror::Error;
use uuid::Uuid;

/// Store errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
	#[error("Query error: {0}")]
	Query(#[from] QueryError),

	#[error("Specification targets {specification} but the store holds {store} records")]
	EntityTypeMismatch {
		store: EntityType,
		specification: EntityType,
	},

	#[error("Record {0} already exists")]
	DuplicateId(Uuid),
}

pub type StoreResult<T> = Result<T, StoreError>;
