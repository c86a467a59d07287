//! # Commerce
//!
//! Typed, per-entity query specifications for a commerce backend managing
//! persons, email addresses, postal addresses, phone numbers and documents.
//!
//! A query object is built for one entity type, accepts conditions that are
//! validated against that type's field registry, and hands out a
//! specification that compiles into an AND-only predicate. The predicate can
//! be evaluated in memory or rendered as a parameterized SQL WHERE clause.
//!
//! ## Feature Flags
//!
//! - `query` - Query objects, specifications and SQL rendering
//! - `database` - Entity models and the in-memory store (implies `query`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "full")]
//! # {
//! use commerce::prelude::*;
//!
//! let store: InMemoryStore<Document> = [
//!     Document::new("license.html").with_content_length(34500),
//!     Document::new("notes.txt").with_content_length(34800),
//!     Document::new("photo.jpg").with_content_length(40000),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut query = QueryObject::document().unwrap();
//! query
//!     .add_condition(QueryCondition::between("contentLength", 34000i64, 35000i64))
//!     .unwrap()
//!     .add_condition(QueryCondition::single("filename", QueryOperatorType::MatchEnd, "lic"))
//!     .unwrap();
//!
//! let found = store.find(&query.get_specification().unwrap()).unwrap();
//! assert_eq!(found.len(), 1);
//! # }
//! ```

pub mod conf;
pub mod core;
#[cfg(feature = "database")]
pub mod db;
#[cfg(feature = "query")]
pub mod query;

// Re-export settings
pub use commerce_conf::{EnumLiteralPolicy, QuerySettings, SettingsBuilder, SettingsError};

// Re-export domain vocabulary
pub use commerce_core::{EntityType, OwnerReference, QueryEnum, StatusType};

// Re-export query types
#[cfg(feature = "query")]
pub use commerce_query::{
	DataType, Predicate, QueryCondition, QueryError, QueryObject, QueryOperatorType, QueryResult,
	QueryValue, Record, SearchRequest, Specification, SqlDialect,
};

// Re-export store
#[cfg(feature = "database")]
pub use commerce_db::{InMemoryStore, StoreError, StoreResult};

/// Commonly used types
pub mod prelude {
	pub use crate::{EntityType, EnumLiteralPolicy, OwnerReference, QuerySettings, StatusType};

	#[cfg(feature = "query")]
	pub use crate::{
		DataType, Predicate, QueryCondition, QueryError, QueryObject, QueryOperatorType,
		QueryValue, Record, SearchRequest, Specification, SqlDialect,
	};

	#[cfg(feature = "database")]
	pub use crate::InMemoryStore;
	#[cfg(feature = "database")]
	pub use commerce_db::{Document, EmailAddress, Person, PhoneNumber, PostalAddress};
}
