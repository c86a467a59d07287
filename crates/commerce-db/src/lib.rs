//! # Commerce DB
//!
//! Entity models of the commerce domain and an in-memory store that executes
//! query specifications against them.
//!
//! ## Example
//!
//! ```rust
//! use commerce_db::{Document, InMemoryStore};
//! use commerce_query::{QueryCondition, QueryObject};
//!
//! let store: InMemoryStore<Document> = ["a.jpg", "b.png", "c.jpg"]
//!     .into_iter()
//!     .map(Document::new)
//!     .collect();
//!
//! let mut query = QueryObject::document().unwrap();
//! query.add_condition(QueryCondition::equal("extension", "jpg")).unwrap();
//!
//! let found = store.find(&query.get_specification().unwrap()).unwrap();
//! assert_eq!(found.len(), 2);
//! ```

pub mod error;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{
	Audit, Document, EmailAddress, Entity, EntityBase, Person, PhoneNumber, PostalAddress, Status,
};
pub use store::InMemoryStore;
