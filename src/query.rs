//! Query module.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "query")]
//! # {
//! use commerce::query::{QueryCondition, QueryObject};
//!
//! let mut query = QueryObject::document().unwrap();
//! query.add_condition(QueryCondition::equal("extension", "jpg")).unwrap();
//! assert_eq!(query.get_specification().unwrap().len(), 1);
//! # }
//! ```

#[cfg(feature = "query")]
pub use commerce_query::*;
