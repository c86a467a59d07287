//! Domain vocabulary module.
//!
//! This module provides access to the domain enumerations, the
//! [`QueryEnum`](commerce_core::QueryEnum) trait and ownership references.
//!
//! # Examples
//!
//! ```rust
//! use commerce::core::{EntityType, OwnerReference};
//! use uuid::Uuid;
//!
//! let owner = OwnerReference::new(EntityType::Person, Uuid::nil());
//! assert!(owner.is(EntityType::Person));
//! ```

pub use commerce_core::*;
