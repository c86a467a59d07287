//! # Commerce Core
//!
//! Domain vocabulary shared by every commerce crate.
//!
//! ## Module Organization
//!
//! - [`enumeration`]: The [`QueryEnum`] trait and runtime enum descriptors
//! - [`types`]: Closed domain enumerations (entity, status, document types, ...)
//! - [`owner`]: Tagged ownership references between entities
//!
//! ## Example
//!
//! ```
//! use commerce_core::{EntityType, QueryEnum, StatusType};
//!
//! assert_eq!(StatusType::from_name("ACTIVE"), Some(StatusType::Active));
//! assert_eq!(EntityType::descriptor().name(), "EntityType");
//! ```

pub mod enumeration;
pub mod owner;
pub mod types;

pub use enumeration::{EnumDescriptor, QueryEnum};
pub use owner::OwnerReference;
pub use types::{
	DocumentType, EmailAddressType, EntityType, GenderType, PersonType, PhoneType,
	PostalAddressType, StatusType,
};
