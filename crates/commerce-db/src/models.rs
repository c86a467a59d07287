//! Entity models
//!
//! Every model is composed of an [`EntityBase`], an [`Audit`] and a
//! [`Status`] part plus its own fields, and exposes them to predicates
//! through [`commerce_query::Record`] under the registry's field names.

pub mod common;
pub mod contact;
pub mod document;
pub mod person;

pub use common::{Audit, Entity, EntityBase, Status};
pub use contact::{EmailAddress, PhoneNumber, PostalAddress};
pub use document::Document;
pub use person::Person;
