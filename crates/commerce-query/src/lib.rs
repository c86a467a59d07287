//! # Commerce Query
//!
//! Typed query conditions for the commerce entities, validated against a
//! per-entity field registry and compiled into conjunctive predicates.
//!
//! ## Quick Start
//!
//! ```rust
//! use commerce_query::{QueryCondition, QueryObject, QueryOperatorType, SqlDialect};
//!
//! let mut query = QueryObject::document().unwrap();
//! query
//!     .add_condition(QueryCondition::equal("extension", "jpg"))
//!     .unwrap()
//!     .add_condition(QueryCondition::single("filename", QueryOperatorType::MatchBetween, "license"))
//!     .unwrap();
//!
//! let predicate = query.get_specification().unwrap().to_predicate().unwrap();
//! let clause = predicate.to_sql(SqlDialect::Postgres);
//! assert!(clause.sql.starts_with(r#""extension" = $1 AND LOWER("filename") LIKE $2"#));
//! assert_eq!(clause.values.0.len(), 2);
//! ```
//!
//! ## Module Organization
//!
//! - [`field`] / [`entity_fields`]: Field declarations and the registries of each entity type
//! - [`condition`] / [`operator`] / [`value`]: The condition DSL
//! - [`object`]: Query objects accepting conditions
//! - [`specification`]: Pre-passes and predicate compilation
//! - [`predicate`]: In-memory evaluation against [`Record`]s
//! - [`sql`]: Parameterized SQL rendering through sea-query
//! - [`search`]: JSON search payloads

pub mod condition;
pub mod data_type;
pub mod entity_fields;
pub mod error;
pub mod field;
pub mod object;
pub mod operator;
pub mod predicate;
pub mod search;
pub mod specification;
pub mod sql;
pub mod value;

pub use condition::QueryCondition;
pub use data_type::DataType;
pub use entity_fields::{query_type_name, registry_for};
pub use error::{QueryError, QueryResult};
pub use field::{FieldRegistry, FieldRegistryBuilder, QueryField};
pub use object::QueryObject;
pub use operator::QueryOperatorType;
pub use predicate::{ComparisonOperator, LikePattern, Predicate, Record};
pub use search::{SearchCondition, SearchRequest};
pub use specification::{Specification, SpecificationBuilder, substitute_special_characters};
pub use sql::{SqlDialect, WhereClause, column_name, sea_value};
pub use value::{EnumConstant, QueryValue};
