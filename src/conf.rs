//! Settings module.
//!
//! Layered configuration sources and the settings consumed by the query
//! subsystem.

pub use commerce_conf::*;
