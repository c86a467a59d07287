//! Entity models and the in-memory store.

#[cfg(feature = "database")]
pub use commerce_db::*;
