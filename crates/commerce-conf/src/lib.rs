//! # Commerce Configuration
//!
//! Layered settings for the query subsystem.
//!
//! Settings are merged from several sources in priority order
//! (environment variables > configuration files > defaults) and deserialized
//! into a [`QuerySettings`] value.
//!
//! ## Quick Start
//!
//! ```rust
//! use commerce_conf::{EnumLiteralPolicy, SettingsBuilder};
//! use commerce_conf::settings::sources::DefaultSource;
//! use serde_json::Value;
//!
//! let settings = SettingsBuilder::new()
//!     .add_source(DefaultSource::new().with_value("enum_literal_policy", Value::from("lenient")))
//!     .build()
//!     .unwrap();
//! assert_eq!(settings.enum_literal_policy, EnumLiteralPolicy::Lenient);
//! ```
//!
//! ## Module Organization
//!
//! - [`settings`]: Query settings, builder and configuration sources

pub mod settings;

pub use settings::sources::{
	ConfigSource, DefaultSource, EnvSource, FileFormat, JsonFileSource, SourceError, TomlFileSource,
	auto_source,
};
pub use settings::{EnumLiteralPolicy, QuerySettings, SettingsBuilder, SettingsError};
