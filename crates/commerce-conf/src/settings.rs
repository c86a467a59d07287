//! Query settings
//!
//! [`QuerySettings`] controls the tunable parts of specification building:
//! how unresolvable enum literals are treated and which characters take part
//! in wildcard substitution.

pub mod sources;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sources::{ConfigSource, SourceError};

/// Treatment of enum literals that match no constant of the field's enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumLiteralPolicy {
	/// Fail specification building with an error
	#[default]
	Strict,
	/// Drop the literal; drop the condition when no literal survives
	Lenient,
}

/// Settings consumed by the query subsystem
///
/// # Examples
///
/// ```
/// use commerce_conf::{EnumLiteralPolicy, QuerySettings};
///
/// let settings = QuerySettings::default();
/// assert_eq!(settings.enum_literal_policy, EnumLiteralPolicy::Strict);
/// assert_eq!(settings.wildcard, '*');
/// assert_eq!(settings.pattern_wildcard, '%');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySettings {
	pub enum_literal_policy: EnumLiteralPolicy,
	/// Wildcard character accepted from clients
	pub wildcard: char,
	/// Wildcard character understood by the storage pattern matcher
	pub pattern_wildcard: char,
}

impl Default for QuerySettings {
	fn default() -> Self {
		Self {
			enum_literal_policy: EnumLiteralPolicy::Strict,
			wildcard: '*',
			pattern_wildcard: '%',
		}
	}
}

impl QuerySettings {
	/// Lenient enum handling with default wildcards
	pub fn lenient() -> Self {
		Self {
			enum_literal_policy: EnumLiteralPolicy::Lenient,
			..Self::default()
		}
	}

	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.wildcard == self.pattern_wildcard {
			return Err(SettingsError::Invalid(format!(
				"wildcard and pattern_wildcard must differ (both '{}')",
				self.wildcard
			)));
		}
		Ok(())
	}
}

/// Error raised while assembling settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to load {source_description}: {error}")]
	Source {
		source_description: String,
		#[source]
		error: SourceError,
	},

	#[error("Failed to deserialize settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	#[error("Invalid settings: {0}")]
	Invalid(String),
}

/// Merges configuration sources into [`QuerySettings`]
///
/// Sources are applied in ascending priority, so a key defined by a
/// higher-priority source overrides the same key from a lower one. Keys no
/// source defines keep their [`QuerySettings::default`] value.
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	pub fn add_boxed_source(mut self, source: Box<dyn ConfigSource>) -> Self {
		self.sources.push(source);
		self
	}

	pub fn source_count(&self) -> usize {
		self.sources.len()
	}

	/// Load every source, merge and deserialize
	pub fn build(mut self) -> Result<QuerySettings, SettingsError> {
		// Stable sort keeps insertion order among equal priorities
		self.sources.sort_by_key(|source| source.priority());

		let mut merged: IndexMap<String, Value> = IndexMap::new();
		for source in &self.sources {
			let values = source.load().map_err(|error| SettingsError::Source {
				source_description: source.description(),
				error,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"loaded query settings source"
			);
			merged.extend(values);
		}

		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		let settings: QuerySettings = serde_json::from_value(Value::Object(object))?;
		settings.validate()?;
		Ok(settings)
	}
}
