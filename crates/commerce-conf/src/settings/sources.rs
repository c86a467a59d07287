//! Configuration sources
//!
//! Each source yields a flat map of settings keys. [`SettingsBuilder`](super::SettingsBuilder)
//! applies them from the lowest to the highest [`ConfigSource::priority`]:
//! defaults, then files, then environment variables.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_PRIORITY: u8 = 0;
const FILE_PRIORITY: u8 = 50;
const ENV_PRIORITY: u8 = 100;

/// A provider of settings keys
pub trait ConfigSource: Send + Sync {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Sources with a higher priority override keys of lower ones
	fn priority(&self) -> u8;

	/// Human-readable origin, used in error messages
	fn description(&self) -> String;
}

/// Failure to read or parse a source
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid source: {0}")]
	InvalidSource(String),
}

/// Environment variable configuration source
///
/// Keys are lower-cased after the prefix is stripped, so
/// `COMMERCE_ENUM_LITERAL_POLICY` becomes `enum_literal_policy`.
pub struct EnvSource {
	prefix: Option<String>,
}

impl EnvSource {
	/// Source over every environment variable
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Only load variables starting with `prefix`
	///
	/// # Examples
	///
	/// ```
	/// use commerce_conf::{ConfigSource, EnvSource};
	///
	/// let source = EnvSource::new().with_prefix("COMMERCE_");
	/// assert_eq!(source.description(), "Environment variables (prefix: COMMERCE_)");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}
}

/// Integers and booleans keep their type; anything else stays a string
fn env_value(raw: String) -> Value {
	if let Ok(number) = raw.parse::<i64>() {
		Value::from(number)
	} else if let Ok(flag) = raw.parse::<bool>() {
		Value::Bool(flag)
	} else {
		Value::String(raw)
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config = IndexMap::new();

		for (key, value) in std::env::vars() {
			let key = match self.prefix.as_deref() {
				Some(prefix) => match key.strip_prefix(prefix) {
					Some(stripped) if !stripped.is_empty() => stripped.to_lowercase(),
					_ => continue,
				},
				None => key.to_lowercase(),
			};
			config.insert(key, env_value(value));
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		ENV_PRIORITY
	}

	fn description(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("Environment variables (prefix: {})", prefix),
			None => "Environment variables".to_string(),
		}
	}
}

/// Settings file formats understood by [`auto_source`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
	Toml,
	Json,
}

impl FileFormat {
	/// Format implied by the extension of `path`
	pub fn from_path(path: &Path) -> Result<Self, SourceError> {
		match path.extension().and_then(|e| e.to_str()) {
			Some("toml") => Ok(FileFormat::Toml),
			Some("json") => Ok(FileFormat::Json),
			Some(other) => Err(SourceError::InvalidSource(format!(
				"Unsupported file extension: {other}"
			))),
			None => Err(SourceError::InvalidSource(format!(
				"No file extension on {}",
				path.display()
			))),
		}
	}

	fn parse(&self, content: &str) -> Result<Value, SourceError> {
		match self {
			// TOML tables map one-to-one onto JSON objects
			FileFormat::Toml => Ok(serde_json::to_value(toml::from_str::<toml::Value>(content)?)?),
			FileFormat::Json => Ok(serde_json::from_str(content)?),
		}
	}

	fn label(&self) -> &'static str {
		match self {
			FileFormat::Toml => "TOML",
			FileFormat::Json => "JSON",
		}
	}
}

/// Read a settings file whose root must be a table/object
///
/// A file that does not exist contributes no keys.
fn load_file(path: &Path, format: FileFormat) -> Result<IndexMap<String, Value>, SourceError> {
	if !path.exists() {
		return Ok(IndexMap::new());
	}
	match format.parse(&fs::read_to_string(path)?)? {
		Value::Object(map) => Ok(map.into_iter().collect()),
		_ => Err(SourceError::Parse(format!(
			"{} file {} must contain a table at its root",
			format.label(),
			path.display()
		))),
	}
}

/// Settings read from a TOML file
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// # Examples
	///
	/// ```
	/// use commerce_conf::{ConfigSource, TomlFileSource};
	///
	/// let source = TomlFileSource::new("query.toml");
	/// assert_eq!(source.description(), "TOML file: query.toml");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		load_file(&self.path, FileFormat::Toml)
	}

	fn priority(&self) -> u8 {
		FILE_PRIORITY
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Settings read from a JSON file
pub struct JsonFileSource {
	path: PathBuf,
}

impl JsonFileSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for JsonFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		load_file(&self.path, FileFormat::Json)
	}

	fn priority(&self) -> u8 {
		FILE_PRIORITY
	}

	fn description(&self) -> String {
		format!("JSON file: {}", self.path.display())
	}
}

/// Fixed values supplied in code
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// # Examples
	///
	/// ```
	/// use commerce_conf::DefaultSource;
	/// use serde_json::Value;
	///
	/// let source = DefaultSource::new()
	///     .with_value("wildcard", Value::from("*"));
	/// ```
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}

	pub fn with_defaults(mut self, defaults: HashMap<String, Value>) -> Self {
		self.values.extend(defaults);
		self
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		DEFAULT_PRIORITY
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

/// File source matching the extension of `path`
///
/// # Examples
///
/// ```
/// use commerce_conf::auto_source;
///
/// assert!(auto_source("query.toml").is_ok());
/// assert!(auto_source("query.json").is_ok());
/// assert!(auto_source("query.ini").is_err());
/// ```
pub fn auto_source(path: impl AsRef<Path>) -> Result<Box<dyn ConfigSource>, SourceError> {
	let path = path.as_ref();
	Ok(match FileFormat::from_path(path)? {
		FileFormat::Toml => Box::new(TomlFileSource::new(path)),
		FileFormat::Json => Box::new(JsonFileSource::new(path)),
	})
}
