//! Queryable enumerations
//!
//! Enumerations that appear as ENUM fields in a query registry implement
//! [`QueryEnum`]. The registry only keeps an [`EnumDescriptor`], so literal
//! values coming from a search payload can be resolved against the concrete
//! enumeration without knowing its Rust type.

use std::fmt;

/// A closed enumeration whose constants can be addressed by name
pub trait QueryEnum: Copy + Eq + fmt::Debug + Send + Sync + 'static {
	/// Type name reported in errors and descriptors
	const NAME: &'static str;

	/// Constant names in declaration order
	const CONSTANTS: &'static [&'static str];

	/// Constant name of this value
	fn as_str(&self) -> &'static str;

	/// Resolve a constant by exact name
	fn from_name(name: &str) -> Option<Self>;

	/// Runtime descriptor of this enumeration
	fn descriptor() -> EnumDescriptor {
		EnumDescriptor::new(Self::NAME, Self::CONSTANTS)
	}
}

/// Type-erased view of a [`QueryEnum`]
///
/// # Examples
///
/// ```
/// use commerce_core::{QueryEnum, StatusType};
///
/// let descriptor = StatusType::descriptor();
/// assert_eq!(descriptor.resolve("INACTIVE"), Some("INACTIVE"));
/// assert_eq!(descriptor.resolve("inactive"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumDescriptor {
	name: &'static str,
	constants: &'static [&'static str],
}

impl EnumDescriptor {
	pub const fn new(name: &'static str, constants: &'static [&'static str]) -> Self {
		Self { name, constants }
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn constants(&self) -> &'static [&'static str] {
		self.constants
	}

	/// Resolve a literal to the canonical constant name (exact, case-sensitive)
	pub fn resolve(&self, literal: &str) -> Option<&'static str> {
		self.constants.iter().copied().find(|c| *c == literal)
	}
}

impl fmt::Display for EnumDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}[{}]", self.name, self.constants.join(", "))
	}
}

/// Declares a domain enumeration together with its [`QueryEnum`] implementation
///
/// Each variant is bound to the literal used on the wire and in query values.
macro_rules! query_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident => $literal:literal
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				#[serde(rename = $literal)]
				$variant,
			)+
		}

		impl $crate::enumeration::QueryEnum for $name {
			const NAME: &'static str = stringify!($name);
			const CONSTANTS: &'static [&'static str] = &[$($literal),+];

			fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $literal,)+
				}
			}

			fn from_name(name: &str) -> Option<Self> {
				match name {
					$($literal => Some(Self::$variant),)+
					_ => None,
				}
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str($crate::enumeration::QueryEnum::as_str(self))
			}
		}
	};
}

pub(crate) use query_enum;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{DocumentType, StatusType};

	#[test]
	fn test_descriptor_matches_constants() {
		let descriptor = StatusType::descriptor();
		assert_eq!(descriptor.name(), "StatusType");
		assert_eq!(descriptor.constants(), StatusType::CONSTANTS);
	}

	#[test]
	fn test_resolve_is_exact() {
		let descriptor = DocumentType::descriptor();
		assert_eq!(descriptor.resolve("PDF"), Some("PDF"));
		assert_eq!(descriptor.resolve("Pdf"), None);
		assert_eq!(descriptor.resolve(""), None);
	}

	#[test]
	fn test_display_lists_constants() {
		let rendered = StatusType::descriptor().to_string();
		assert!(rendered.starts_with("StatusType["));
		assert!(rendered.contains("ACTIVE"));
	}
}
