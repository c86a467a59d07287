use super::common::{Audit, EntityBase, Status, entity_model, enumeration, text};
use commerce_core::{DocumentType, EntityType};
use commerce_query::QueryValue;
use serde::{Deserialize, Serialize};

/// Document metadata; the binary content lives elsewhere under `content_path`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
	#[serde(flatten)]
	pub base: EntityBase,
	#[serde(flatten)]
	pub audit: Audit,
	#[serde(flatten)]
	pub status: Status,
	pub extension: Option<String>,
	pub filename: Option<String>,
	pub content_path: Option<String>,
	pub document_type: Option<DocumentType>,
	pub content_length: Option<i64>,
	pub mime_type: Option<String>,
	pub tags: Option<String>,
}

impl Document {
	pub fn new(filename: impl Into<String>) -> Self {
		let filename = filename.into();
		let extension = filename
			.rsplit_once('.')
			.map(|(_, extension)| extension.to_string());
		Self {
			base: EntityBase::new(EntityType::Document),
			audit: Audit::default(),
			status: Status::default(),
			extension,
			filename: Some(filename),
			content_path: None,
			document_type: None,
			content_length: None,
			mime_type: None,
			tags: None,
		}
	}

	pub fn with_content_length(mut self, content_length: i64) -> Self {
		self.content_length = Some(content_length);
		self
	}
}

entity_model!(Document, EntityType::Document, |this, field| {
	"extension" => text(&this.extension),
	"filename" => text(&this.filename),
	"contentPath" => text(&this.content_path),
	"documentType" => enumeration(&this.document_type),
	"contentLength" => this.content_length.map(QueryValue::Long),
	"mimeType" => text(&this.mime_type),
	"tags" => text(&this.tags),
});

#[cfg(test)]
mod tests {
	use super::*;
	use commerce_query::Record;

	#[test]
	fn test_new_derives_extension() {
		let document = Document::new("my-license-v2.pdf");
		assert_eq!(document.extension.as_deref(), Some("pdf"));
		assert_eq!(Document::new("README").extension, None);
	}

	#[test]
	fn test_field_values() {
		let document = Document::new("a.jpg").with_content_length(34500);
		assert_eq!(
			document.field_value("contentLength"),
			Some(QueryValue::Long(34500))
		);
		assert_eq!(
			document.field_value("entityType"),
			Some(QueryValue::enumeration(EntityType::Document))
		);
		assert_eq!(document.field_value("mimeType"), None);
		assert_eq!(document.field_value("lastName"), None);
	}

	#[test]
	fn test_serde_flattens_parts() {
		let document = Document::new("a.jpg");
		let json = serde_json::to_value(&document).unwrap();
		assert_eq!(json["entityType"], "DOCUMENT");
		assert_eq!(json["statusType"], "ACTIVE");
		assert_eq!(json["extension"], "jpg");

		let back: Document = serde_json::from_value(json).unwrap();
		assert_eq!(back, document);
	}
}
