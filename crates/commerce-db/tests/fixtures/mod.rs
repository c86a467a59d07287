//! Shared record fixtures

#![allow(dead_code)]

use commerce_core::{DocumentType, StatusType};
use commerce_db::{Document, InMemoryStore};

pub fn document(filename: &str, content_length: i64) -> Document {
	Document::new(filename).with_content_length(content_length)
}

pub fn with_status(mut document: Document, status_type: StatusType) -> Document {
	document.status.status_type = status_type;
	document
}

pub fn with_type(mut document: Document, document_type: DocumentType) -> Document {
	document.document_type = Some(document_type);
	document
}

pub fn store_of(documents: impl IntoIterator<Item = Document>) -> InMemoryStore<Document> {
	documents.into_iter().collect()
}

pub fn filenames<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Vec<String> {
	documents
		.into_iter()
		.filter_map(|document| document.filename.clone())
		.collect()
}
