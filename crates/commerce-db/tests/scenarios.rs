//! Acceptance scenarios for query objects executed against the in-memory store

mod fixtures;

use commerce_core::{EntityType, OwnerReference, StatusType};
use commerce_db::{EmailAddress, InMemoryStore, Person, PostalAddress, StoreError};
use commerce_query::{
	DataType, QueryCondition, QueryError, QueryObject, QueryOperatorType, QueryValue,
	SearchRequest,
};
use fixtures::{document, filenames, store_of, with_status};
use rstest::*;

#[fixture]
fn document_query() -> QueryObject {
	QueryObject::document().unwrap()
}

#[rstest]
fn test_equal_on_string_field(mut document_query: QueryObject) {
	let store = store_of([
		document("a.jpg", 1),
		document("b.png", 2),
		document("c.jpg", 3),
	]);
	assert_eq!(
		document_query.field("extension").map(|f| f.field_type()),
		Some(DataType::String)
	);

	document_query
		.add_condition(QueryCondition::equal("extension", "jpg"))
		.unwrap();
	let found = store
		.find(&document_query.get_specification().unwrap())
		.unwrap();

	assert_eq!(filenames(found), vec!["a.jpg", "c.jpg"]);
}

#[rstest]
fn test_unknown_field_is_rejected(mut document_query: QueryObject) {
	let err = document_query
		.add_condition(QueryCondition::equal("bogusField", "x"))
		.unwrap_err();

	let message = err.to_string();
	assert!(message.contains("bogusField"));
	assert!(message.contains("DocumentQuery"));
	assert!(document_query.conditions().is_empty());
}

#[rstest]
fn test_enum_field_accepts_only_equal(mut document_query: QueryObject) {
	let err = document_query
		.add_condition(QueryCondition::single(
			"statusType",
			QueryOperatorType::Match,
			"ACTIVE",
		))
		.unwrap_err();
	assert!(matches!(
		err,
		QueryError::InvalidOperator {
			field_type: DataType::Enum,
			operator: QueryOperatorType::Match,
			..
		}
	));

	document_query
		.add_condition(QueryCondition::equal("statusType", "ACTIVE"))
		.unwrap();
	assert_eq!(document_query.conditions().len(), 1);

	let store = store_of([
		document("a.txt", 1),
		with_status(document("b.txt", 1), StatusType::Inactive),
	]);
	let found = store
		.find(&document_query.get_specification().unwrap())
		.unwrap();
	assert_eq!(filenames(found), vec!["a.txt"]);
}

#[rstest]
fn test_between_on_long_field(mut document_query: QueryObject) {
	let store = store_of([
		document("small.bin", 30000),
		document("medium.bin", 34500),
		document("large.bin", 40000),
	]);

	document_query
		.add_condition(QueryCondition::between("contentLength", 34000i64, 35000i64))
		.unwrap();
	let found = store
		.find(&document_query.get_specification().unwrap())
		.unwrap();

	assert_eq!(filenames(found), vec!["medium.bin"]);
}

#[rstest]
fn test_between_bounds_are_inclusive(mut document_query: QueryObject) {
	let store = store_of([
		document("lower.bin", 34000),
		document("upper.bin", 35000),
		document("outside.bin", 35001),
	]);

	document_query
		.add_condition(QueryCondition::between("contentLength", 34000i64, 35000i64))
		.unwrap();
	let found = store
		.find(&document_query.get_specification().unwrap())
		.unwrap();

	assert_eq!(filenames(found), vec!["lower.bin", "upper.bin"]);
}

#[rstest]
fn test_match_between_is_substring(mut document_query: QueryObject) {
	let store = store_of([
		document("license.html", 1),
		document("my-license-v2.pdf", 1),
		document("licenced.txt", 1),
		document("LICENSE", 1),
	]);

	document_query
		.add_condition(QueryCondition::single(
			"filename",
			QueryOperatorType::MatchBetween,
			"license",
		))
		.unwrap();
	let found = store
		.find(&document_query.get_specification().unwrap())
		.unwrap();

	assert_eq!(
		filenames(found),
		vec!["license.html", "my-license-v2.pdf", "LICENSE"]
	);
}

#[rstest]
#[case(QueryOperatorType::MatchEnd, "report", vec!["report-2024.pdf"])]
#[case(QueryOperatorType::MatchBefore, ".pdf", vec!["report-2024.pdf", "annual-report.pdf"])]
#[case(QueryOperatorType::Match, "*report*", vec!["report-2024.pdf", "annual-report.pdf"])]
#[case(QueryOperatorType::Match, "report", vec![])]
fn test_pattern_operators(
	mut document_query: QueryObject,
	#[case] operator: QueryOperatorType,
	#[case] literal: &str,
	#[case] expected: Vec<&str>,
) {
	let store = store_of([
		document("report-2024.pdf", 1),
		document("annual-report.pdf", 1),
		document("notes.txt", 1),
	]);

	document_query
		.add_condition(QueryCondition::single("filename", operator, literal))
		.unwrap();
	let found = store
		.find(&document_query.get_specification().unwrap())
		.unwrap();

	assert_eq!(filenames(found), expected);
}

#[rstest]
#[case(QueryOperatorType::GreaterThan, "34500", vec!["large.bin"])]
#[case(QueryOperatorType::GreaterThanEqual, "34500", vec!["medium.bin", "large.bin"])]
#[case(QueryOperatorType::LessThan, "34500", vec!["small.bin"])]
#[case(QueryOperatorType::LessThanEqual, "34500", vec!["small.bin", "medium.bin"])]
#[case(QueryOperatorType::NotEqual, "34500", vec!["small.bin", "large.bin"])]
fn test_ordering_operators_coerce_string_literals(
	mut document_query: QueryObject,
	#[case] operator: QueryOperatorType,
	#[case] literal: &str,
	#[case] expected: Vec<&str>,
) {
	let store = store_of([
		document("small.bin", 30000),
		document("medium.bin", 34500),
		document("large.bin", 40000),
	]);

	document_query
		.add_condition(QueryCondition::single("contentLength", operator, literal))
		.unwrap();
	let found = store
		.find(&document_query.get_specification().unwrap())
		.unwrap();

	assert_eq!(filenames(found), expected);
}

#[rstest]
fn test_mixed_type_between_is_rejected(mut document_query: QueryObject) {
	let store = store_of([document("a.bin", 1)]);
	document_query
		.add_condition(QueryCondition::new(
			"contentLength",
			QueryOperatorType::Between,
			vec![
				QueryValue::Long(0),
				QueryValue::parse(DataType::Date, "contentLength", "2024-01-01").unwrap(),
			],
		))
		.unwrap();

	let err = store
		.find(&document_query.get_specification().unwrap())
		.unwrap_err();

	assert_eq!(
		err,
		StoreError::Query(QueryError::RangeTypeMismatch {
			field: "contentLength".to_string(),
			lower: DataType::Long,
			upper: DataType::Date,
		})
	);
}

#[test]
fn test_equal_object_uuid_finds_owned_records() {
	let owner = Person::new("Ada", "Lovelace");
	let reference = OwnerReference::new(EntityType::Person, owner.base.id);
	let store: InMemoryStore<EmailAddress> = [
		EmailAddress::new("ada@example.com", Some(reference)),
		EmailAddress::new("other@example.com", None),
	]
	.into_iter()
	.collect();

	let mut query = QueryObject::email_address().unwrap();
	query
		.add_condition(QueryCondition::single(
			"parent",
			QueryOperatorType::EqualObjectUuid,
			owner.base.id.to_string(),
		))
		.unwrap()
		.add_condition(QueryCondition::equal("parentType", "PERSON"))
		.unwrap();
	let found = store.find(&query.get_specification().unwrap()).unwrap();

	assert_eq!(found.len(), 1);
	assert_eq!(found[0].email.as_deref(), Some("ada@example.com"));
}

#[test]
fn test_search_payload_against_store() {
	let mut bern = PostalAddress::new("Bern", None);
	bern.zip_code = Some("3011".to_string());
	bern.is_default_address = true;
	let mut zurich = PostalAddress::new("Zürich", None);
	zurich.zip_code = Some("8001".to_string());
	let store: InMemoryStore<PostalAddress> = [bern, zurich].into_iter().collect();

	let request = SearchRequest::from_json(
		r#"{
			"conditions": [
				{ "field": "isDefaultAddress", "operator": "EQUAL", "values": [true] },
				{ "field": "zipCode", "operator": "MATCH_END", "values": [30] }
			]
		}"#,
	)
	.unwrap();
	let mut query = QueryObject::postal_address().unwrap();
	request.apply_to(&mut query).unwrap();
	let found = store.find(&query.get_specification().unwrap()).unwrap();

	assert_eq!(found.len(), 1);
	assert_eq!(found[0].city.as_deref(), Some("Bern"));
}

#[test]
fn test_person_date_comparison() {
	let mut older = Person::new("Grace", "Hopper");
	older.birth_date = QueryValue::parse(DataType::Date, "birthDate", "1906-12-09")
		.ok()
		.and_then(|v| match v {
			QueryValue::Date(d) => Some(d),
			_ => None,
		});
	let younger = Person::new("Unknown", "Birthdate");
	let store: InMemoryStore<Person> = [older, younger].into_iter().collect();

	let mut query = QueryObject::person().unwrap();
	query
		.add_condition(QueryCondition::single(
			"birthDate",
			QueryOperatorType::LessThan,
			"1950-01-01",
		))
		.unwrap();
	let found = store.find(&query.get_specification().unwrap()).unwrap();

	assert_eq!(found.len(), 1);
	assert_eq!(found[0].last_name.as_deref(), Some("Hopper"));
}

#[test]
fn test_documents_are_send_between_threads() {
	let store = store_of([document("a.jpg", 1), document("b.jpg", 2)]);
	let handle = std::thread::spawn(move || {
		let mut query = QueryObject::document().unwrap();
		query
			.add_condition(QueryCondition::equal("extension", "jpg"))
			.unwrap();
		store.count(&query.get_specification().unwrap()).unwrap()
	});
	assert_eq!(handle.join().unwrap(), 2);
}

