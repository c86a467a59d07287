//! Specification building under layered settings

use commerce_conf::{DefaultSource, EnumLiteralPolicy, QuerySettings, SettingsBuilder};
use commerce_core::{EntityType, StatusType};
use commerce_query::{
	Predicate, QueryCondition, QueryError, QueryObject, QueryOperatorType, QueryValue, Record,
	SqlDialect, sea_value,
};
use rstest::*;
use sea_query::{Value, Values};
use serde_json::Value as JsonValue;

#[fixture]
fn lenient_settings() -> QuerySettings {
	SettingsBuilder::new()
		.add_source(DefaultSource::new().with_value("enum_literal_policy", JsonValue::from("lenient")))
		.build()
		.unwrap()
}

#[fixture]
fn status_query() -> QueryObject {
	let mut query = QueryObject::person().unwrap();
	query
		.add_condition(QueryCondition::equal("lastName", "Muster"))
		.unwrap()
		.add_condition(QueryCondition::equal("statusType", "ARCHIVED"))
		.unwrap();
	query
}

#[rstest]
fn test_strict_policy_is_default(status_query: QueryObject) {
	assert_eq!(
		status_query.settings().enum_literal_policy,
		EnumLiteralPolicy::Strict
	);
	let err = status_query.get_specification().unwrap_err();
	assert_eq!(
		err,
		QueryError::UnresolvedEnumLiteral {
			field: "statusType".to_string(),
			enum_name: "StatusType".to_string(),
			literal: "ARCHIVED".to_string(),
		}
	);
}

#[rstest]
fn test_lenient_policy_drops_unresolved_condition(
	status_query: QueryObject,
	lenient_settings: QuerySettings,
) {
	let query = status_query.with_settings(lenient_settings);

	let specification = query.get_specification().unwrap();

	assert_eq!(specification.len(), 1);
	assert_eq!(specification.conditions()[0].field(), "lastName");
	// The query object keeps what it accepted
	assert_eq!(query.conditions().len(), 2);
}

#[rstest]
fn test_custom_wildcard_characters() {
	let settings = SettingsBuilder::new()
		.add_source(
			DefaultSource::new()
				.with_value("wildcard", JsonValue::from("?"))
				.with_value("pattern_wildcard", JsonValue::from("%")),
		)
		.build()
		.unwrap();
	let mut query = QueryObject::document().unwrap().with_settings(settings);
	query
		.add_condition(QueryCondition::single(
			"filename",
			QueryOperatorType::Match,
			"rep?rt*",
		))
		.unwrap();

	let predicate = query.get_specification().unwrap().to_predicate().unwrap();
	let clause = predicate.to_sql(SqlDialect::Postgres);

	assert_eq!(clause.values.0[0], Value::from("rep%rt*"));
}

#[rstest]
fn test_specification_sql_for_mixed_conditions() {
	let mut query = QueryObject::document().unwrap();
	query
		.add_condition(QueryCondition::equal("statusType", "ACTIVE"))
		.unwrap()
		.add_condition(QueryCondition::single(
			"contentLength",
			QueryOperatorType::GreaterThanEqual,
			1024i64,
		))
		.unwrap()
		.add_condition(QueryCondition::single(
			"filename",
			QueryOperatorType::MatchEnd,
			"Report",
		))
		.unwrap();

	let predicate = query.get_specification().unwrap().to_predicate().unwrap();
	let Predicate::And(parts) = &predicate else {
		panic!("specifications compile to a conjunction");
	};
	assert_eq!(parts.len(), 3);

	let clause = predicate.to_sql(SqlDialect::MySql);
	assert!(
		clause
			.sql
			.starts_with("`status_type` = ? AND `content_length` >= ? AND LOWER(`filename`) LIKE ?"),
		"{}",
		clause.sql
	);
	assert_eq!(
		clause.values,
		Values(vec![
			sea_value(&QueryValue::enumeration(StatusType::Active)),
			Value::from(1024i64),
			Value::from("report%"),
		])
	);
}

struct NamedFile(&'static str);

impl Record for NamedFile {
	fn entity_type(&self) -> EntityType {
		EntityType::Document
	}

	fn field_value(&self, field: &str) -> Option<QueryValue> {
		(field == "filename").then(|| QueryValue::from(self.0))
	}
}

#[rstest]
#[case("my-license-v2.pdf", true)]
#[case("#license#", true)]
#[case("licence.txt", false)]
fn test_custom_pattern_wildcard_renders_standard_like(
	#[case] filename: &'static str,
	#[case] expected: bool,
) {
	let settings = SettingsBuilder::new()
		.add_source(DefaultSource::new().with_value("pattern_wildcard", JsonValue::from("#")))
		.build()
		.unwrap();
	let mut query = QueryObject::document().unwrap().with_settings(settings);
	query
		.add_condition(QueryCondition::single(
			"filename",
			QueryOperatorType::MatchBetween,
			"license",
		))
		.unwrap();
	let specification = query.get_specification().unwrap();

	assert_eq!(
		specification.is_satisfied_by(&NamedFile(filename)).unwrap(),
		expected
	);
	let clause = specification
		.to_predicate()
		.unwrap()
		.to_sql(SqlDialect::Postgres);
	assert_eq!(clause.values, Values(vec![Value::from("%license%")]));
}
