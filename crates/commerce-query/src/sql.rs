//! SQL rendering of compiled predicates
//!
//! Predicates are lowered to a sea-query [`Condition`] and rendered by the
//! query builder of the target dialect. Field names are mapped from the
//! registry's camelCase to snake_case columns; literals are always bound.

use crate::data_type::DataType;
use crate::predicate::{ComparisonOperator, LikePattern, Predicate};
use crate::value::QueryValue;
use sea_query::{
	Alias, Asterisk, Condition, Expr, ExprTrait, Func, LikeExpr,
	MysqlQueryBuilder, PostgresQueryBuilder, Query, SimpleExpr, SqliteQueryBuilder, Value, Values,
};
use std::fmt;

/// Target SQL dialect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SqlDialect {
	/// `"column"` identifiers, `$n` placeholders
	#[default]
	Postgres,
	/// `` `column` `` identifiers, `?` placeholders
	MySql,
	/// `"column"` identifiers, `?` placeholders
	Sqlite,
}

impl SqlDialect {
	/// Type non-text columns are cast to before pattern matching
	fn text_type(&self) -> &'static str {
		match self {
			SqlDialect::MySql => "CHAR",
			SqlDialect::Postgres | SqlDialect::Sqlite => "TEXT",
		}
	}

	/// Render `condition` inside a throwaway SELECT and keep what follows WHERE
	fn render(&self, condition: Condition) -> (String, Values) {
		let mut statement = Query::select();
		statement
			.column(Asterisk)
			.from(Alias::new("records"))
			.cond_where(condition);
		let (sql, values) = match self {
			SqlDialect::Postgres => statement.build(PostgresQueryBuilder),
			SqlDialect::MySql => statement.build(MysqlQueryBuilder),
			SqlDialect::Sqlite => statement.build(SqliteQueryBuilder),
		};
		let sql = sql
			.find(" WHERE ")
			.map(|idx| sql[idx + " WHERE ".len()..].to_string())
			.unwrap_or_default();
		(sql, values)
	}
}

/// Rendered WHERE fragment and its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
	pub sql: String,
	pub values: Values,
}

impl WhereClause {
	pub fn is_empty(&self) -> bool {
		self.sql.is_empty()
	}

	/// The fragment prefixed with ` WHERE `, or an empty string
	pub fn to_where(&self) -> String {
		if self.is_empty() {
			String::new()
		} else {
			format!(" WHERE {}", self.sql)
		}
	}
}

impl fmt::Display for WhereClause {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.sql)
	}
}

/// Column name of a registry field (`contentLength` -> `content_length`)
pub fn column_name(field: &str) -> String {
	let mut column = String::with_capacity(field.len() + 4);
	for (i, c) in field.chars().enumerate() {
		if c.is_uppercase() {
			if i > 0 {
				column.push('_');
			}
			column.extend(c.to_lowercase());
		} else {
			column.push(c);
		}
	}
	column
}

/// Foreign-key column holding the identifier of a referenced object
fn reference_column(field: &str) -> String {
	let column = column_name(field);
	if column == "id" || column.ends_with("_id") {
		column
	} else {
		format!("{column}_id")
	}
}

/// Convert a query literal to a bound sea-query value
pub fn sea_value(value: &QueryValue) -> Value {
	match value {
		QueryValue::String(v) => v.clone().into(),
		QueryValue::Integer(v) => (*v).into(),
		QueryValue::Long(v) => (*v).into(),
		QueryValue::Double(v) => (*v).into(),
		QueryValue::Float(v) => (*v).into(),
		QueryValue::Date(v) => (*v).into(),
		QueryValue::Uuid(v) => (*v).into(),
		QueryValue::Boolean(v) => (*v).into(),
		QueryValue::Enum(v) => v.name().to_string().into(),
	}
}

fn column(field: &str) -> Expr {
	Expr::col(Alias::new(column_name(field)))
}

/// `LOWER(col) LIKE pattern ESCAPE '\'`, casting non-text columns first
fn like_expr(
	field: &str,
	pattern: &LikePattern,
	column_type: DataType,
	dialect: SqlDialect,
) -> SimpleExpr {
	let target = if column_type == DataType::String {
		column(field)
	} else {
		column(field).cast_as(Alias::new(dialect.text_type()))
	};
	SimpleExpr::from(Func::lower(target))
		.like(LikeExpr::new(pattern.sql_pattern()).escape(LikePattern::SQL_ESCAPE))
}

impl Predicate {
	/// Render as a parameterized SQL condition
	///
	/// # Examples
	///
	/// ```
	/// use commerce_query::{Predicate, QueryValue, SqlDialect};
	///
	/// let predicate = Predicate::And(vec![
	///     Predicate::Equal { field: "extension".into(), value: QueryValue::from("jpg") },
	///     Predicate::Between {
	///         field: "contentLength".into(),
	///         low: QueryValue::Long(34000),
	///         high: QueryValue::Long(35000),
	///     },
	/// ]);
	/// let clause = predicate.to_sql(SqlDialect::Postgres);
	/// assert_eq!(
	///     clause.sql,
	///     r#""extension" = $1 AND "content_length" BETWEEN $2 AND $3"#
	/// );
	/// assert_eq!(clause.values.0.len(), 3);
	/// ```
	pub fn to_sql(&self, dialect: SqlDialect) -> WhereClause {
		if self.is_vacuous() {
			return WhereClause {
				sql: String::new(),
				values: Values(Vec::new()),
			};
		}
		let (sql, values) = dialect.render(self.to_condition(dialect));
		WhereClause { sql, values }
	}

	/// Lower to a sea-query condition; conjunctions become `Condition::all()`
	pub fn to_condition(&self, dialect: SqlDialect) -> Condition {
		match self {
			Predicate::And(predicates) => predicates
				.iter()
				.filter(|p| !p.is_vacuous())
				.fold(Condition::all(), |condition, p| condition.add(p.lower(dialect))),
			leaf => Condition::all().add(leaf.lower(dialect)),
		}
	}

	/// Conjunction without any leaf predicate
	fn is_vacuous(&self) -> bool {
		match self {
			Predicate::And(predicates) => predicates.iter().all(Predicate::is_vacuous),
			_ => false,
		}
	}

	fn lower(&self, dialect: SqlDialect) -> Condition {
		let expr: SimpleExpr = match self {
			Predicate::And(_) => return self.to_condition(dialect).into(),
			Predicate::Equal { field, value } => column(field).eq(sea_value(value)),
			Predicate::NotEqual { field, value } => column(field).ne(sea_value(value)),
			Predicate::Like {
				field,
				pattern,
				column_type,
			} => like_expr(field, pattern, *column_type, dialect),
			Predicate::Compare { field, op, value } => {
				let value = sea_value(value);
				match op {
					ComparisonOperator::Gt => column(field).gt(value),
					ComparisonOperator::Lt => column(field).lt(value),
					ComparisonOperator::Gte => column(field).gte(value),
					ComparisonOperator::Lte => column(field).lte(value),
				}
			}
			Predicate::EqualObjectId { field, id } => {
				Expr::col(Alias::new(reference_column(field))).eq(Value::from(*id))
			}
			Predicate::Between { field, low, high } => {
				column(field).between(sea_value(low), sea_value(high))
			}
		};
		expr.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::predicate::Record;
	use commerce_core::EntityType;
	use rstest::rstest;
	use uuid::Uuid;

	struct Filename(&'static str);

	impl Record for Filename {
		fn entity_type(&self) -> EntityType {
			EntityType::Document
		}

		fn field_value(&self, field: &str) -> Option<QueryValue> {
			(field == "filename").then(|| QueryValue::from(self.0))
		}
	}

	fn like(field: &str, pattern: LikePattern, column_type: DataType) -> Predicate {
		Predicate::Like {
			field: field.to_string(),
			pattern,
			column_type,
		}
	}

	#[rstest]
	#[case("id", "id")]
	#[case("contentLength", "content_length")]
	#[case("isDefaultEmail", "is_default_email")]
	#[case("parentId", "parent_id")]
	fn test_column_name(#[case] field: &str, #[case] expected: &str) {
		assert_eq!(column_name(field), expected);
	}

	#[rstest]
	#[case(SqlDialect::Postgres, "\"file_name\" <> $1")]
	#[case(SqlDialect::MySql, "`file_name` <> ?")]
	#[case(SqlDialect::Sqlite, "\"file_name\" <> ?")]
	fn test_dialects(#[case] dialect: SqlDialect, #[case] expected: &str) {
		let predicate = Predicate::NotEqual {
			field: "fileName".to_string(),
			value: QueryValue::from("a"),
		};
		let clause = predicate.to_sql(dialect);
		assert_eq!(clause.sql, expected);
		assert_eq!(clause.values, Values(vec![Value::from("a")]));
	}

	#[test]
	fn test_like_lowers_column_and_binds_pattern() {
		let clause = like(
			"filename",
			LikePattern::new("%License%").unwrap(),
			DataType::String,
		)
		.to_sql(SqlDialect::Postgres);
		assert!(clause.sql.starts_with("LOWER(\"filename\") LIKE "));
		assert!(clause.sql.contains(" ESCAPE "));
		assert_eq!(clause.values.0[0], Value::from("%license%"));
	}

	#[rstest]
	#[case(SqlDialect::Postgres, "LOWER(CAST(\"content_length\" AS TEXT)) LIKE ")]
	#[case(SqlDialect::MySql, "LOWER(CAST(`content_length` AS CHAR)) LIKE ")]
	#[case(SqlDialect::Sqlite, "LOWER(CAST(\"content_length\" AS TEXT)) LIKE ")]
	fn test_like_on_long_column_casts_to_text(#[case] dialect: SqlDialect, #[case] expected: &str) {
		let clause = like(
			"contentLength",
			LikePattern::new("34%").unwrap(),
			DataType::Long,
		)
		.to_sql(dialect);
		assert!(clause.sql.starts_with(expected), "{}", clause.sql);
		assert_eq!(clause.values.0[0], Value::from("34%"));
	}

	#[rstest]
	#[case("#license#", "my-license-v2.pdf", "%license%")]
	#[case("100%#", "100%-final.txt", "100\\%%")]
	#[case("#LICENSE", "MIT-License", "%license")]
	fn test_custom_wildcard_agrees_with_in_memory_match(
		#[case] pattern: &str,
		#[case] filename: &'static str,
		#[case] expected: &str,
	) {
		let predicate = like(
			"filename",
			LikePattern::with_wildcard(pattern, '#').unwrap(),
			DataType::String,
		);

		assert!(predicate.matches(&Filename(filename)));
		let clause = predicate.to_sql(SqlDialect::Sqlite);
		assert_eq!(clause.values.0[0], Value::from(expected));
	}

	#[test]
	fn test_literal_percent_is_not_a_wildcard() {
		let predicate = like(
			"filename",
			LikePattern::with_wildcard("100%#", '#').unwrap(),
			DataType::String,
		);
		assert!(!predicate.matches(&Filename("1000.txt")));
		let clause = predicate.to_sql(SqlDialect::MySql);
		assert!(clause.sql.contains(" ESCAPE "));
	}

	#[rstest]
	#[case("parent", "\"parent_id\" = $1")]
	#[case("parentId", "\"parent_id\" = $1")]
	fn test_equal_object_uuid_targets_reference_column(#[case] field: &str, #[case] expected: &str) {
		let predicate = Predicate::EqualObjectId {
			field: field.to_string(),
			id: Uuid::nil(),
		};
		let clause = predicate.to_sql(SqlDialect::Postgres);
		assert_eq!(clause.sql, expected);
		assert_eq!(clause.values, Values(vec![Value::from(Uuid::nil())]));
	}

	#[test]
	fn test_comparison_symbols() {
		let rendered: Vec<_> = [
			ComparisonOperator::Gt,
			ComparisonOperator::Lt,
			ComparisonOperator::Gte,
			ComparisonOperator::Lte,
		]
		.into_iter()
		.map(|op| {
			Predicate::compare("since", op, QueryValue::from("2024-01-01"))
				.to_sql(SqlDialect::MySql)
				.sql
		})
		.collect();
		assert_eq!(
			rendered,
			vec!["`since` > ?", "`since` < ?", "`since` >= ?", "`since` <= ?"]
		);
	}

	#[test]
	fn test_empty_conjunction_renders_nothing() {
		let clause = Predicate::And(vec![Predicate::And(vec![])]).to_sql(SqlDialect::Postgres);
		assert!(clause.is_empty());
		assert_eq!(clause.to_where(), "");
		assert!(clause.values.0.is_empty());
	}

	#[test]
	fn test_nested_conjunction_binds_in_order() {
		let predicate = Predicate::And(vec![
			Predicate::Equal {
				field: "city".to_string(),
				value: QueryValue::from("Bern"),
			},
			Predicate::And(vec![
				Predicate::Equal {
					field: "state".to_string(),
					value: QueryValue::from("BE"),
				},
				Predicate::Equal {
					field: "country".to_string(),
					value: QueryValue::from("CH"),
				},
			]),
		]);
		let clause = predicate.to_sql(SqlDialect::Postgres);
		assert!(clause.to_where().starts_with(" WHERE \"city\" = $1 AND "));
		assert!(clause.sql.contains("\"state\" = $2"));
		assert!(clause.sql.contains("\"country\" = $3"));
		assert_eq!(
			clause.values,
			Values(vec![Value::from("Bern"), Value::from("BE"), Value::from("CH")])
		);
	}
}
