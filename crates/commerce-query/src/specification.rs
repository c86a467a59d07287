//! Specifications and predicate compilation
//!
//! [`SpecificationBuilder`] receives accepted conditions together with their
//! field declarations, applies the wildcard substitution and enum coercion
//! pre-passes, and produces a [`Specification`]. The specification compiles
//! into a single conjunctive [`Predicate`].

use crate::condition::QueryCondition;
use crate::data_type::DataType;
use crate::error::{QueryError, QueryResult};
use crate::field::QueryField;
use crate::operator::QueryOperatorType;
use crate::predicate::{ComparisonOperator, LikePattern, Predicate, Record};
use crate::value::{EnumConstant, QueryValue};
use commerce_conf::{EnumLiteralPolicy, QuerySettings};
use commerce_core::{EntityType, EnumDescriptor};
use indexmap::IndexMap;

/// Replace `from` with `to` in the first value of every string condition
///
/// Non-string values are left alone. Applying the substitution twice gives
/// the same result as applying it once, provided `from != to`.
///
/// # Examples
///
/// ```
/// use commerce_query::{QueryCondition, QueryValue, substitute_special_characters};
///
/// let mut conditions = vec![
///     QueryCondition::equal("filename", "lic*nse*"),
///     QueryCondition::equal("contentLength", 12i64),
/// ];
/// substitute_special_characters(&mut conditions, '*', '%');
/// assert_eq!(conditions[0].values()[0], QueryValue::from("lic%nse%"));
/// assert_eq!(conditions[1].values()[0], QueryValue::Long(12));
/// ```
pub fn substitute_special_characters(conditions: &mut [QueryCondition], from: char, to: char) {
	for condition in conditions {
		if let Some(QueryValue::String(value)) = condition.values_mut().first_mut()
			&& value.contains(from)
		{
			*value = value.replace(from, &to.to_string());
		}
	}
}

/// Ordered conjunction of accepted, pre-processed conditions
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
	entity_type: EntityType,
	conditions: Vec<QueryCondition>,
	field_types: IndexMap<String, DataType>,
	settings: QuerySettings,
}

impl Specification {
	pub fn entity_type(&self) -> EntityType {
		self.entity_type
	}

	pub fn conditions(&self) -> &[QueryCondition] {
		&self.conditions
	}

	pub fn len(&self) -> usize {
		self.conditions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.conditions.is_empty()
	}

	/// Declared type of a field some condition targets
	pub fn field_type(&self, field: &str) -> Option<DataType> {
		self.field_types.get(field).copied()
	}

	/// Compile to one predicate per condition, joined with AND
	///
	/// An empty specification compiles to an empty conjunction, which matches
	/// every record.
	pub fn to_predicate(&self) -> QueryResult<Predicate> {
		let predicates = self
			.conditions
			.iter()
			.map(|condition| self.compile(condition))
			.collect::<QueryResult<Vec<_>>>()?;
		tracing::debug!(
			entity_type = %self.entity_type,
			predicates = predicates.len(),
			"compiled specification"
		);
		Ok(Predicate::And(predicates))
	}

	/// Compile and evaluate against a single record
	///
	/// Records of a different entity type never match.
	pub fn is_satisfied_by(&self, record: &dyn Record) -> QueryResult<bool> {
		if record.entity_type() != self.entity_type {
			return Ok(false);
		}
		Ok(self.to_predicate()?.matches(record))
	}

	fn compile(&self, condition: &QueryCondition) -> QueryResult<Predicate> {
		let field = condition.field().to_string();
		let values = condition.values();
		let first = values.first().cloned().ok_or_else(|| {
			QueryError::MalformedCondition(format!("no values given for field '{field}'"))
		})?;
		let wildcard = self.settings.pattern_wildcard;
		let column_type = self.field_type(&field).unwrap_or(DataType::String);

		let predicate = match condition.operator() {
			QueryOperatorType::Equal => Predicate::Equal { field, value: first },
			QueryOperatorType::NotEqual => Predicate::NotEqual { field, value: first },
			QueryOperatorType::Match => Predicate::Like {
				field,
				pattern: LikePattern::with_wildcard(&first.to_literal(), wildcard)?,
				column_type,
			},
			QueryOperatorType::MatchEnd => Predicate::Like {
				field,
				pattern: LikePattern::with_wildcard(
					&format!("{}{wildcard}", first.to_literal()),
					wildcard,
				)?,
				column_type,
			},
			QueryOperatorType::MatchBefore => Predicate::Like {
				field,
				pattern: LikePattern::with_wildcard(
					&format!("{wildcard}{}", first.to_literal()),
					wildcard,
				)?,
				column_type,
			},
			QueryOperatorType::MatchBetween => Predicate::Like {
				field,
				pattern: LikePattern::with_wildcard(
					&format!("{wildcard}{}{wildcard}", first.to_literal()),
					wildcard,
				)?,
				column_type,
			},
			QueryOperatorType::GreaterThan => Predicate::compare(field, ComparisonOperator::Gt, first),
			QueryOperatorType::LessThan => Predicate::compare(field, ComparisonOperator::Lt, first),
			QueryOperatorType::GreaterThanEqual => {
				Predicate::compare(field, ComparisonOperator::Gte, first)
			}
			QueryOperatorType::LessThanEqual => {
				Predicate::compare(field, ComparisonOperator::Lte, first)
			}
			QueryOperatorType::EqualObjectUuid => {
				let id = first.as_uuid().ok_or_else(|| QueryError::InvalidValue {
					field: field.clone(),
					data_type: DataType::Uuid,
					value: first.to_literal(),
				})?;
				Predicate::EqualObjectId { field, id }
			}
			QueryOperatorType::Between => {
				let upper = values.get(1).cloned().ok_or_else(|| {
					QueryError::MalformedCondition(format!(
						"BETWEEN on field '{field}' takes 2 value(s), got 1"
					))
				})?;
				check_range(&field, &first, &upper)?;
				Predicate::Between {
					field,
					low: first,
					high: upper,
				}
			}
		};

		tracing::trace!(condition = %condition, predicate = ?predicate, "compiled condition");
		Ok(predicate)
	}
}

fn check_range(field: &str, lower: &QueryValue, upper: &QueryValue) -> QueryResult<()> {
	let lower_type = lower.data_type();
	if !lower_type.supports_range() {
		return Err(QueryError::UnsupportedRangeType {
			field: field.to_string(),
			data_type: lower_type,
		});
	}
	if upper.data_type() != lower_type {
		return Err(QueryError::RangeTypeMismatch {
			field: field.to_string(),
			lower: lower_type,
			upper: upper.data_type(),
		});
	}
	Ok(())
}

/// Assembles a [`Specification`] from accepted conditions
#[derive(Debug, Clone)]
pub struct SpecificationBuilder {
	entity_type: EntityType,
	settings: QuerySettings,
	conditions: Vec<QueryCondition>,
	field_types: IndexMap<String, DataType>,
}

impl SpecificationBuilder {
	pub fn new(entity_type: EntityType, settings: QuerySettings) -> Self {
		Self {
			entity_type,
			settings,
			conditions: Vec::new(),
			field_types: IndexMap::new(),
		}
	}

	/// Add a condition together with the field it targets
	///
	/// Wildcards in the first string value are substituted, then ENUM
	/// literals are resolved. Under [`EnumLiteralPolicy::Lenient`] an
	/// unresolvable literal is dropped and the condition is kept only when
	/// at least one value survives.
	pub fn with(mut self, mut condition: QueryCondition, field: &QueryField) -> QueryResult<Self> {
		substitute_special_characters(
			std::slice::from_mut(&mut condition),
			self.settings.wildcard,
			self.settings.pattern_wildcard,
		);

		if let Some(descriptor) = field.enum_type() {
			let resolved = self.coerce_enum_values(&condition, descriptor)?;
			if resolved.is_empty() {
				tracing::warn!(
					field = condition.field(),
					enumeration = descriptor.name(),
					"dropping condition without resolvable enum literals"
				);
				return Ok(self);
			}
			*condition.values_mut() = resolved;
		}

		self.field_types
			.insert(condition.field().to_string(), field.field_type());
		self.conditions.push(condition);
		Ok(self)
	}

	pub fn build(self) -> Specification {
		Specification {
			entity_type: self.entity_type,
			conditions: self.conditions,
			field_types: self.field_types,
			settings: self.settings,
		}
	}

	fn coerce_enum_values(
		&self,
		condition: &QueryCondition,
		descriptor: &EnumDescriptor,
	) -> QueryResult<Vec<QueryValue>> {
		let mut resolved = Vec::with_capacity(condition.values().len());
		for value in condition.values() {
			let constant = match value {
				QueryValue::Enum(constant) if constant.enum_name() == descriptor.name() => {
					Some(*constant)
				}
				QueryValue::String(literal) => descriptor
					.resolve(literal)
					.map(|name| EnumConstant::new(descriptor.name(), name)),
				_ => None,
			};

			match (constant, self.settings.enum_literal_policy) {
				(Some(constant), _) => resolved.push(QueryValue::Enum(constant)),
				(None, EnumLiteralPolicy::Strict) => {
					return Err(QueryError::UnresolvedEnumLiteral {
						field: condition.field().to_string(),
						enum_name: descriptor.name().to_string(),
						literal: value.to_literal(),
					});
				}
				(None, EnumLiteralPolicy::Lenient) => {
					tracing::warn!(
						field = condition.field(),
						enumeration = descriptor.name(),
						literal = %value,
						"dropping unresolvable enum literal"
					);
				}
			}
		}
		Ok(resolved)
	}
}
