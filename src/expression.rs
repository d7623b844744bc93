//! Typed construction of DynamoDB filter and projection expressions.
//!
//! Attribute names and values never appear inline in the rendered
//! expression strings. Names are replaced by `#N` placeholders and values by
//! `:N` placeholders, with the substitutions returned alongside in the maps
//! DynamoDB expects as `ExpressionAttributeNames` and
//! `ExpressionAttributeValues`.

use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

use crate::codec::Item;
use crate::error::ExpressionError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn equal(self, value: Value) -> Condition {
        Condition::Equal(self, value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Value(AttributeValue);

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Self(AttributeValue::S(value.into()))
    }

    pub fn as_attribute(&self) -> &AttributeValue {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equal(Name, Value),
}

impl Condition {
    /// Evaluate the condition against a stored item. A missing attribute
    /// never compares equal.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Condition::Equal(name, value) => item
                .get(name.as_str())
                .is_some_and(|stored| stored == value.as_attribute()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    names: Vec<Name>,
}

impl Projection {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Name::new).collect(),
        }
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(Name::as_str)
    }

    /// Keep only the projected attributes of an item.
    pub fn apply(&self, item: &Item) -> Item {
        self.attributes()
            .filter_map(|name| item.get(name).map(|v| (name.to_string(), v.clone())))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct ExpressionBuilder {
    filter: Option<Condition>,
    projection: Option<Projection>,
}

impl ExpressionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, condition: Condition) -> Self {
        self.filter = Some(condition);
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn build(self) -> Result<Expression, ExpressionError> {
        if self.filter.is_none() && self.projection.is_none() {
            return Err(ExpressionError::EmptyBuilder);
        }

        let mut aliases = Aliases::default();

        let filter = match &self.filter {
            Some(Condition::Equal(name, value)) => {
                let name = aliases.name(name)?;
                let value = aliases.value(value);
                Some(format!("{} = {}", name, value))
            }
            None => None,
        };

        let projection = match &self.projection {
            Some(projection) => {
                if projection.names.is_empty() {
                    return Err(ExpressionError::EmptyProjection);
                }
                let rendered = projection
                    .names
                    .iter()
                    .map(|name| aliases.name(name))
                    .collect::<Result<Vec<_>, _>>()?;
                Some(rendered.join(", "))
            }
            None => None,
        };

        Ok(Expression {
            filter,
            projection,
            names: aliases.names,
            values: aliases.values,
            condition: self.filter,
            projected: self.projection,
        })
    }
}

#[derive(Default)]
struct Aliases {
    names: HashMap<String, String>,
    values: HashMap<String, AttributeValue>,
    by_name: HashMap<String, String>,
}

impl Aliases {
    fn name(&mut self, name: &Name) -> Result<String, ExpressionError> {
        if name.as_str().trim().is_empty() {
            return Err(ExpressionError::EmptyName);
        }
        if let Some(alias) = self.by_name.get(name.as_str()) {
            return Ok(alias.clone());
        }

        let alias = format!("#{}", self.by_name.len());
        self.by_name.insert(name.as_str().to_string(), alias.clone());
        self.names.insert(alias.clone(), name.as_str().to_string());
        Ok(alias)
    }

    fn value(&mut self, value: &Value) -> String {
        let alias = format!(":{}", self.values.len());
        self.values.insert(alias.clone(), value.as_attribute().clone());
        alias
    }
}

/// A built expression: rendered strings for the wire plus the structured
/// parts they were rendered from.
#[derive(Debug, Clone)]
pub struct Expression {
    filter: Option<String>,
    projection: Option<String>,
    names: HashMap<String, String>,
    values: HashMap<String, AttributeValue>,
    condition: Option<Condition>,
    projected: Option<Projection>,
}

impl Expression {
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn projection(&self) -> Option<&str> {
        self.projection.as_deref()
    }

    pub fn names(&self) -> &HashMap<String, String> {
        &self.names
    }

    pub fn values(&self) -> &HashMap<String, AttributeValue> {
        &self.values
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn projected(&self) -> Option<&Projection> {
        self.projected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(pairs: &[(&str, &str)]) -> Item {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), AttributeValue::S(v.to_string())))
            .collect()
    }

    #[test]
    fn test_filter_and_projection_share_name_aliases() {
        let expr = ExpressionBuilder::new()
            .with_filter(Name::new("id").equal(Value::string("3")))
            .with_projection(Projection::names(["id", "date", "temperature"]))
            .build()
            .unwrap();

        assert_eq!(expr.filter(), Some("#0 = :0"));
        assert_eq!(expr.projection(), Some("#0, #1, #2"));
        assert_eq!(expr.names().len(), 3);
        assert_eq!(expr.names()["#0"], "id");
        assert_eq!(expr.names()["#1"], "date");
        assert_eq!(expr.names()["#2"], "temperature");
        assert_eq!(expr.values()[":0"], AttributeValue::S("3".to_string()));
    }

    #[test]
    fn test_projection_only() {
        let expr = ExpressionBuilder::new()
            .with_projection(Projection::names(["date"]))
            .build()
            .unwrap();

        assert_eq!(expr.filter(), None);
        assert_eq!(expr.projection(), Some("#0"));
        assert!(expr.values().is_empty());
    }

    #[test]
    fn test_build_errors() {
        assert_eq!(
            ExpressionBuilder::new().build().unwrap_err(),
            ExpressionError::EmptyBuilder
        );

        let err = ExpressionBuilder::new()
            .with_filter(Name::new(" ").equal(Value::string("3")))
            .build()
            .unwrap_err();
        assert_eq!(err, ExpressionError::EmptyName);

        let err = ExpressionBuilder::new()
            .with_projection(Projection::names(Vec::<String>::new()))
            .build()
            .unwrap_err();
        assert_eq!(err, ExpressionError::EmptyProjection);
    }

    #[test]
    fn test_condition_matches() {
        let cond = Name::new("id").equal(Value::string("3"));

        assert!(cond.matches(&item(&[("id", "3"), ("date", "d")])));
        assert!(!cond.matches(&item(&[("id", "4")])));
        assert!(!cond.matches(&item(&[("date", "d")])));
    }

    #[test]
    fn test_projection_apply_drops_other_attributes() {
        let projection = Projection::names(["id", "temperature"]);
        let projected = projection.apply(&item(&[("id", "3"), ("temperature", "25"), ("humidity", "50")]));

        assert_eq!(projected, item(&[("id", "3"), ("temperature", "25")]));
    }
}
