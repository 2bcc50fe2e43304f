use crate::domain::slug::value_objects::{FieldName, FieldValue};
use std::collections::BTreeMap;

/// Extra equality conditions narrowing the collision search.
pub type Scope = BTreeMap<FieldName, FieldValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    NotEq,
}

impl Operator {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => " = ",
            Self::NotEq => " <> ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: FieldName,
    pub operator: Operator,
    pub value: FieldValue,
}

/// Keeps a record from colliding with its own persisted slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    pub field: FieldName,
    pub identity: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceQuery {
    field: FieldName,
    value: String,
    scope: Scope,
    exclude: Option<Exclusion>,
}

impl ExistenceQuery {
    pub fn new(
        field: FieldName,
        value: impl Into<String>,
        scope: Scope,
        exclude: Option<Exclusion>,
    ) -> Self {
        Self {
            field,
            value: value.into(),
            scope,
            exclude,
        }
    }

    pub fn field(&self) -> &FieldName {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn exclusion(&self) -> Option<&Exclusion> {
        self.exclude.as_ref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Target equality first, then scope equalities in key order, then the exclusion.
    pub fn conditions(&self) -> Vec<Condition> {
        let mut conditions = Vec::with_capacity(self.scope.len() + 2);
        conditions.push(Condition {
            field: self.field.clone(),
            operator: Operator::Eq,
            value: FieldValue::Text(self.value.clone()),
        });
        conditions.extend(self.scope.iter().map(|(field, value)| Condition {
            field: field.clone(),
            operator: Operator::Eq,
            value: value.clone(),
        }));
        if let Some(exclusion) = &self.exclude {
            conditions.push(Condition {
                field: exclusion.field.clone(),
                operator: Operator::NotEq,
                value: exclusion.identity.clone(),
            });
        }
        conditions
    }

    /// Evaluate against an in-memory row. A missing column never equals a value
    /// and is always "not equal" to one.
    pub fn matches(&self, row: &BTreeMap<FieldName, FieldValue>) -> bool {
        self.conditions().iter().all(|condition| {
            let current = row.get(&condition.field);
            match condition.operator {
                Operator::Eq => current == Some(&condition.value),
                Operator::NotEq => current != Some(&condition.value),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> FieldName {
        FieldName::new(value).unwrap()
    }

    fn row(entries: &[(&str, FieldValue)]) -> BTreeMap<FieldName, FieldValue> {
        entries
            .iter()
            .map(|(field, value)| (name(field), value.clone()))
            .collect()
    }

    #[test]
    fn conditions_are_target_scope_then_exclusion() {
        let mut scope = Scope::new();
        scope.insert(name("site_id"), FieldValue::Integer(2));
        let query = ExistenceQuery::new(
            name("slug"),
            "hello",
            scope,
            Some(Exclusion {
                field: name("id"),
                identity: FieldValue::Integer(7),
            }),
        );

        let ops = query
            .conditions()
            .into_iter()
            .map(|c| (c.field.to_string(), c.operator))
            .collect::<Vec<_>>();
        assert_eq!(
            ops,
            vec![
                ("slug".to_string(), Operator::Eq),
                ("site_id".to_string(), Operator::Eq),
                ("id".to_string(), Operator::NotEq),
            ]
        );
    }

    #[test]
    fn exclusion_skips_own_row() {
        let query = ExistenceQuery::new(
            name("slug"),
            "hello",
            Scope::new(),
            Some(Exclusion {
                field: name("id"),
                identity: FieldValue::Integer(1),
            }),
        );
        let own = row(&[("id", 1.into()), ("slug", "hello".into())]);
        let other = row(&[("id", 2.into()), ("slug", "hello".into())]);
        assert!(!query.matches(&own));
        assert!(query.matches(&other));
    }
}
