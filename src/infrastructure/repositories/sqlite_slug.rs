use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{ExistenceQuery, FieldName, FieldValue, SlugExistenceRepository};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::BTreeMap;
use std::sync::Arc;

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn quoted(name: &str) -> DomainResult<String> {
    if is_identifier(name) {
        Ok(format!("\"{name}\""))
    } else {
        Err(DomainError::Configuration(format!(
            "`{name}` is not a plain SQL identifier"
        )))
    }
}

/// Existence checks against one SQLite table.
#[derive(Clone)]
pub struct SqliteSlugRepository {
    pool: Arc<SqlitePool>,
    table: String,
    column_lengths: BTreeMap<FieldName, usize>,
}

impl SqliteSlugRepository {
    pub fn new(pool: Arc<SqlitePool>, table: impl Into<String>) -> DomainResult<Self> {
        let table = quoted(table.into().trim())?;
        Ok(Self {
            pool,
            table,
            column_lengths: BTreeMap::new(),
        })
    }

    /// SQLite does not enforce `VARCHAR(n)`, so the width is declared here.
    pub fn with_column_length(mut self, field: FieldName, length: usize) -> Self {
        self.column_lengths.insert(field, length);
        self
    }
}

#[async_trait]
impl SlugExistenceRepository for SqliteSlugRepository {
    async fn exists(&self, query: &ExistenceQuery) -> DomainResult<bool> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM ");
        builder.push(&self.table);

        for (idx, condition) in query.conditions().into_iter().enumerate() {
            builder.push(if idx == 0 { " WHERE " } else { " AND " });
            builder.push(quoted(condition.field.as_str())?);
            builder.push(condition.operator.as_sql());
            match condition.value {
                FieldValue::Text(value) => builder.push_bind(value),
                FieldValue::Integer(value) => builder.push_bind(value),
                FieldValue::Bool(value) => builder.push_bind(value),
            };
        }
        builder.push(")");

        let found: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(found != 0)
    }

    fn column_length(&self, field: &FieldName) -> Option<usize> {
        self.column_lengths.get(field).copied()
    }
}
