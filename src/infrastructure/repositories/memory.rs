use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{ExistenceQuery, FieldName, FieldValue, SlugExistenceRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

pub type Row = BTreeMap<FieldName, FieldValue>;

/// Existence checks over rows held in memory.
#[derive(Default)]
pub struct InMemorySlugRepository {
    rows: RwLock<Vec<Row>>,
    column_lengths: BTreeMap<FieldName, usize>,
}

impl InMemorySlugRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn with_column_length(mut self, field: FieldName, length: usize) -> Self {
        self.column_lengths.insert(field, length);
        self
    }

    pub fn insert(&self, row: Row) -> DomainResult<()> {
        self.rows
            .write()
            .map_err(|_| DomainError::persistence("row store poisoned"))?
            .push(row);
        Ok(())
    }
}

#[async_trait]
impl SlugExistenceRepository for InMemorySlugRepository {
    async fn exists(&self, query: &ExistenceQuery) -> DomainResult<bool> {
        let rows = self
            .rows
            .read()
            .map_err(|_| DomainError::persistence("row store poisoned"))?;
        Ok(rows.iter().any(|row| query.matches(row)))
    }

    fn column_length(&self, field: &FieldName) -> Option<usize> {
        self.column_lengths.get(field).copied()
    }
}
