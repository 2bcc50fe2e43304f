// tests/support/mocks/repos.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use mokkan_slug::domain::errors::{DomainError, DomainResult};
use mokkan_slug::domain::slug::{ExistenceQuery, FieldName, SlugExistenceRepository};

/// Reports a collision for every slug in `taken`, ignoring scope and exclusion,
/// and records each existence query.
pub struct ScriptedRepo {
    taken: HashSet<String>,
    queries: Mutex<Vec<ExistenceQuery>>,
    column_length: Option<usize>,
}

impl ScriptedRepo {
    pub fn new<I, S>(taken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: taken.into_iter().map(Into::into).collect(),
            queries: Mutex::new(Vec::new()),
            column_length: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Every value `base`, `base-1`, ... `base-{count-1}` is taken.
    pub fn taken_run(base: &str, count: usize) -> Self {
        Self::new((0..count).map(|i| {
            if i == 0 {
                base.to_string()
            } else {
                format!("{base}-{i}")
            }
        }))
    }

    pub fn with_column_length(mut self, length: usize) -> Self {
        self.column_length = Some(length);
        self
    }

    pub fn queries(&self) -> Vec<ExistenceQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn checked_values(&self) -> Vec<String> {
        self.queries()
            .iter()
            .map(|query| query.value().to_string())
            .collect()
    }
}

#[async_trait]
impl SlugExistenceRepository for ScriptedRepo {
    async fn exists(&self, query: &ExistenceQuery) -> DomainResult<bool> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.taken.contains(query.value()))
    }

    fn column_length(&self, _field: &FieldName) -> Option<usize> {
        self.column_length
    }
}

pub struct FailingRepo;

#[async_trait]
impl SlugExistenceRepository for FailingRepo {
    async fn exists(&self, _query: &ExistenceQuery) -> DomainResult<bool> {
        Err(DomainError::PersistenceUnavailable("connection refused".into()))
    }
}

/// Reports a collision for the first `collisions` lookups, whatever they ask for.
pub struct BusyRepo {
    collisions: usize,
    queries: Mutex<Vec<String>>,
}

impl BusyRepo {
    pub fn new(collisions: usize) -> Self {
        Self {
            collisions,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn checked_values(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugExistenceRepository for BusyRepo {
    async fn exists(&self, query: &ExistenceQuery) -> DomainResult<bool> {
        let mut queries = self.queries.lock().unwrap();
        queries.push(query.value().to_string());
        Ok(queries.len() <= self.collisions)
    }
}
