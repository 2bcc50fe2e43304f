// src/domain/slug/services/mod.rs
use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::conditions::{Exclusion, ExistenceQuery, Scope};
use crate::domain::slug::repository::SlugExistenceRepository;
use crate::domain::slug::value_objects::{FieldName, MaxLength, Separator, truncate_base};

/// Everything a uniqueness strategy needs to turn a candidate into a free slug.
#[derive(Debug, Clone)]
pub struct ResolveRequest<'a> {
    pub field: &'a FieldName,
    pub candidate: String,
    pub scope: &'a Scope,
    pub exclude: Option<Exclusion>,
    pub max_length: Option<MaxLength>,
    pub separator: &'a Separator,
}

#[async_trait]
pub trait UniqueSlugResolver: Send + Sync {
    async fn resolve(
        &self,
        request: ResolveRequest<'_>,
        repo: &dyn SlugExistenceRepository,
    ) -> DomainResult<String>;
}

/// Appends `{separator}{n}` with n = 1, 2, ... until the repository reports no match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixResolver {
    max_attempts: Option<u64>,
}

impl SuffixResolver {
    pub fn new(max_attempts: Option<u64>) -> Self {
        Self { max_attempts }
    }
}

/// SQL identifiers are case-insensitive, so `SLUG` would still constrain `slug`.
pub fn ensure_scope_excludes_field(scope: &Scope, field: &FieldName) -> DomainResult<()> {
    if scope
        .keys()
        .any(|key| key.as_str().eq_ignore_ascii_case(field.as_str()))
    {
        return Err(DomainError::InvalidScope(format!(
            "scope must not constrain the slug field `{field}`"
        )));
    }
    Ok(())
}

#[async_trait]
impl UniqueSlugResolver for SuffixResolver {
    async fn resolve(
        &self,
        request: ResolveRequest<'_>,
        repo: &dyn SlugExistenceRepository,
    ) -> DomainResult<String> {
        let ResolveRequest {
            field,
            candidate,
            scope,
            exclude,
            max_length,
            separator,
        } = request;

        ensure_scope_excludes_field(scope, field)?;

        let base = candidate.clone();
        let mut candidate = candidate;
        let mut query = ExistenceQuery::new(field.clone(), candidate.clone(), scope.clone(), exclude);
        let mut counter = 0u64;
        let mut suffix = String::new();

        loop {
            if !repo.exists(&query).await? {
                tracing::debug!(slug = %query.value(), lookups = counter + 1, "slug is free");
                return Ok(format!("{candidate}{suffix}"));
            }
            tracing::debug!(slug = %query.value(), "slug taken");

            counter += 1;
            if let Some(limit) = self.max_attempts {
                if counter > limit {
                    tracing::warn!(%base, attempts = limit, "suffix attempts exhausted");
                    return Err(DomainError::AttemptsExhausted {
                        base,
                        attempts: limit,
                    });
                }
            }
            suffix = format!("{separator}{counter}");

            if let Some(max_length) = max_length {
                let max_length = max_length.get();
                let suffix_len = suffix.chars().count();
                if suffix_len >= max_length {
                    return Err(DomainError::LengthExhausted { max_length, suffix });
                }
                if candidate.chars().count() + suffix_len > max_length {
                    candidate = truncate_base(&candidate, max_length - suffix_len, separator);
                    if candidate.is_empty() {
                        return Err(DomainError::LengthExhausted { max_length, suffix });
                    }
                }
            }

            query.set_value(format!("{candidate}{suffix}"));
        }
    }
}
