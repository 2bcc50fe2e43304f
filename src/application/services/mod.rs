// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::{
        errors::{DomainError, DomainResult},
        slug::{
            Exclusion, MaxLength, ResolveRequest, Separator, SlugConfig, SlugExistenceRepository,
            SluggableRecord, SuffixResolver, UniqueSlugResolver, Uniqueness,
            value_objects::truncate_base,
        },
    },
};

/// What to derive a slug from.
#[derive(Clone, Copy)]
pub enum SlugInput<'a> {
    /// Ad-hoc text; normalized only, never checked for uniqueness.
    Text(&'a str),
    Record(&'a dyn SluggableRecord),
}

impl<'a> From<&'a str> for SlugInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Application service computing slugs for records of one collection.
pub struct SlugService {
    config: Arc<SlugConfig>,
    generator: Arc<dyn SlugGenerator>,
    repo: Arc<dyn SlugExistenceRepository>,
    clock: Arc<dyn Clock>,
    suffix_resolver: SuffixResolver,
    max_length: Option<MaxLength>,
}

impl SlugService {
    pub fn new(
        config: Arc<SlugConfig>,
        generator: Arc<dyn SlugGenerator>,
        repo: Arc<dyn SlugExistenceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let max_length = config.max_length().or_else(|| {
            repo.column_length(config.field())
                .and_then(|len| MaxLength::new(len).ok())
        });
        let suffix_resolver = SuffixResolver::new(config.max_attempts());

        Self {
            config,
            generator,
            repo,
            clock,
            suffix_resolver,
            max_length,
        }
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }

    /// Configured max length, falling back to the repository's column width.
    pub fn max_length(&self) -> Option<MaxLength> {
        self.max_length
    }

    pub fn slug_text(&self, text: &str, separator: Option<&str>) -> DomainResult<String> {
        let separator = self.separator_or_default(separator)?;
        Ok(self.normalize(text, &separator))
    }

    pub async fn compute_slug(
        &self,
        input: SlugInput<'_>,
        separator: Option<&str>,
    ) -> DomainResult<String> {
        match input {
            SlugInput::Text(text) => self.slug_text(text, separator),
            SlugInput::Record(record) => self.slug_record(record, separator).await,
        }
    }

    pub async fn slug_record(
        &self,
        record: &dyn SluggableRecord,
        separator: Option<&str>,
    ) -> DomainResult<String> {
        let field = self.config.field();
        if !record.is_new() && record.is_dirty(field) {
            tracing::debug!(%field, "keeping manually assigned slug");
            return Ok(record
                .get(field)
                .map(|value| value.to_string())
                .unwrap_or_default());
        }

        let separator = self.separator_or_default(separator)?;
        let source = self.source_text(record, &separator)?;
        let mut slug = self.normalize(&source, &separator);
        if slug.is_empty() {
            slug = self.fallback_slug(&separator)?;
        }

        self.ensure_unique(record, slug, &separator).await
    }

    /// Creation hook: yields a slug to assign, or `None` when the record keeps its own.
    pub async fn before_save(&self, record: &dyn SluggableRecord) -> DomainResult<Option<String>> {
        let field = self.config.field();
        if !record.is_new() || record.is_dirty(field) {
            tracing::debug!(%field, "slug left untouched on save");
            return Ok(None);
        }
        self.slug_record(record, None).await.map(Some)
    }

    fn separator_or_default(&self, separator: Option<&str>) -> DomainResult<Separator> {
        match separator {
            Some(separator) => Separator::new(separator),
            None => Ok(self.config.separator().clone()),
        }
    }

    fn source_text(
        &self,
        record: &dyn SluggableRecord,
        separator: &Separator,
    ) -> DomainResult<String> {
        let mut parts = Vec::with_capacity(self.config.source_fields().len());
        for field in self.config.source_fields() {
            if record.has_error(field) {
                return Err(DomainError::IncompleteSource(format!(
                    "source field `{field}` has validation errors"
                )));
            }
            match record.get(field) {
                Some(value) if !value.is_blank() => parts.push(value.to_string()),
                _ => {
                    return Err(DomainError::IncompleteSource(format!(
                        "source field `{field}` is not set"
                    )));
                }
            }
        }
        Ok(parts.join(separator.as_str()))
    }

    fn normalize(&self, text: &str, separator: &Separator) -> String {
        let replaced = self.config.replacements().apply(text);
        let slug = self.generator.slugify(&replaced, separator);
        match self.max_length {
            Some(max_length) => truncate_base(&slug, max_length.get(), separator),
            None => slug,
        }
    }

    fn fallback_slug(&self, separator: &Separator) -> DomainResult<String> {
        let prefix = self.config.fallback_prefix().ok_or_else(|| {
            DomainError::incomplete_source("source fields normalize to an empty slug")
        })?;
        let slug = self.normalize(
            &format!("{prefix} {}", self.clock.now().timestamp()),
            separator,
        );
        if slug.is_empty() {
            return Err(DomainError::incomplete_source(
                "fallback prefix normalizes to an empty slug",
            ));
        }
        Ok(slug)
    }

    async fn ensure_unique(
        &self,
        record: &dyn SluggableRecord,
        slug: String,
        separator: &Separator,
    ) -> DomainResult<String> {
        let resolver: &dyn UniqueSlugResolver = match self.config.uniqueness() {
            Uniqueness::Disabled => return Ok(slug),
            Uniqueness::Suffix => &self.suffix_resolver,
            Uniqueness::Custom(custom) => custom.as_ref(),
        };

        let exclude = record.identity().map(|identity| Exclusion {
            field: self.config.identity_field().clone(),
            identity,
        });
        let request = ResolveRequest {
            field: self.config.field(),
            candidate: slug,
            scope: self.config.scope(),
            exclude,
            max_length: self.max_length,
            separator,
        };
        let resolved = resolver.resolve(request, self.repo.as_ref()).await?;

        if let Some(max_length) = self.max_length {
            let length = resolved.chars().count();
            if length > max_length.get() {
                return Err(DomainError::Configuration(format!(
                    "resolver returned `{resolved}` ({length} chars), over max length {}",
                    max_length.get()
                )));
            }
        }
        Ok(resolved)
    }
}
