use std::fmt;
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::conditions::Scope;
use crate::domain::slug::services::{UniqueSlugResolver, ensure_scope_excludes_field};
use crate::domain::slug::value_objects::{FieldName, FieldValue, MaxLength, Replacements, Separator};

/// How (and whether) a computed slug is made unique.
#[derive(Clone, Default)]
pub enum Uniqueness {
    Disabled,
    #[default]
    Suffix,
    Custom(Arc<dyn UniqueSlugResolver>),
}

impl fmt::Debug for Uniqueness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Suffix => f.write_str("Suffix"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlugConfig {
    field: FieldName,
    source_fields: Vec<FieldName>,
    separator: Separator,
    replacements: Replacements,
    max_length: Option<MaxLength>,
    scope: Scope,
    uniqueness: Uniqueness,
    identity_field: FieldName,
    max_attempts: Option<u64>,
    fallback_prefix: Option<String>,
}

impl SlugConfig {
    pub fn builder() -> SlugConfigBuilder {
        SlugConfigBuilder::default()
    }

    pub fn field(&self) -> &FieldName {
        &self.field
    }

    pub fn source_fields(&self) -> &[FieldName] {
        &self.source_fields
    }

    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    pub fn replacements(&self) -> &Replacements {
        &self.replacements
    }

    pub fn max_length(&self) -> Option<MaxLength> {
        self.max_length
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn uniqueness(&self) -> &Uniqueness {
        &self.uniqueness
    }

    pub fn identity_field(&self) -> &FieldName {
        &self.identity_field
    }

    pub fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }

    pub fn fallback_prefix(&self) -> Option<&str> {
        self.fallback_prefix.as_deref()
    }
}

#[derive(Default)]
pub struct SlugConfigBuilder {
    field: Option<String>,
    source_fields: Vec<String>,
    separator: Option<String>,
    replacements: Option<Vec<(String, String)>>,
    max_length: Option<usize>,
    scope: Vec<(String, FieldValue)>,
    uniqueness: Uniqueness,
    identity_field: Option<String>,
    max_attempts: Option<u64>,
    fallback_prefix: Option<String>,
}

impl SlugConfigBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn source_field(mut self, field: impl Into<String>) -> Self {
        self.source_fields.push(field.into());
        self
    }

    pub fn source_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Replaces the default symbol table entirely.
    pub fn replacements<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.replacements = Some(
            entries
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        );
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn scope(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.scope.push((field.into(), value.into()));
        self
    }

    pub fn uniqueness(mut self, uniqueness: Uniqueness) -> Self {
        self.uniqueness = uniqueness;
        self
    }

    pub fn unique(self, unique: bool) -> Self {
        self.uniqueness(if unique {
            Uniqueness::Suffix
        } else {
            Uniqueness::Disabled
        })
    }

    pub fn custom_resolver(self, resolver: Arc<dyn UniqueSlugResolver>) -> Self {
        self.uniqueness(Uniqueness::Custom(resolver))
    }

    pub fn identity_field(mut self, field: impl Into<String>) -> Self {
        self.identity_field = Some(field.into());
        self
    }

    pub fn max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn fallback_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fallback_prefix = Some(prefix.into());
        self
    }

    pub fn build(self) -> DomainResult<SlugConfig> {
        let field = FieldName::new(self.field.unwrap_or_else(|| "slug".into()))?;

        if self.source_fields.is_empty() {
            return Err(DomainError::configuration(
                "at least one source field is required",
            ));
        }
        let source_fields = self
            .source_fields
            .into_iter()
            .map(FieldName::new)
            .collect::<DomainResult<Vec<_>>>()?;
        if source_fields.contains(&field) {
            return Err(DomainError::Configuration(format!(
                "slug field `{field}` cannot also be a source field"
            )));
        }

        let separator = match self.separator {
            Some(separator) => Separator::new(separator)?,
            None => Separator::default(),
        };
        let replacements = match self.replacements {
            Some(entries) => Replacements::new(entries)?,
            None => Replacements::default(),
        };
        let max_length = self.max_length.map(MaxLength::new).transpose()?;

        let mut scope = Scope::new();
        for (name, value) in self.scope {
            scope.insert(FieldName::new(name)?, value);
        }
        ensure_scope_excludes_field(&scope, &field)?;

        if self.max_attempts == Some(0) {
            return Err(DomainError::configuration(
                "max attempts must be positive when set",
            ));
        }

        let fallback_prefix = self
            .fallback_prefix
            .map(|prefix| prefix.trim().to_string())
            .filter(|prefix| !prefix.is_empty());

        Ok(SlugConfig {
            field,
            source_fields,
            separator,
            replacements,
            max_length,
            scope,
            uniqueness: self.uniqueness,
            identity_field: FieldName::new(self.identity_field.unwrap_or_else(|| "id".into()))?,
            max_attempts: self.max_attempts,
            fallback_prefix,
        })
    }
}
