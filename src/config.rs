// src/config.rs
use std::{collections::BTreeMap, env};
use thiserror::Error;

use crate::domain::{
    errors::DomainResult,
    slug::{FieldName, FieldValue, RecordSnapshot, SlugConfig},
};

#[derive(Clone, Debug)]
pub struct SlugSettings {
    field: String,
    source_fields: Vec<String>,
    separator: String,
    max_length: Option<usize>,
    max_attempts: Option<u64>,
    replacements: Option<Vec<(String, String)>>,
    scope: BTreeMap<String, FieldValue>,
    unique: bool,
    identity_field: String,
    fallback_prefix: Option<String>,
    generator: String,
    table: String,
    database_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_field() -> String {
    "slug".into()
}

fn default_source_fields() -> Vec<String> {
    vec!["title".into()]
}

fn default_separator() -> String {
    "-".into()
}

fn default_table() -> String {
    "articles".into()
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer")))
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl SlugSettings {
    /// Build settings from environment variables, reading a `.env` file first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let field = value("SLUG_FIELD").unwrap_or_else(default_field);
        let source_fields = value("SLUG_SOURCE_FIELDS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(default_source_fields);
        if source_fields.is_empty() {
            return Err(ConfigError::Missing("SLUG_SOURCE_FIELDS"));
        }

        let separator = lookup("SLUG_SEPARATOR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_separator);

        let max_length = value("SLUG_MAX_LENGTH")
            .map(|raw| parse_number::<usize>("SLUG_MAX_LENGTH", raw))
            .transpose()?;
        let max_attempts = value("SLUG_MAX_ATTEMPTS")
            .map(|raw| parse_number::<u64>("SLUG_MAX_ATTEMPTS", raw))
            .transpose()?;

        let replacements = value("SLUG_REPLACEMENTS")
            .map(|raw| {
                serde_json::from_str::<Vec<(String, String)>>(&raw).map_err(|err| {
                    ConfigError::Invalid(format!(
                        "SLUG_REPLACEMENTS must be a JSON list of [from, to] pairs: {err}"
                    ))
                })
            })
            .transpose()?;

        let scope = value("SLUG_SCOPE")
            .map(|raw| {
                serde_json::from_str::<BTreeMap<String, FieldValue>>(&raw).map_err(|err| {
                    ConfigError::Invalid(format!("SLUG_SCOPE must be a JSON object: {err}"))
                })
            })
            .transpose()?
            .unwrap_or_default();

        let unique = value("SLUG_UNIQUE")
            .map(|v| parse_bool(&v))
            .unwrap_or(true);

        Ok(Self {
            field,
            source_fields,
            separator,
            max_length,
            max_attempts,
            replacements,
            scope,
            unique,
            identity_field: value("SLUG_IDENTITY_FIELD").unwrap_or_else(|| "id".into()),
            fallback_prefix: value("SLUG_FALLBACK_PREFIX"),
            generator: value("SLUG_GENERATOR").unwrap_or_else(|| "default".into()),
            table: value("SLUG_TABLE").unwrap_or_else(default_table),
            database_url: value("DATABASE_URL"),
        })
    }

    pub fn to_config(&self) -> DomainResult<SlugConfig> {
        let mut builder = SlugConfig::builder()
            .field(self.field.clone())
            .source_fields(self.source_fields.iter().cloned())
            .separator(self.separator.clone())
            .unique(self.unique)
            .identity_field(self.identity_field.clone());

        if let Some(entries) = &self.replacements {
            builder = builder.replacements(entries.iter().cloned());
        }
        if let Some(max_length) = self.max_length {
            builder = builder.max_length(max_length);
        }
        if let Some(max_attempts) = self.max_attempts {
            builder = builder.max_attempts(max_attempts);
        }
        if let Some(prefix) = &self.fallback_prefix {
            builder = builder.fallback_prefix(prefix.clone());
        }
        for (field, value) in &self.scope {
            builder = builder.scope(field.clone(), value.clone());
        }

        builder.build()
    }

    /// Pairs positional values with the source fields, one value per field.
    pub fn source_record(&self, values: Vec<String>) -> Result<RecordSnapshot, ConfigError> {
        if values.len() != self.source_fields.len() {
            return Err(ConfigError::Invalid(format!(
                "expected {} value(s) for source fields [{}], got {}",
                self.source_fields.len(),
                self.source_fields.join(", "),
                values.len()
            )));
        }

        let mut record = RecordSnapshot::new_record();
        for (field, value) in self.source_fields.iter().zip(values) {
            let field =
                FieldName::new(field.as_str()).map_err(|err| ConfigError::Invalid(err.to_string()))?;
            record = record.with_field(field, value);
        }
        Ok(record)
    }

    pub fn source_fields(&self) -> &[String] {
        &self.source_fields
    }

    pub fn generator(&self) -> &str {
        &self.generator
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
}
