// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid scope: {0}")]
    InvalidScope(String),
    #[error("incomplete source: {0}")]
    IncompleteSource(String),
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(String),
    #[error("no unique slug found for `{base}` after {attempts} attempts")]
    AttemptsExhausted { base: String, attempts: u64 },
    #[error("max length {max_length} leaves no room for suffix `{suffix}`")]
    LengthExhausted { max_length: usize, suffix: String },
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn incomplete_source(msg: impl Into<String>) -> Self {
        Self::IncompleteSource(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::PersistenceUnavailable(msg.into())
    }
}
