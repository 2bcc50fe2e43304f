//! Unique, length-bounded URL slugs derived from record fields.
//!
//! [`application::services::SlugService`] is the entry point: it joins a
//! record's source fields, applies the configured replacements, normalizes the
//! text through a [`application::ports::util::SlugGenerator`] and, when
//! uniqueness is enabled, checks a
//! [`domain::slug::SlugExistenceRepository`] with numeric suffixes until the
//! slug is free.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
