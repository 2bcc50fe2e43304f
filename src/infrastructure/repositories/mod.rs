// src/infrastructure/repositories/mod.rs
pub mod error;
mod memory;
mod sqlite_slug;

pub use memory::{InMemorySlugRepository, Row};
pub use sqlite_slug::SqliteSlugRepository;
