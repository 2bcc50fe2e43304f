// src/application/ports/util.rs
use crate::domain::slug::Separator;

/// Turns arbitrary text into a URL-safe token.
///
/// Implementations must only emit `[a-z0-9]` and `separator`, collapse runs of
/// anything else into a single separator, never start or end with the separator
/// and be idempotent.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str, separator: &Separator) -> String;
}
