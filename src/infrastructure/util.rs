use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Separator;
use slug::slugify;

/// Transliterating generator backed by the `slug` crate (`Héllo` -> `hello`).
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str, separator: &Separator) -> String {
        let slug = slugify(input);
        match separator.as_str() {
            "-" => slug,
            other => slug.replace('-', other),
        }
    }
}

/// Naive generator: keeps ASCII letters and digits, drops other letters, and
/// treats everything else as a word boundary.
#[derive(Default, Clone)]
pub struct AsciiSlugGenerator;

impl SlugGenerator for AsciiSlugGenerator {
    fn slugify(&self, input: &str, separator: &Separator) -> String {
        let mut out = String::with_capacity(input.len());
        let mut pending_separator = false;

        for c in input.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_separator && !out.is_empty() {
                    out.push_str(separator.as_str());
                }
                pending_separator = false;
                out.push(c.to_ascii_lowercase());
            } else if !c.is_alphanumeric() {
                pending_separator = true;
            }
        }
        out
    }
}

/// Registry of the generators selectable by name from configuration.
pub fn generator_from_name(name: &str) -> DomainResult<Arc<dyn SlugGenerator>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "" | "default" => Ok(Arc::new(DefaultSlugGenerator)),
        "ascii" => Ok(Arc::new(AsciiSlugGenerator)),
        other => Err(DomainError::Configuration(format!(
            "unknown slug generator `{other}`"
        ))),
    }
}
