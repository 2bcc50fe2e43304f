use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

const SEPARATOR_CHARS: &[char] = &['-', '_', '.', '~'];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::configuration("field name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FieldName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldName> for String {
    fn from(value: FieldName) -> Self {
        value.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scalar field value as seen by the slug machinery and the existence checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl FieldValue {
    /// Unset-like values: blank text never produces a usable slug source.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(value) if value.trim().is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator(String);

impl Separator {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::configuration("separator cannot be empty"));
        }
        if !value.chars().all(|c| SEPARATOR_CHARS.contains(&c)) {
            return Err(DomainError::Configuration(format!(
                "separator `{value}` must only contain URL-safe punctuation (- _ . ~)"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self("-".into())
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLength(usize);

impl MaxLength {
    pub fn new(value: usize) -> DomainResult<Self> {
        if value == 0 {
            Err(DomainError::configuration("max length must be positive"))
        } else {
            Ok(Self(value))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<MaxLength> for usize {
    fn from(value: MaxLength) -> Self {
        value.0
    }
}

/// Ordered literal substitutions applied to raw text before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacements(Vec<(String, String)>);

impl Replacements {
    pub fn new<I, K, V>(entries: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(from, to)| (from.into(), to.into()))
            .collect::<Vec<_>>();
        if entries.iter().any(|(from, _)| from.is_empty()) {
            return Err(DomainError::configuration(
                "replacement keys cannot be empty",
            ));
        }
        Ok(Self(entries))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }

    /// Single left-to-right pass; at each position the first matching entry wins
    /// and scanning resumes after the matched literal.
    pub fn apply(&self, input: &str) -> String {
        if self.0.is_empty() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        'scan: while let Some(c) = rest.chars().next() {
            for (from, to) in &self.0 {
                if let Some(tail) = rest.strip_prefix(from.as_str()) {
                    out.push_str(to);
                    rest = tail;
                    continue 'scan;
                }
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
        out
    }
}

impl Default for Replacements {
    fn default() -> Self {
        Self(
            [("#", "hash"), ("?", "question"), ("+", "and"), ("&", "and")]
                .into_iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }
}

/// Cut `value` down to at most `max_chars` characters and drop any separator
/// characters left dangling at the end.
pub fn truncate_base(value: &str, max_chars: usize, separator: &Separator) -> String {
    let cut = value
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| &value[..idx])
        .unwrap_or(value);
    if cut.len() == value.len() {
        return cut.to_string();
    }
    cut.trim_end_matches(|c: char| separator.as_str().contains(c))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_replacement_wins() {
        let replacements = Replacements::new([("&", "and"), ("&amp;", "ampamp")]).unwrap();
        assert_eq!(replacements.apply("A & B"), "A and B");
        assert_eq!(replacements.apply("A &amp; B"), "A andamp; B");
    }

    #[test]
    fn replacements_do_not_rescan_output() {
        let replacements = Replacements::new([("a", "aa"), ("aa", "b")]).unwrap();
        assert_eq!(replacements.apply("a"), "aa");
    }

    #[test]
    fn default_replacements_cover_symbols() {
        let replacements = Replacements::default();
        assert_eq!(replacements.apply("C# & C++?"), "Chash and Candandquestion");
    }

    #[test]
    fn empty_replacement_key_is_rejected() {
        assert!(matches!(
            Replacements::new([("", "x")]),
            Err(DomainError::Configuration(_))
        ));
    }

    #[test]
    fn separator_must_be_url_safe() {
        assert!(Separator::new("_").is_ok());
        assert!(Separator::new("").is_err());
        assert!(Separator::new("/").is_err());
        assert!(Separator::new("a").is_err());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let sep = Separator::default();
        assert_eq!(truncate_base("héllo-wörld", 7, &sep), "héllo-w");
        assert_eq!(truncate_base("hello-world", 6, &sep), "hello");
        assert_eq!(truncate_base("hello", 10, &sep), "hello");
    }

    #[test]
    fn untagged_field_values_deserialize() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"[3, "x", true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Integer(3),
                FieldValue::Text("x".into()),
                FieldValue::Bool(true)
            ]
        );
    }
}
