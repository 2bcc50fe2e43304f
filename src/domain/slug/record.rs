use crate::domain::slug::value_objects::{FieldName, FieldValue};
use std::collections::{BTreeMap, BTreeSet};

/// What the slug service needs to know about a record it derives a slug for.
pub trait SluggableRecord: Send + Sync {
    fn get(&self, field: &FieldName) -> Option<FieldValue>;
    fn has_error(&self, field: &FieldName) -> bool;
    fn is_new(&self) -> bool;
    /// Whether the caller explicitly assigned `field` since the record was loaded.
    fn is_dirty(&self, field: &FieldName) -> bool;
    fn identity(&self) -> Option<FieldValue>;
}

/// Validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn has_error(&self, field: &FieldName) -> bool {
        self.0.get(field).is_some_and(|messages| !messages.is_empty())
    }

    pub fn messages(&self, field: &FieldName) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Plain field-map record, for callers that do not have their own entity type.
#[derive(Debug, Clone, Default)]
pub struct RecordSnapshot {
    fields: BTreeMap<FieldName, FieldValue>,
    errors: ValidationErrors,
    dirty: BTreeSet<FieldName>,
    identity: Option<FieldValue>,
}

impl RecordSnapshot {
    pub fn new_record() -> Self {
        Self::default()
    }

    pub fn persisted(identity: impl Into<FieldValue>) -> Self {
        Self {
            identity: Some(identity.into()),
            ..Self::default()
        }
    }

    /// Loads a field value without marking it dirty.
    pub fn with_field(mut self, field: FieldName, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    pub fn with_error(mut self, field: FieldName, message: impl Into<String>) -> Self {
        self.errors.add(field, message);
        self
    }

    /// Assigns a field the way a caller edit would, marking it dirty.
    pub fn set(&mut self, field: FieldName, value: impl Into<FieldValue>) {
        self.dirty.insert(field.clone());
        self.fields.insert(field, value.into());
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn fields(&self) -> &BTreeMap<FieldName, FieldValue> {
        &self.fields
    }

    pub fn mark_clean(&mut self) {
        self.dirty.clear();
    }
}

impl SluggableRecord for RecordSnapshot {
    fn get(&self, field: &FieldName) -> Option<FieldValue> {
        self.fields.get(field).cloned()
    }

    fn has_error(&self, field: &FieldName) -> bool {
        self.errors.has_error(field)
    }

    fn is_new(&self) -> bool {
        self.identity.is_none()
    }

    fn is_dirty(&self, field: &FieldName) -> bool {
        self.dirty.contains(field)
    }

    fn identity(&self) -> Option<FieldValue> {
        self.identity.clone()
    }
}
