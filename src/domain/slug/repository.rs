use crate::domain::errors::DomainResult;
use crate::domain::slug::conditions::ExistenceQuery;
use crate::domain::slug::value_objects::FieldName;
use async_trait::async_trait;

#[async_trait]
pub trait SlugExistenceRepository: Send + Sync {
    async fn exists(&self, query: &ExistenceQuery) -> DomainResult<bool>;

    /// Column width of `field` in the backing store, used when no max length is configured.
    fn column_length(&self, _field: &FieldName) -> Option<usize> {
        None
    }
}
