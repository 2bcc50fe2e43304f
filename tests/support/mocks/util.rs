// tests/support/mocks/util.rs
use async_trait::async_trait;
use mokkan_slug::application::ports::util::SlugGenerator;
use mokkan_slug::domain::errors::DomainResult;
use mokkan_slug::domain::slug::{
    ExistenceQuery, ResolveRequest, Separator, SlugExistenceRepository, UniqueSlugResolver,
};

/// Lowercases and leaves everything else alone; makes replacement effects visible.
#[derive(Clone)]
pub struct EchoSlug;

impl SlugGenerator for EchoSlug {
    fn slugify(&self, s: &str, _separator: &Separator) -> String {
        s.to_lowercase()
    }
}

/// Custom strategy: appends a fixed token once when the candidate is taken.
pub struct FixedSuffixResolver(pub &'static str);

#[async_trait]
impl UniqueSlugResolver for FixedSuffixResolver {
    async fn resolve(
        &self,
        request: ResolveRequest<'_>,
        repo: &dyn SlugExistenceRepository,
    ) -> DomainResult<String> {
        let query = ExistenceQuery::new(
            request.field.clone(),
            request.candidate.clone(),
            request.scope.clone(),
            request.exclude.clone(),
        );
        if repo.exists(&query).await? {
            Ok(format!("{}{}{}", request.candidate, request.separator, self.0))
        } else {
            Ok(request.candidate)
        }
    }
}
