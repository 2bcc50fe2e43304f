// tests/support/builders.rs
use std::sync::Arc;

use mokkan_slug::application::SlugService;
use mokkan_slug::application::ports::util::SlugGenerator;
use mokkan_slug::domain::slug::{
    FieldName, RecordSnapshot, SlugConfig, SlugConfigBuilder, SlugExistenceRepository,
};
use mokkan_slug::infrastructure::util::DefaultSlugGenerator;

use super::mocks::FixedClock;

pub fn field(name: &str) -> FieldName {
    FieldName::new(name).unwrap()
}

pub fn title_config() -> SlugConfigBuilder {
    SlugConfig::builder().source_field("title")
}

pub fn service_with(
    config: SlugConfigBuilder,
    repo: Arc<dyn SlugExistenceRepository>,
) -> SlugService {
    service_with_generator(config, repo, Arc::new(DefaultSlugGenerator))
}

pub fn service_with_generator(
    config: SlugConfigBuilder,
    repo: Arc<dyn SlugExistenceRepository>,
    generator: Arc<dyn SlugGenerator>,
) -> SlugService {
    SlugService::new(
        Arc::new(config.build().unwrap()),
        generator,
        repo,
        Arc::new(FixedClock),
    )
}

pub fn new_titled(title: &str) -> RecordSnapshot {
    RecordSnapshot::new_record().with_field(field("title"), title)
}
