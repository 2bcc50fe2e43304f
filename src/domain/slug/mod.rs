pub mod conditions;
pub mod config;
pub mod record;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use conditions::{Condition, Exclusion, ExistenceQuery, Operator, Scope};
pub use config::{SlugConfig, SlugConfigBuilder, Uniqueness};
pub use record::{RecordSnapshot, SluggableRecord, ValidationErrors};
pub use repository::SlugExistenceRepository;
pub use services::{ResolveRequest, SuffixResolver, UniqueSlugResolver};
pub use value_objects::{FieldName, FieldValue, MaxLength, Replacements, Separator};
