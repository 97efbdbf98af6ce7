//! Services composing the cache, matcher and API collaborators

mod catalog_service;
mod tag_service;

pub use catalog_service::{CatalogService, ResourceQuery};
pub use tag_service::TagSuggestionService;
