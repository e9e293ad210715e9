//! Core domain logic for the magazine catalog.
//! Authors, magazines and the articles joining them, with the validation
//! rules and derived queries over an owned catalog.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::{validate_title, ValidationError};
pub use repo::catalog_repo::{CatalogRepository, InMemoryCatalog, RepoError, RepoResult};
pub use service::catalog_service::{CatalogService, CONTRIBUTING_AUTHOR_THRESHOLD};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
