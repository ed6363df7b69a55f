//! Business logic services

pub mod authors;
pub mod catalog;
pub mod publications;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub authors: authors::AuthorsService,
    pub publications: publications::PublicationsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            publications: publications::PublicationsService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the underlying store answers
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        self.repository.store.ping().await
    }
}
