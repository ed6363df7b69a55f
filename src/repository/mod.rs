//! Repository layer for database operations
//!
//! `CatalogStore` is implemented by [`mongo::MongoStore`] for durable
//! storage and [`memory::MemoryStore`] for process-lifetime data.

pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{DatabaseConfig, StoreBackend},
    error::AppResult,
    models::{Author, Book, Publication},
};

/// Data access over the books, authors and publications collections.
///
/// Update operations return the document as it is after the update, or
/// `None` when no document matched.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Check that the backend is reachable
    async fn ping(&self) -> AppResult<()>;

    async fn books_list(&self) -> AppResult<Vec<Book>>;
    async fn books_find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;
    /// First book whose category list contains `category`
    async fn books_find_by_category(&self, category: &str) -> AppResult<Option<Book>>;
    async fn books_find_by_language(&self, language: &str) -> AppResult<Vec<Book>>;
    /// Books listing any of the given author ids
    async fn books_find_by_authors(&self, author_ids: &[i32]) -> AppResult<Vec<Book>>;
    /// Books published by any of the given publication ids
    async fn books_find_by_publications(&self, publication_ids: &[i32]) -> AppResult<Vec<Book>>;
    async fn books_create(&self, book: &Book) -> AppResult<Book>;
    async fn books_set_title(&self, isbn: &str, title: &str) -> AppResult<Option<Book>>;
    /// Set-style addition of an author id
    async fn books_add_author(&self, isbn: &str, author_id: i32) -> AppResult<Option<Book>>;
    async fn books_remove_author(&self, isbn: &str, author_id: i32) -> AppResult<Option<Book>>;
    async fn books_set_publication(&self, isbn: &str, publication_id: i32) -> AppResult<Option<Book>>;
    /// Add `author_id` to every listed book; returns the number of books matched
    async fn books_link_author(&self, isbns: &[String], author_id: i32) -> AppResult<u64>;
    /// Point every listed book at `publication_id`; returns the number of books matched
    async fn books_link_publication(&self, isbns: &[String], publication_id: i32) -> AppResult<u64>;
    async fn books_delete(&self, isbn: &str) -> AppResult<Option<Book>>;

    async fn authors_list(&self) -> AppResult<Vec<Author>>;
    async fn authors_find_by_id(&self, id: i32) -> AppResult<Option<Author>>;
    async fn authors_find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Author>>;
    async fn authors_create(&self, author: &Author) -> AppResult<Author>;

    async fn publications_list(&self) -> AppResult<Vec<Publication>>;
    async fn publications_find_by_id(&self, id: i32) -> AppResult<Option<Publication>>;
    async fn publications_create(&self, publication: &Publication) -> AppResult<Publication>;
}

/// Main repository struct holding the configured store
#[derive(Clone)]
pub struct Repository {
    pub store: Arc<dyn CatalogStore>,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Repository backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(memory::MemoryStore::new()))
    }

    /// Build the store selected by configuration
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            StoreBackend::Mongodb => {
                let store = mongo::MongoStore::connect(&config.url, &config.name).await?;
                store.ensure_indexes().await?;
                tracing::info!("Connected to MongoDB database {}", config.name);
                Ok(Self::new(Arc::new(store)))
            }
            StoreBackend::Memory => {
                tracing::info!("Using in-memory store, data will not survive a restart");
                Ok(Self::in_memory())
            }
        }
    }
}
