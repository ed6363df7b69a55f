//! In-memory catalog store
//!
//! Data lives for the lifetime of the process. Semantics mirror the
//! MongoDB store: natural keys are unique, author ids are added set-style
//! and updates return the post-update document.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CatalogStore;
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, Publication},
};

#[derive(Debug, Default)]
struct Collections {
    books: Vec<Book>,
    authors: Vec<Author>,
    publications: Vec<Publication>,
}

/// Process-lifetime store; clones share the same data
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `f` to the book with `isbn` and return its new state
    async fn update_book<F>(&self, isbn: &str, f: F) -> AppResult<Option<Book>>
    where
        F: FnOnce(&mut Book) + Send,
    {
        let mut data = self.data.write().await;
        Ok(data.books.iter_mut().find(|b| b.isbn == isbn).map(|book| {
            f(book);
            book.clone()
        }))
    }

    async fn filter_books<P>(&self, predicate: P) -> Vec<Book>
    where
        P: Fn(&Book) -> bool + Send,
    {
        let data = self.data.read().await;
        data.books.iter().filter(|b| predicate(b)).cloned().collect()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn books_list(&self) -> AppResult<Vec<Book>> {
        Ok(self.data.read().await.books.clone())
    }

    async fn books_find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let data = self.data.read().await;
        Ok(data.books.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn books_find_by_category(&self, category: &str) -> AppResult<Option<Book>> {
        let data = self.data.read().await;
        Ok(data
            .books
            .iter()
            .find(|b| b.category.iter().any(|c| c == category))
            .cloned())
    }

    async fn books_find_by_language(&self, language: &str) -> AppResult<Vec<Book>> {
        Ok(self.filter_books(|b| b.language == language).await)
    }

    async fn books_find_by_authors(&self, author_ids: &[i32]) -> AppResult<Vec<Book>> {
        Ok(self
            .filter_books(|b| b.authors.iter().any(|id| author_ids.contains(id)))
            .await)
    }

    async fn books_find_by_publications(&self, publication_ids: &[i32]) -> AppResult<Vec<Book>> {
        Ok(self
            .filter_books(|b| b.publication.is_some_and(|id| publication_ids.contains(&id)))
            .await)
    }

    async fn books_create(&self, book: &Book) -> AppResult<Book> {
        let mut data = self.data.write().await;
        if data.books.iter().any(|b| b.isbn == book.isbn) {
            return Err(AppError::Conflict(format!("Book {} already exists", book.isbn)));
        }
        data.books.push(book.clone());
        Ok(book.clone())
    }

    async fn books_set_title(&self, isbn: &str, title: &str) -> AppResult<Option<Book>> {
        self.update_book(isbn, |book| book.title = title.to_string())
            .await
    }

    async fn books_add_author(&self, isbn: &str, author_id: i32) -> AppResult<Option<Book>> {
        self.update_book(isbn, |book| {
            if !book.authors.contains(&author_id) {
                book.authors.push(author_id);
            }
        })
        .await
    }

    async fn books_remove_author(&self, isbn: &str, author_id: i32) -> AppResult<Option<Book>> {
        self.update_book(isbn, |book| book.authors.retain(|id| *id != author_id))
            .await
    }

    async fn books_set_publication(&self, isbn: &str, publication_id: i32) -> AppResult<Option<Book>> {
        self.update_book(isbn, |book| book.publication = Some(publication_id))
            .await
    }

    async fn books_link_author(&self, isbns: &[String], author_id: i32) -> AppResult<u64> {
        let mut data = self.data.write().await;
        let mut matched = 0;
        for book in data.books.iter_mut().filter(|b| isbns.contains(&b.isbn)) {
            if !book.authors.contains(&author_id) {
                book.authors.push(author_id);
            }
            matched += 1;
        }
        Ok(matched)
    }

    async fn books_link_publication(&self, isbns: &[String], publication_id: i32) -> AppResult<u64> {
        let mut data = self.data.write().await;
        let mut matched = 0;
        for book in data.books.iter_mut().filter(|b| isbns.contains(&b.isbn)) {
            book.publication = Some(publication_id);
            matched += 1;
        }
        Ok(matched)
    }

    async fn books_delete(&self, isbn: &str) -> AppResult<Option<Book>> {
        let mut data = self.data.write().await;
        Ok(data
            .books
            .iter()
            .position(|b| b.isbn == isbn)
            .map(|idx| data.books.remove(idx)))
    }

    async fn authors_list(&self) -> AppResult<Vec<Author>> {
        Ok(self.data.read().await.authors.clone())
    }

    async fn authors_find_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let data = self.data.read().await;
        Ok(data.authors.iter().find(|a| a.id == id).cloned())
    }

    async fn authors_find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Author>> {
        let data = self.data.read().await;
        Ok(data
            .authors
            .iter()
            .filter(|a| ids.contains(&a.id))
            .cloned()
            .collect())
    }

    async fn authors_create(&self, author: &Author) -> AppResult<Author> {
        let mut data = self.data.write().await;
        if data.authors.iter().any(|a| a.id == author.id) {
            return Err(AppError::Conflict(format!("Author {} already exists", author.id)));
        }
        data.authors.push(author.clone());
        Ok(author.clone())
    }

    async fn publications_list(&self) -> AppResult<Vec<Publication>> {
        Ok(self.data.read().await.publications.clone())
    }

    async fn publications_find_by_id(&self, id: i32) -> AppResult<Option<Publication>> {
        let data = self.data.read().await;
        Ok(data.publications.iter().find(|p| p.id == id).cloned())
    }

    async fn publications_create(&self, publication: &Publication) -> AppResult<Publication> {
        let mut data = self.data.write().await;
        if data.publications.iter().any(|p| p.id == publication.id) {
            return Err(AppError::Conflict(format!(
                "Publication {} already exists",
                publication.id
            )));
        }
        data.publications.push(publication.clone());
        Ok(publication.clone())
    }
}
