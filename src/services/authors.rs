//! Authors service
//!
//! Author book lists are not stored; they are derived from the books
//! that list the author.

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorWithBooks, Book, CreateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<AuthorWithBooks>> {
        let authors = self.repository.store.authors_list().await?;
        self.with_books(authors).await
    }

    /// Author by id with derived book list, `None` if no such author
    pub async fn get(&self, id: i32) -> AppResult<Option<AuthorWithBooks>> {
        match self.repository.store.authors_find_by_id(id).await? {
            Some(author) => Ok(self.with_books(vec![author]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Authors listed by the book with `isbn`
    pub async fn for_book(&self, isbn: &str) -> AppResult<Vec<AuthorWithBooks>> {
        let not_found = || AppError::NotFound(format!("No author found for the book of {}", isbn));

        let book = self
            .repository
            .store
            .books_find_by_isbn(isbn)
            .await?
            .ok_or_else(not_found)?;

        let authors = self.repository.store.authors_find_by_ids(&book.authors).await?;
        if authors.is_empty() {
            return Err(not_found());
        }
        self.with_books(authors).await
    }

    /// Create an author and attach it to the books it lists
    pub async fn create(&self, data: CreateAuthor) -> AppResult<AuthorWithBooks> {
        let author = self
            .repository
            .store
            .authors_create(&Author {
                id: data.id,
                name: data.name,
            })
            .await?;

        if !data.books.is_empty() {
            let linked = self
                .repository
                .store
                .books_link_author(&data.books, author.id)
                .await?;
            if linked < data.books.len() as u64 {
                tracing::warn!(
                    "Author {}: {} of {} listed books do not exist",
                    author.id,
                    data.books.len() as u64 - linked,
                    data.books.len()
                );
            }
        }

        tracing::info!("Created author id={}", author.id);
        self.with_books(vec![author])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal("Created author vanished".to_string()))
    }

    async fn with_books(&self, authors: Vec<Author>) -> AppResult<Vec<AuthorWithBooks>> {
        if authors.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i32> = authors.iter().map(|a| a.id).collect();
        let books = self.repository.store.books_find_by_authors(&ids).await?;

        Ok(authors
            .into_iter()
            .map(|author| {
                let isbns = isbns_where(&books, |b| b.authors.contains(&author.id));
                AuthorWithBooks::new(author, isbns)
            })
            .collect())
    }
}

pub(crate) fn isbns_where(books: &[Book], predicate: impl Fn(&Book) -> bool) -> Vec<String> {
    books
        .iter()
        .filter(|b| predicate(b))
        .map(|b| b.isbn.clone())
        .collect()
}
