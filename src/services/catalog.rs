//! Catalog (books) service

use crate::{
    error::{AppError, AppResult},
    models::{AuthorWithBooks, Book, CreateBook, PublicationWithBooks},
    repository::Repository,
};

use super::{authors::AuthorsService, publications::PublicationsService};

fn no_book_for_isbn(isbn: &str) -> AppError {
    AppError::NotFound(format!("No book found for the ISBN of {}", isbn))
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    authors: AuthorsService,
    publications: PublicationsService,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: AuthorsService::new(repository.clone()),
            publications: PublicationsService::new(repository.clone()),
            repository,
        }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.store.books_list().await
    }

    pub async fn get_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository
            .store
            .books_find_by_isbn(isbn)
            .await?
            .ok_or_else(|| no_book_for_isbn(isbn))
    }

    pub async fn get_book_by_category(&self, category: &str) -> AppResult<Book> {
        self.repository
            .store
            .books_find_by_category(category)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No book found for the category of {}", category)))
    }

    pub async fn books_by_language(&self, language: &str) -> AppResult<Vec<Book>> {
        let books = self.repository.store.books_find_by_language(language).await?;
        if books.is_empty() {
            return Err(AppError::NotFound(format!(
                "No note book found for the language {}",
                language
            )));
        }
        Ok(books)
    }

    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        let book = self.repository.store.books_create(&Book::from(data)).await?;
        tracing::info!("Created book ISBN={}", book.isbn);
        Ok(book)
    }

    pub async fn update_title(&self, isbn: &str, title: &str) -> AppResult<Book> {
        self.repository
            .store
            .books_set_title(isbn, title)
            .await?
            .ok_or_else(|| no_book_for_isbn(isbn))
    }

    /// Add an author to a book. The author's derived book list is returned
    /// alongside; it is `None` when no author has that id.
    pub async fn add_author(&self, isbn: &str, author_id: i32) -> AppResult<(Book, Option<AuthorWithBooks>)> {
        let book = self
            .repository
            .store
            .books_add_author(isbn, author_id)
            .await?
            .ok_or_else(|| no_book_for_isbn(isbn))?;

        let author = self.authors.get(author_id).await?;
        if author.is_none() {
            tracing::warn!("Book {} now lists unknown author {}", isbn, author_id);
        }
        Ok((book, author))
    }

    pub async fn remove_author(&self, isbn: &str, author_id: i32) -> AppResult<(Book, Option<AuthorWithBooks>)> {
        let book = self
            .repository
            .store
            .books_remove_author(isbn, author_id)
            .await?
            .ok_or_else(|| no_book_for_isbn(isbn))?;

        let author = self.authors.get(author_id).await?;
        Ok((book, author))
    }

    pub async fn set_publication(
        &self,
        isbn: &str,
        publication_id: i32,
    ) -> AppResult<(Book, Option<PublicationWithBooks>)> {
        let book = self
            .repository
            .store
            .books_set_publication(isbn, publication_id)
            .await?
            .ok_or_else(|| no_book_for_isbn(isbn))?;

        let publication = self.publications.find(publication_id).await?;
        if publication.is_none() {
            tracing::warn!("Book {} now points at unknown publication {}", isbn, publication_id);
        }
        Ok((book, publication))
    }

    pub async fn delete_book(&self, isbn: &str) -> AppResult<Book> {
        let book = self
            .repository
            .store
            .books_delete(isbn)
            .await?
            .ok_or_else(|| no_book_for_isbn(isbn))?;
        tracing::info!("Deleted book ISBN={}", isbn);
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use serde_json::json;

    async fn seeded() -> CatalogService {
        let repository = Repository::in_memory();
        fixtures::seed(repository.store.as_ref()).await.unwrap();
        CatalogService::new(repository)
    }

    fn new_book(isbn: &str) -> CreateBook {
        serde_json::from_value(json!({
            "ISBN": isbn,
            "title": "Rust in Action",
            "language": "en",
            "category": ["tech"]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_book() {
        let service = seeded().await;
        match service.get_book("missing").await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "No book found for the ISBN of missing"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = seeded().await;
        let created = service.create_book(new_book("999")).await.unwrap();
        assert_eq!(service.get_book("999").await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_title_keeps_isbn() {
        let service = seeded().await;
        let updated = service.update_title("12345Two", "Python, Again").await.unwrap();
        assert_eq!(updated.isbn, "12345Two");
        assert_eq!(updated.title, "Python, Again");
        assert_eq!(service.get_book("12345Two").await.unwrap().title, "Python, Again");
    }

    #[tokio::test]
    async fn test_add_author_updates_both_sides() {
        let service = seeded().await;

        let (book, author) = service.add_author("12345Two", 2).await.unwrap();
        assert_eq!(book.authors, vec![1, 2]);
        let author = author.unwrap();
        assert!(author.books.contains(&"12345Two".to_string()));

        // Set-style: repeating is a no-op
        let (book, _) = service.add_author("12345Two", 2).await.unwrap();
        assert_eq!(book.authors, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_add_unknown_author() {
        let service = seeded().await;
        let (book, author) = service.add_author("12345Book", 42).await.unwrap();
        assert!(book.authors.contains(&42));
        assert!(author.is_none());
    }

    #[tokio::test]
    async fn test_remove_author_updates_both_sides() {
        let service = seeded().await;
        let (book, author) = service.remove_author("12345Book", 2).await.unwrap();
        assert_eq!(book.authors, vec![1]);
        assert!(author.unwrap().books.is_empty());
    }

    #[tokio::test]
    async fn test_set_publication() {
        let service = seeded().await;
        let (book, publication) = service.set_publication("12345Two", 2).await.unwrap();
        assert_eq!(book.publication, Some(2));
        assert_eq!(publication.unwrap().books, vec!["12345Two"]);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let service = seeded().await;
        service.delete_book("12345Book").await.unwrap();
        assert!(matches!(service.get_book("12345Book").await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete_book("12345Book").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_language_and_category() {
        let service = seeded().await;
        assert_eq!(service.books_by_language("en").await.unwrap().len(), 2);
        assert!(matches!(service.books_by_language("fr").await, Err(AppError::NotFound(_))));
        assert_eq!(service.get_book_by_category("web dev").await.unwrap().isbn, "12345Two");
    }
}
