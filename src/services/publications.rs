//! Publications service

use super::authors::isbns_where;
use crate::{
    error::{AppError, AppResult},
    models::{CreatePublication, Publication, PublicationWithBooks},
    repository::Repository,
};

/// Error for a publication id with no match (the id may not even parse)
pub fn no_publication_for_id(id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("No Publications found for the id {} ", id))
}

#[derive(Clone)]
pub struct PublicationsService {
    repository: Repository,
}

impl PublicationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<PublicationWithBooks>> {
        let publications = self.repository.store.publications_list().await?;
        self.with_books(publications).await
    }

    pub async fn get(&self, id: i32) -> AppResult<PublicationWithBooks> {
        let publication = self
            .repository
            .store
            .publications_find_by_id(id)
            .await?
            .ok_or_else(|| no_publication_for_id(id))?;

        self.with_books(vec![publication])
            .await?
            .pop()
            .ok_or_else(|| no_publication_for_id(id))
    }

    /// Like [`get`](Self::get) but `None` instead of an error
    pub async fn find(&self, id: i32) -> AppResult<Option<PublicationWithBooks>> {
        match self.get(id).await {
            Ok(publication) => Ok(Some(publication)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Publications that published the book with `isbn`
    pub async fn for_book(&self, isbn: &str) -> AppResult<Vec<PublicationWithBooks>> {
        let not_found = || AppError::NotFound(format!("No publications found for the book of {}", isbn));

        let publication_id = self
            .repository
            .store
            .books_find_by_isbn(isbn)
            .await?
            .and_then(|book| book.publication)
            .ok_or_else(not_found)?;

        match self.find(publication_id).await? {
            Some(publication) => Ok(vec![publication]),
            None => Err(not_found()),
        }
    }

    /// Create a publication and point the books it lists at it
    pub async fn create(&self, data: CreatePublication) -> AppResult<PublicationWithBooks> {
        let publication = self
            .repository
            .store
            .publications_create(&Publication {
                id: data.id,
                name: data.name,
            })
            .await?;

        if !data.books.is_empty() {
            let linked = self
                .repository
                .store
                .books_link_publication(&data.books, publication.id)
                .await?;
            tracing::debug!(
                "Publication {}: linked {} of {} listed books",
                publication.id,
                linked,
                data.books.len()
            );
        }

        tracing::info!("Created publication id={}", publication.id);
        self.get(publication.id).await
    }

    async fn with_books(&self, publications: Vec<Publication>) -> AppResult<Vec<PublicationWithBooks>> {
        if publications.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i32> = publications.iter().map(|p| p.id).collect();
        let books = self.repository.store.books_find_by_publications(&ids).await?;

        Ok(publications
            .into_iter()
            .map(|publication| {
                let isbns = isbns_where(&books, |b| b.publication == Some(publication.id));
                PublicationWithBooks::new(publication, isbns)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    async fn seeded() -> PublicationsService {
        let repository = Repository::in_memory();
        fixtures::seed(repository.store.as_ref()).await.unwrap();
        PublicationsService::new(repository)
    }

    #[tokio::test]
    async fn test_get_derives_books() {
        let service = seeded().await;

        let chakra = service.get(1).await.unwrap();
        assert_eq!(chakra.books, vec!["12345Book", "12345Two"]);

        let vickie = service.get(2).await.unwrap();
        assert!(vickie.books.is_empty());

        match service.get(99).await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "No Publications found for the id 99 "),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(service.find(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_for_book() {
        let service = seeded().await;

        let publications = service.for_book("12345Book").await.unwrap();
        assert_eq!(publications.len(), 1);
        assert_eq!(publications[0].id, 1);

        assert!(matches!(service.for_book("nope").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_moves_listed_books() {
        let service = seeded().await;

        let created = service
            .create(CreatePublication {
                id: 3,
                name: "Penguin".to_string(),
                books: vec!["12345Two".to_string()],
            })
            .await
            .unwrap();
        assert_eq!(created.books, vec!["12345Two"]);

        let chakra = service.get(1).await.unwrap();
        assert_eq!(chakra.books, vec!["12345Book"]);
    }
}
