//! Fixture dataset
//!
//! A small fixed catalog loaded into an empty store at startup. With the
//! memory backend this is the whole dataset and any change to it is lost
//! on restart.

use crate::{
    error::AppResult,
    models::{Author, Book, Publication},
    repository::CatalogStore,
};

pub fn books() -> Vec<Book> {
    vec![
        Book {
            isbn: "12345Book".to_string(),
            title: "Getting started with MERN".to_string(),
            pub_date: Some("2021-07-07".to_string()),
            language: "en".to_string(),
            num_page: Some(250),
            authors: vec![1, 2],
            publication: Some(1),
            category: vec![
                "tech".to_string(),
                "programming".to_string(),
                "education".to_string(),
                "thriller".to_string(),
            ],
        },
        Book {
            isbn: "12345Two".to_string(),
            title: "Getting started with Python".to_string(),
            pub_date: Some("2021-07-07".to_string()),
            language: "en".to_string(),
            num_page: Some(225),
            authors: vec![1],
            publication: Some(1),
            category: vec![
                "fiction".to_string(),
                "programming".to_string(),
                "tech".to_string(),
                "web dev".to_string(),
            ],
        },
    ]
}

pub fn authors() -> Vec<Author> {
    vec![
        Author {
            id: 1,
            name: "pavan".to_string(),
        },
        Author {
            id: 2,
            name: "Elon Musk".to_string(),
        },
    ]
}

pub fn publications() -> Vec<Publication> {
    vec![
        Publication {
            id: 1,
            name: "Chakra".to_string(),
        },
        Publication {
            id: 2,
            name: "Vickie Publications".to_string(),
        },
    ]
}

/// Insert the fixture dataset unless the store already holds books.
///
/// Returns `true` when the fixtures were inserted.
pub async fn seed(store: &dyn CatalogStore) -> AppResult<bool> {
    if !store.books_list().await?.is_empty() {
        tracing::debug!("Store already populated, skipping fixtures");
        return Ok(false);
    }

    for author in authors() {
        store.authors_create(&author).await?;
    }
    for publication in publications() {
        store.publications_create(&publication).await?;
    }
    for book in books() {
        store.books_create(&book).await?;
    }

    tracing::info!("Seeded store with fixture dataset");
    Ok(true)
}
