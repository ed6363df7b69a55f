//! MongoDB-backed catalog store

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, IndexOptions, ReturnDocument},
    Client, Collection, Database, IndexModel,
};

use super::CatalogStore;
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, Publication},
};

const BOOKS: &str = "books";
const AUTHORS: &str = "authors";
const PUBLICATIONS: &str = "publications";

#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub fn new(client: Client, database: &str) -> Self {
        Self {
            database: client.database(database),
        }
    }

    /// Parse the connection string and open a client
    pub async fn connect(url: &str, database: &str) -> AppResult<Self> {
        let options = ClientOptions::parse(url).await?;
        let client = Client::with_options(options)?;
        Ok(Self::new(client, database))
    }

    fn books(&self) -> Collection<Book> {
        self.database.collection(BOOKS)
    }

    fn authors(&self) -> Collection<Author> {
        self.database.collection(AUTHORS)
    }

    fn publications(&self) -> Collection<Publication> {
        self.database.collection(PUBLICATIONS)
    }

    /// Unique indexes on the natural keys
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        self.books().create_index(unique_index("ISBN")).await?;
        self.authors().create_index(unique_index("id")).await?;
        self.publications().create_index(unique_index("id")).await?;
        Ok(())
    }

    async fn update_book(&self, isbn: &str, update: Document) -> AppResult<Option<Book>> {
        Ok(self
            .books()
            .find_one_and_update(doc! { "ISBN": isbn }, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn find_books(&self, filter: Document) -> AppResult<Vec<Book>> {
        Ok(self.books().find(filter).await?.try_collect().await?)
    }
}

fn unique_index(field: &str) -> IndexModel {
    IndexModel::builder()
        .keys(doc! { field: 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

#[async_trait]
impl CatalogStore for MongoStore {
    async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn books_list(&self) -> AppResult<Vec<Book>> {
        self.find_books(doc! {}).await
    }

    async fn books_find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self.books().find_one(doc! { "ISBN": isbn }).await?)
    }

    async fn books_find_by_category(&self, category: &str) -> AppResult<Option<Book>> {
        // Equality against an array field matches any element
        Ok(self.books().find_one(doc! { "category": category }).await?)
    }

    async fn books_find_by_language(&self, language: &str) -> AppResult<Vec<Book>> {
        self.find_books(doc! { "language": language }).await
    }

    async fn books_find_by_authors(&self, author_ids: &[i32]) -> AppResult<Vec<Book>> {
        self.find_books(doc! { "authors": { "$in": author_ids.to_vec() } })
            .await
    }

    async fn books_find_by_publications(&self, publication_ids: &[i32]) -> AppResult<Vec<Book>> {
        self.find_books(doc! { "publication": { "$in": publication_ids.to_vec() } })
            .await
    }

    async fn books_create(&self, book: &Book) -> AppResult<Book> {
        self.books()
            .insert_one(book)
            .await
            .map_err(|e| AppError::from_write(e, format!("Book {}", book.isbn)))?;
        Ok(book.clone())
    }

    async fn books_set_title(&self, isbn: &str, title: &str) -> AppResult<Option<Book>> {
        self.update_book(isbn, doc! { "$set": { "title": title } })
            .await
    }

    async fn books_add_author(&self, isbn: &str, author_id: i32) -> AppResult<Option<Book>> {
        self.update_book(isbn, doc! { "$addToSet": { "authors": author_id } })
            .await
    }

    async fn books_remove_author(&self, isbn: &str, author_id: i32) -> AppResult<Option<Book>> {
        self.update_book(isbn, doc! { "$pull": { "authors": author_id } })
            .await
    }

    async fn books_set_publication(&self, isbn: &str, publication_id: i32) -> AppResult<Option<Book>> {
        self.update_book(isbn, doc! { "$set": { "publication": publication_id } })
            .await
    }

    async fn books_link_author(&self, isbns: &[String], author_id: i32) -> AppResult<u64> {
        let result = self
            .books()
            .update_many(
                doc! { "ISBN": { "$in": isbns.to_vec() } },
                doc! { "$addToSet": { "authors": author_id } },
            )
            .await?;
        Ok(result.matched_count)
    }

    async fn books_link_publication(&self, isbns: &[String], publication_id: i32) -> AppResult<u64> {
        let result = self
            .books()
            .update_many(
                doc! { "ISBN": { "$in": isbns.to_vec() } },
                doc! { "$set": { "publication": publication_id } },
            )
            .await?;
        Ok(result.matched_count)
    }

    async fn books_delete(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self.books().find_one_and_delete(doc! { "ISBN": isbn }).await?)
    }

    async fn authors_list(&self) -> AppResult<Vec<Author>> {
        Ok(self.authors().find(doc! {}).await?.try_collect().await?)
    }

    async fn authors_find_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        Ok(self.authors().find_one(doc! { "id": id }).await?)
    }

    async fn authors_find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Author>> {
        Ok(self
            .authors()
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?
            .try_collect()
            .await?)
    }

    async fn authors_create(&self, author: &Author) -> AppResult<Author> {
        self.authors()
            .insert_one(author)
            .await
            .map_err(|e| AppError::from_write(e, format!("Author {}", author.id)))?;
        Ok(author.clone())
    }

    async fn publications_list(&self) -> AppResult<Vec<Publication>> {
        Ok(self.publications().find(doc! {}).await?.try_collect().await?)
    }

    async fn publications_find_by_id(&self, id: i32) -> AppResult<Option<Publication>> {
        Ok(self.publications().find_one(doc! { "id": id }).await?)
    }

    async fn publications_create(&self, publication: &Publication) -> AppResult<Publication> {
        self.publications()
            .insert_one(publication)
            .await
            .map_err(|e| AppError::from_write(e, format!("Publication {}", publication.id)))?;
        Ok(publication.clone())
    }
}

#[cfg(test)]
mod tests {
    //! These need a running MongoDB (`MONGO_URL`, default localhost):
    //! `cargo test -- --ignored`

    use super::*;
    use crate::fixtures;

    async fn store(name: &str) -> MongoStore {
        let url = std::env::var("MONGO_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database = format!("booky_test_{}_{}", std::process::id(), name);
        let store = MongoStore::connect(&url, &database).await.unwrap();
        store.database.drop().await.unwrap();
        store.ensure_indexes().await.unwrap();
        fixtures::seed(&store).await.unwrap();
        store
    }

    #[tokio::test]
    #[ignore]
    async fn test_duplicate_keys_are_conflicts() {
        let store = store("duplicates").await;

        let book = fixtures::books().remove(0);
        assert!(matches!(store.books_create(&book).await, Err(AppError::Conflict(_))));

        let author = fixtures::authors().remove(0);
        assert!(matches!(store.authors_create(&author).await, Err(AppError::Conflict(_))));

        let publication = fixtures::publications().remove(0);
        assert!(matches!(
            store.publications_create(&publication).await,
            Err(AppError::Conflict(_))
        ));

        store.database.drop().await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_author_set_updates() {
        let store = store("authors").await;

        let book = store.books_add_author("12345Two", 2).await.unwrap().unwrap();
        assert_eq!(book.authors, vec![1, 2]);

        // $addToSet leaves an existing member alone
        let book = store.books_add_author("12345Two", 2).await.unwrap().unwrap();
        assert_eq!(book.authors, vec![1, 2]);

        let book = store.books_remove_author("12345Two", 1).await.unwrap().unwrap();
        assert_eq!(book.authors, vec![2]);

        assert!(store.books_add_author("missing", 1).await.unwrap().is_none());

        let linked = store
            .books_link_author(&["12345Book".to_string(), "missing".to_string()], 3)
            .await
            .unwrap();
        assert_eq!(linked, 1);
        assert_eq!(store.books_find_by_authors(&[3]).await.unwrap().len(), 1);

        store.database.drop().await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_queries_and_delete() {
        let store = store("queries").await;

        let book = store.books_find_by_category("web dev").await.unwrap().unwrap();
        assert_eq!(book.isbn, "12345Two");
        assert_eq!(store.books_find_by_language("en").await.unwrap().len(), 2);

        let book = store.books_set_publication("12345Two", 2).await.unwrap().unwrap();
        assert_eq!(book.publication, Some(2));
        assert_eq!(store.books_find_by_publications(&[2]).await.unwrap().len(), 1);

        let deleted = store.books_delete("12345Book").await.unwrap().unwrap();
        assert_eq!(deleted.isbn, "12345Book");
        assert!(store.books_find_by_isbn("12345Book").await.unwrap().is_none());
        assert!(store.books_delete("12345Book").await.unwrap().is_none());

        store.database.drop().await.unwrap();
    }
}
