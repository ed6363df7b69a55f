//! Book model and related request types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book document as stored in the `books` collection.
///
/// A book is the owning side of its relationships: `authors` and
/// `publication` are stored here, and the inverse lists exposed on
/// authors and publications are derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Natural key
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    #[serde(rename = "pubDate", default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(rename = "numPage", default, skip_serializing_if = "Option::is_none")]
    pub num_page: Option<i32>,
    /// Author ids
    #[serde(default)]
    pub authors: Vec<i32>,
    /// Publication id
    #[serde(default)]
    pub publication: Option<i32>,
    #[serde(default)]
    pub category: Vec<String>,
}

/// Create book request (the `newBook` member of the POST body)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[serde(rename = "ISBN")]
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(rename = "numPage", default)]
    pub num_page: Option<i32>,
    #[serde(default)]
    pub authors: Vec<i32>,
    #[serde(default)]
    pub publication: Option<i32>,
    #[serde(default)]
    pub category: Vec<String>,
}

impl From<CreateBook> for Book {
    fn from(data: CreateBook) -> Self {
        let mut authors = Vec::with_capacity(data.authors.len());
        for id in data.authors {
            if !authors.contains(&id) {
                authors.push(id);
            }
        }

        Self {
            isbn: data.isbn,
            title: data.title,
            pub_date: data.pub_date,
            language: data.language,
            num_page: data.num_page,
            authors,
            publication: data.publication,
            category: data.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let book: Book = serde_json::from_value(json!({
            "ISBN": "12345Book",
            "title": "Getting started with MERN",
            "pubDate": "2021-07-07",
            "language": "en",
            "numPage": 250,
            "authors": [1, 2],
            "publication": 1,
            "category": ["tech", "programming"]
        }))
        .unwrap();

        assert_eq!(book.isbn, "12345Book");
        assert_eq!(book.num_page, Some(250));

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["ISBN"], "12345Book");
        assert_eq!(value["pubDate"], "2021-07-07");
        assert!(value.get("isbn").is_none());
    }

    #[test]
    fn test_create_dedups_authors() {
        let data: CreateBook = serde_json::from_value(json!({
            "ISBN": "x1",
            "title": "Dup",
            "authors": [3, 3, 1]
        }))
        .unwrap();

        let book = Book::from(data);
        assert_eq!(book.authors, vec![3, 1]);
        assert!(book.category.is_empty());
        assert_eq!(book.publication, None);
    }

    #[test]
    fn test_create_requires_isbn() {
        let data: CreateBook = serde_json::from_value(json!({ "ISBN": "", "title": "t" })).unwrap();
        assert!(data.validate().is_err());
    }
}
