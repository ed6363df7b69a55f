//! Author model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Author document as stored in the `authors` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// Author with the ISBNs of the books that list it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorWithBooks {
    pub id: i32,
    pub name: String,
    pub books: Vec<String>,
}

impl AuthorWithBooks {
    pub fn new(author: Author, books: Vec<String>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            books,
        }
    }
}

/// Create author request (the `newAuthor` member of the POST body)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    pub id: i32,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Existing books to attach this author to
    #[serde(default)]
    pub books: Vec<String>,
}
