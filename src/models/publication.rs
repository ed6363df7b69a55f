//! Publication (publisher) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Publication document as stored in the `publications` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i32,
    pub name: String,
}

/// Publication with the ISBNs of the books it published
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicationWithBooks {
    pub id: i32,
    pub name: String,
    pub books: Vec<String>,
}

impl PublicationWithBooks {
    pub fn new(publication: Publication, books: Vec<String>) -> Self {
        Self {
            id: publication.id,
            name: publication.name,
            books,
        }
    }
}

/// Create publication request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePublication {
    pub id: i32,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub books: Vec<String>,
}
