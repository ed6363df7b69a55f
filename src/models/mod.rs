//! Data models for Booky

pub mod author;
pub mod book;
pub mod publication;

// Re-export commonly used types
pub use author::{Author, AuthorWithBooks, CreateAuthor};
pub use book::{Book, CreateBook};
pub use publication::{CreatePublication, Publication, PublicationWithBooks};
