//! API handlers for Booky REST endpoints

pub mod authors;
pub mod books;
pub mod extract;
pub mod health;
pub mod openapi;
pub mod publications;


use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use extract::JsonOrForm;

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/", get(books::list_books))
        .route("/is/:isbn", get(books::get_book))
        .route("/c/:category", get(books::get_book_by_category))
        .route("/l/:language", get(books::list_books_by_language))
        .route("/book/new", post(books::create_book))
        .route("/book/update/:isbn", put(books::update_title))
        .route("/book/author/update/:isbn", put(books::add_author))
        .route("/book/delete/:isbn", delete(books::delete_book))
        .route("/book/delete/author/:isbn/:author_id", delete(books::remove_author))
        // Authors
        .route("/author", get(authors::list_authors))
        .route("/author/new", post(authors::create_author))
        .route("/author/book/:isbn", get(authors::list_authors_for_book))
        // Publications
        .route("/publications", get(publications::list_publications))
        .route("/publications/id/:id", get(publications::get_publication))
        .route("/publication/new", post(publications::create_publication))
        .route("/publication/:isbn", get(publications::list_publications_for_book))
        .route("/publication/update/book/:isbn", put(publications::link_book))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
