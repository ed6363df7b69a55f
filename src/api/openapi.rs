//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health, publications};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Booky API",
        version = "1.0.0",
        description = "Books, authors and publications REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::get_book_by_category,
        books::list_books_by_language,
        books::create_book,
        books::update_title,
        books::add_author,
        books::delete_book,
        books::remove_author,
        // Authors
        authors::list_authors,
        authors::list_authors_for_book,
        authors::create_author,
        // Publications
        publications::list_publications,
        publications::get_publication,
        publications::list_publications_for_book,
        publications::create_publication,
        publications::link_book,
    ),
    components(
        schemas(
            // Models
            crate::models::Book,
            crate::models::CreateBook,
            crate::models::AuthorWithBooks,
            crate::models::CreateAuthor,
            crate::models::PublicationWithBooks,
            crate::models::CreatePublication,
            // Books
            books::AllBooksResponse,
            books::BookResponse,
            books::BookListResponse,
            books::NewBookRequest,
            books::CreateBookResponse,
            books::UpdateTitleRequest,
            books::BooksResponse,
            books::AddAuthorRequest,
            books::AddAuthorResponse,
            books::RemoveAuthorResponse,
            // Authors
            authors::AuthorsResponse,
            authors::NewAuthorRequest,
            authors::CreateAuthorResponse,
            // Publications
            publications::PublicationsResponse,
            publications::CreatePublicationResponse,
            publications::LinkBookRequest,
            publications::LinkBookResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::NotFoundResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book management"),
        (name = "authors", description = "Author management"),
        (name = "publications", description = "Publication management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
