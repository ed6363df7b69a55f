//! Author endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use super::JsonOrForm;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{AuthorWithBooks, CreateAuthor},
};

#[derive(Serialize, ToSchema)]
pub struct AuthorsResponse {
    pub authors: Vec<AuthorWithBooks>,
}

#[derive(Deserialize, ToSchema)]
pub struct NewAuthorRequest {
    #[serde(rename = "newAuthor")]
    pub new_author: CreateAuthor,
}

#[derive(Serialize, ToSchema)]
pub struct CreateAuthorResponse {
    pub author: AuthorWithBooks,
    pub message: String,
}

/// Get all authors
#[utoipa::path(
    get,
    path = "/author",
    tag = "authors",
    responses(
        (status = 200, description = "All authors", body = Vec<AuthorWithBooks>)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<AuthorWithBooks>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(authors))
}

/// Get the authors of a book
#[utoipa::path(
    get,
    path = "/author/book/{isbn}",
    tag = "authors",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Authors of the book, or an `error` field", body = AuthorsResponse)
    )
)]
pub async fn list_authors_for_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<AuthorsResponse>> {
    let authors = state.services.authors.for_book(&isbn).await?;
    Ok(Json(AuthorsResponse { authors }))
}

/// Add a new author
#[utoipa::path(
    post,
    path = "/author/new",
    tag = "authors",
    request_body = NewAuthorRequest,
    responses(
        (status = 200, description = "Author created", body = CreateAuthorResponse),
        (status = 400, description = "Missing name"),
        (status = 409, description = "Author id already exists")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    JsonOrForm(request): JsonOrForm<NewAuthorRequest>,
) -> AppResult<Json<CreateAuthorResponse>> {
    request.new_author.validate()?;
    let author = state.services.authors.create(request.new_author).await?;
    Ok(Json(CreateAuthorResponse {
        author,
        message: "new add".to_string(),
    }))
}
