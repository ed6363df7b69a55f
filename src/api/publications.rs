//! Publication endpoints

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
    models::{Book, CreatePublication, PublicationWithBooks},
    services::publications::no_publication_for_id,
};

#[derive(Serialize, ToSchema)]
pub struct PublicationsResponse {
    pub publications: Vec<PublicationWithBooks>,
}

#[derive(Serialize, ToSchema)]
pub struct CreatePublicationResponse {
    #[serde(rename = "Publication")]
    pub publication: PublicationWithBooks,
    pub message: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LinkBookRequest {
    /// Publication id
    #[serde(rename = "pubId")]
    pub pub_id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct LinkBookResponse {
    pub books: Book,
    /// `null` when no publication has the given id
    pub publications: Option<PublicationWithBooks>,
    pub message: String,
}

/// Get all publications
#[utoipa::path(
    get,
    path = "/publications",
    tag = "publications",
    responses(
        (status = 200, description = "All publications", body = Vec<PublicationWithBooks>)
    )
)]
pub async fn list_publications(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PublicationWithBooks>>> {
    let publications = state.services.publications.list().await?;
    Ok(Json(publications))
}

/// Get a publication by id
#[utoipa::path(
    get,
    path = "/publications/id/{id}",
    tag = "publications",
    params(("id" = i32, Path, description = "Publication ID")),
    responses(
        (status = 200, description = "Publication, or an `error` field", body = PublicationsResponse)
    )
)]
pub async fn get_publication(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PublicationsResponse>> {
    // A non-numeric id cannot match any publication
    let id: i32 = id.parse().map_err(|_| no_publication_for_id(&id))?;
    let publication = state.services.publications.get(id).await?;
    Ok(Json(PublicationsResponse {
        publications: vec![publication],
    }))
}

/// Get the publications of a book
#[utoipa::path(
    get,
    path = "/publication/{isbn}",
    tag = "publications",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Publications of the book, or an `error` field", body = PublicationsResponse)
    )
)]
pub async fn list_publications_for_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<PublicationsResponse>> {
    let publications = state.services.publications.for_book(&isbn).await?;
    Ok(Json(PublicationsResponse { publications }))
}

/// Add a new publication
#[utoipa::path(
    post,
    path = "/publication/new",
    tag = "publications",
    request_body = CreatePublication,
    responses(
        (status = 200, description = "Publication created", body = CreatePublicationResponse),
        (status = 400, description = "Missing name"),
        (status = 409, description = "Publication id already exists")
    )
)]
pub async fn create_publication(
    State(state): State<crate::AppState>,
    JsonOrForm(data): JsonOrForm<CreatePublication>,
) -> AppResult<Json<CreatePublicationResponse>> {
    data.validate()?;
    let publication = state.services.publications.create(data).await?;
    Ok(Json(CreatePublicationResponse {
        publication,
        message: "Publication was added".to_string(),
    }))
}

/// Attach a book to a publication
#[utoipa::path(
    put,
    path = "/publication/update/book/{isbn}",
    tag = "publications",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = LinkBookRequest,
    responses(
        (status = 200, description = "Updated book and publication, or an `error` field", body = LinkBookResponse)
    )
)]
pub async fn link_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    JsonOrForm(request): JsonOrForm<LinkBookRequest>,
) -> AppResult<Json<LinkBookResponse>> {
    let (book, publication) = state
        .services
        .catalog
        .set_publication(&isbn, request.pub_id)
        .await?;
    Ok(Json(LinkBookResponse {
        books: book,
        publications: publication,
        message: "Successfully updated publications".to_string(),
    }))
}
