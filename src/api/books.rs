//! Book endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use super::JsonOrForm;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{AuthorWithBooks, Book, CreateBook},
};

#[derive(Serialize, ToSchema)]
pub struct AllBooksResponse {
    #[serde(rename = "getAllBooks")]
    pub get_all_books: Vec<Book>,
}

#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
}

#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub book: Vec<Book>,
}

#[derive(Deserialize, ToSchema)]
pub struct NewBookRequest {
    #[serde(rename = "newBook")]
    pub new_book: CreateBook,
}

#[derive(Serialize, ToSchema)]
pub struct CreateBookResponse {
    pub books: Book,
    pub message: String,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateTitleRequest {
    #[serde(rename = "bookTitle")]
    #[validate(length(min = 1, message = "bookTitle is required"))]
    pub book_title: String,
}

/// Book after an update or delete
#[derive(Serialize, ToSchema)]
pub struct BooksResponse {
    pub books: Book,
}

#[derive(Deserialize, ToSchema)]
pub struct AddAuthorRequest {
    /// Author id
    #[serde(rename = "newAuthor")]
    pub new_author: i32,
}

#[derive(Serialize, ToSchema)]
pub struct AddAuthorResponse {
    pub books: Book,
    /// `null` when no author has the given id
    pub authors: Option<AuthorWithBooks>,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct RemoveAuthorResponse {
    pub book: Book,
    pub author: Option<AuthorWithBooks>,
    pub message: String,
}

/// Get all books
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = AllBooksResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<AllBooksResponse>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(AllBooksResponse { get_all_books: books }))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/is/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book, or an `error` field when missing", body = BookResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_book(&isbn).await?;
    Ok(Json(BookResponse { book }))
}

/// Get a book in a category
#[utoipa::path(
    get,
    path = "/c/{category}",
    tag = "books",
    params(("category" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "First book in the category, or an `error` field", body = BookResponse)
    )
)]
pub async fn get_book_by_category(
    State(state): State<crate::AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_book_by_category(&category).await?;
    Ok(Json(BookResponse { book }))
}

/// Get books written in a language
#[utoipa::path(
    get,
    path = "/l/{language}",
    tag = "books",
    params(("language" = String, Path, description = "Language code")),
    responses(
        (status = 200, description = "Matching books, or an `error` field", body = BookListResponse)
    )
)]
pub async fn list_books_by_language(
    State(state): State<crate::AppState>,
    Path(language): Path<String>,
) -> AppResult<Json<BookListResponse>> {
    let book = state.services.catalog.books_by_language(&language).await?;
    Ok(Json(BookListResponse { book }))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/book/new",
    tag = "books",
    request_body = NewBookRequest,
    responses(
        (status = 200, description = "Book created", body = CreateBookResponse),
        (status = 400, description = "Missing ISBN or title"),
        (status = 409, description = "ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    JsonOrForm(request): JsonOrForm<NewBookRequest>,
) -> AppResult<Json<CreateBookResponse>> {
    request.new_book.validate()?;
    let book = state.services.catalog.create_book(request.new_book).await?;
    Ok(Json(CreateBookResponse {
        books: book,
        message: "book was added!!".to_string(),
    }))
}

/// Replace a book's title
#[utoipa::path(
    put,
    path = "/book/update/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = UpdateTitleRequest,
    responses(
        (status = 200, description = "Updated book, or an `error` field", body = BooksResponse)
    )
)]
pub async fn update_title(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    JsonOrForm(request): JsonOrForm<UpdateTitleRequest>,
) -> AppResult<Json<BooksResponse>> {
    request.validate()?;
    let book = state.services.catalog.update_title(&isbn, &request.book_title).await?;
    Ok(Json(BooksResponse { books: book }))
}

/// Add an author to a book
#[utoipa::path(
    put,
    path = "/book/author/update/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = AddAuthorRequest,
    responses(
        (status = 200, description = "Updated book and author, or an `error` field", body = AddAuthorResponse)
    )
)]
pub async fn add_author(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    JsonOrForm(request): JsonOrForm<AddAuthorRequest>,
) -> AppResult<Json<AddAuthorResponse>> {
    let (book, author) = state
        .services
        .catalog
        .add_author(&isbn, request.new_author)
        .await?;
    Ok(Json(AddAuthorResponse {
        books: book,
        authors: author,
        message: "new Author was added".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/book/delete/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Deleted book, or an `error` field", body = BooksResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BooksResponse>> {
    let book = state.services.catalog.delete_book(&isbn).await?;
    Ok(Json(BooksResponse { books: book }))
}

/// Remove an author from a book
#[utoipa::path(
    delete,
    path = "/book/delete/author/{isbn}/{author_id}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN"),
        ("author_id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Updated book and author, or an `error` field", body = RemoveAuthorResponse),
        (status = 400, description = "Author id is not a number")
    )
)]
pub async fn remove_author(
    State(state): State<crate::AppState>,
    Path((isbn, author_id)): Path<(String, String)>,
) -> AppResult<Json<RemoveAuthorResponse>> {
    let author_id: i32 = author_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid author id {}", author_id)))?;
    let (book, author) = state.services.catalog.remove_author(&isbn, author_id).await?;
    Ok(Json(RemoveAuthorResponse {
        book,
        author,
        message: "Author was deleted!!!!".to_string(),
    }))
}
