//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookComments, CommentRequest},
};

use super::{parse_object_id, ValidatedJson};

/// Envelope for the book listing
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub status: bool,
    pub data: Vec<Book>,
}

/// Insert acknowledgment returned by create endpoints
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertResponse {
    pub(crate) fn from_inserted_id(inserted_id: Bson) -> Self {
        let inserted_id = match inserted_id.as_object_id() {
            Some(id) => id.to_hex(),
            None => inserted_id.to_string(),
        };
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Delete acknowledgment
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Confirmation message for mutations
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// List all books, newest first
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, most recent insert first", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookListResponse>> {
    let data = state.services.catalog.list_books().await?;

    Ok(Json(BookListResponse { status: true, data }))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = InsertResponse),
        (status = 400, description = "Invalid body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> AppResult<(StatusCode, Json<InsertResponse>)> {
    let result = state.services.catalog.create_book(book).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertResponse::from_inserted_id(result.inserted_id)),
    ))
}

/// Get a book by identifier
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "The book, or null if absent", body = Book),
        (status = 400, description = "Malformed identifier", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Book>>> {
    let id = parse_object_id(&id)?;

    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Delete a book by identifier
#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Deletion count (0 when nothing matched)", body = DeleteResponse),
        (status = 400, description = "Malformed identifier", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_object_id(&id)?;

    let deleted_count = state.services.catalog.delete_book(id).await?;
    Ok(Json(DeleteResponse {
        acknowledged: true,
        deleted_count,
    }))
}

/// Merge partial fields into an existing book
#[utoipa::path(
    patch,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Document>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_object_id(&id)?;

    state.services.catalog.update_book(id, fields).await?;
    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// Append a comment to a book
#[utoipa::path(
    post,
    path = "/comment/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment appended", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_comment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_object_id(&id)?;

    state
        .services
        .catalog
        .add_comment(id, &request.comment)
        .await?;
    Ok(Json(MessageResponse::new("Comment added successfully")))
}

/// Get a book's comment list
#[utoipa::path(
    get,
    path = "/comment/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "The book's comments", body = BookComments),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_comments(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookComments>> {
    let id = parse_object_id(&id)?;

    let comments = state.services.catalog.get_comments(id).await?;
    Ok(Json(comments))
}
