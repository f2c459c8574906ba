//! User, wishlist and reading-list endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{ReadingListRequest, User, WishlistRequest},
};

use super::{
    books::{InsertResponse, MessageResponse},
    parse_object_id, ValidatedJson,
};

/// Lookup envelope with a presence flag; an unknown email is not an error
#[derive(Serialize, ToSchema)]
pub struct UserLookupResponse {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<User>,
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = InsertResponse),
        (status = 400, description = "Invalid body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(user): Json<User>,
) -> AppResult<(StatusCode, Json<InsertResponse>)> {
    let result = state.services.readers.create_user(user).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertResponse::from_inserted_id(result.inserted_id)),
    ))
}

/// Add a book title to a user's wishlist
#[utoipa::path(
    post,
    path = "/wishlist",
    tag = "users",
    request_body = WishlistRequest,
    responses(
        (status = 200, description = "Title appended to the wishlist", body = MessageResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Append did not apply", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_to_wishlist(
    State(state): State<crate::AppState>,
    ValidatedJson(request): ValidatedJson<WishlistRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .readers
        .add_to_wishlist(&request.email, &request.book_title)
        .await?;
    Ok(Json(MessageResponse::new("Book added to wishlist")))
}

/// Add an entry to a user's reading list
#[utoipa::path(
    post,
    path = "/myList",
    tag = "users",
    request_body = ReadingListRequest,
    responses(
        (status = 200, description = "Entry appended to the reading list", body = MessageResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Append did not apply", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_to_reading_list(
    State(state): State<crate::AppState>,
    ValidatedJson(request): ValidatedJson<ReadingListRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .readers
        .add_to_reading_list(&request.email, &request.book_title, &request.status)
        .await?;
    Ok(Json(MessageResponse::new("Book added to the list")))
}

/// Mark a reading-list entry as finished
#[utoipa::path(
    patch,
    path = "/myList/{email}/{bookId}",
    tag = "users",
    params(
        ("email" = String, Path, description = "User email"),
        ("bookId" = String, Path, description = "Reading-list entry identifier")
    ),
    responses(
        (status = 200, description = "Entry status updated", body = MessageResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Update did not apply", body = crate::error::ErrorResponse)
    )
)]
pub async fn finish_reading_entry(
    State(state): State<crate::AppState>,
    Path((email, book_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    let entry_id = parse_object_id(&book_id)?;

    state
        .services
        .readers
        .finish_reading_entry(&email, entry_id)
        .await?;
    Ok(Json(MessageResponse::new("Book status updated")))
}

/// Look up a user by email
#[utoipa::path(
    get,
    path = "/user/{email}",
    tag = "users",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "Lookup result with presence flag", body = UserLookupResponse)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<UserLookupResponse>> {
    let user = state.services.readers.get_by_email(&email).await?;

    Ok(Json(UserLookupResponse {
        status: user.is_some(),
        data: user,
    }))
}
