//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "Book Catalog and Reading List REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::delete_book,
        books::update_book,
        books::add_comment,
        books::get_comments,
        // Users
        users::create_user,
        users::add_to_wishlist,
        users::add_to_reading_list,
        users::finish_reading_entry,
        users::get_user,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookComments,
            crate::models::book::CommentRequest,
            books::BookListResponse,
            books::InsertResponse,
            books::DeleteResponse,
            books::MessageResponse,
            // Users
            crate::models::user::User,
            crate::models::user::ReadingEntry,
            crate::models::user::WishlistRequest,
            crate::models::user::ReadingListRequest,
            users::UserLookupResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog and comments"),
        (name = "users", description = "Users, wishlists and reading lists")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
