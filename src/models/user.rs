//! User document model, reading-list types and request bodies.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::object_id;

/// Status written by the reading-list finish operation
pub const STATUS_FINISHED: &str = "finished reading";

/// A tracked book in a user's reading list.
///
/// The title is free text, not a reference to the `books` collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadingEntry {
    #[serde(rename = "_id", serialize_with = "object_id::serialize")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub title: String,
    pub status: String,
}

/// User document as stored in the `users` collection.
///
/// The email is a logical key only; uniqueness is not enforced at this
/// layer and lookups resolve to the first match.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "object_id::serialize_option"
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub email: String,
    /// Wished-for book titles, free text, duplicates permitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<Vec<String>>,
    #[serde(rename = "myList", default, skip_serializing_if = "Option::is_none")]
    pub my_list: Option<Vec<ReadingEntry>>,
    /// Arbitrary client-supplied fields, passed through untouched
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

/// Body for adding a title to a user's wishlist
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Book title must not be empty"))]
    pub book_title: String,
}

/// Body for adding an entry to a user's reading list
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Book title must not be empty"))]
    pub book_title: String,
    #[validate(length(min = 1, message = "Status must not be empty"))]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reading_entry_id_serializes_as_hex() {
        let entry = ReadingEntry {
            id: ObjectId::new(),
            title: "Dune".to_string(),
            status: "reading".to_string(),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["_id"], json!(entry.id.to_hex()));
        assert_eq!(value["status"], json!("reading"));
    }

    #[test]
    fn test_my_list_wire_name() {
        let user: User = serde_json::from_value(json!({
            "email": "reader@example.com",
            "myList": []
        }))
        .unwrap();

        assert_eq!(user.email, "reader@example.com");
        assert!(user.my_list.as_ref().is_some_and(|l| l.is_empty()));

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("myList").is_some());
        assert!(value.get("my_list").is_none());
    }

    #[test]
    fn test_wishlist_request_field_names() {
        let request: WishlistRequest = serde_json::from_value(json!({
            "email": "reader@example.com",
            "bookTitle": "Dune"
        }))
        .unwrap();

        assert_eq!(request.book_title, "Dune");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_wishlist_request_rejects_bad_email() {
        let request: WishlistRequest = serde_json::from_value(json!({
            "email": "not-an-email",
            "bookTitle": "Dune"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_reading_list_request_rejects_empty_status() {
        let request: ReadingListRequest = serde_json::from_value(json!({
            "email": "reader@example.com",
            "bookTitle": "Dune",
            "status": ""
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }
}
