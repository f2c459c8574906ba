//! Book document model and related request types.
//!
//! Books are schemaless beyond the identifier: the named fields below are
//! the ones the API reads back, everything else a client sends is kept in
//! `extra` and written to the store verbatim.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::object_id;

/// Book document as stored in the `books` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "object_id::serialize_option"
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Ordered comment strings, appended to by the comment endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    /// Arbitrary client-supplied fields, passed through untouched
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

/// Projection of a book down to its comment list
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct BookComments {
    #[serde(default)]
    pub comments: Vec<String>,
}

/// Body for appending a comment to a book
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "Comment must not be empty"))]
    pub comment: String,
}
