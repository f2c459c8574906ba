//! Data models for Bookshelf

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookComments, CommentRequest};
pub use user::{ReadingEntry, ReadingListRequest, User, WishlistRequest};

/// Serde helpers for document identifiers.
///
/// Clients see identifiers as plain 24-char hex strings, while BSON keeps
/// the native ObjectId representation. The split keys off
/// `Serializer::is_human_readable`: JSON serializers are human readable,
/// the BSON one is not.
pub mod object_id {
    use mongodb::bson::oid::ObjectId;
    use serde::{Serialize, Serializer};

    pub fn serialize<S>(oid: &ObjectId, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&oid.to_hex())
        } else {
            oid.serialize(serializer)
        }
    }

    pub fn serialize_option<S>(oid: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match oid {
            Some(oid) => serialize(oid, serializer),
            None => serializer.serialize_none(),
        }
    }
}
