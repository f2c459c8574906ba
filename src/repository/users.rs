//! Users repository for document store operations.
//!
//! List mutations use the store's atomic array operators (`$push`, the
//! positional `$` update) so concurrent appends against the same email
//! cannot overwrite each other.

use mongodb::{
    bson::{doc, oid::ObjectId},
    results::{InsertOneResult, UpdateResult},
    Collection, Database,
};

use crate::{
    error::AppResult,
    models::user::{ReadingEntry, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    collection: Collection<User>,
}

impl UsersRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }

    /// Insert a user as a new document
    pub async fn insert(&self, user: &User) -> AppResult<InsertOneResult> {
        let result = self.collection.insert_one(user, None).await?;
        Ok(result)
    }

    /// Fetch the first user matching the given email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "email": email }, None)
            .await?;
        Ok(user)
    }

    /// Append a title to the user's wishlist, creating the list if absent
    pub async fn push_wishlist(&self, email: &str, title: &str) -> AppResult<UpdateResult> {
        let result = self
            .collection
            .update_one(
                doc! { "email": email },
                doc! { "$push": { "wishlist": title } },
                None,
            )
            .await?;
        Ok(result)
    }

    /// Append an entry to the user's reading list, creating the list if absent
    pub async fn push_reading_entry(
        &self,
        email: &str,
        entry: &ReadingEntry,
    ) -> AppResult<UpdateResult> {
        let result = self
            .collection
            .update_one(
                doc! { "email": email },
                doc! { "$push": { "myList": {
                    "_id": entry.id,
                    "title": entry.title.as_str(),
                    "status": entry.status.as_str(),
                } } },
                None,
            )
            .await?;
        Ok(result)
    }

    /// Set the status of the reading-list entry matching `entry_id`
    pub async fn set_reading_entry_status(
        &self,
        email: &str,
        entry_id: ObjectId,
        status: &str,
    ) -> AppResult<UpdateResult> {
        let result = self
            .collection
            .update_one(
                doc! { "email": email, "myList._id": entry_id },
                doc! { "$set": { "myList.$.status": status } },
                None,
            )
            .await?;
        Ok(result)
    }
}
