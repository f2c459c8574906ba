//! Books repository for document store operations.
//!
//! Every method is a single MongoDB call; match/modify counts are
//! interpreted by the service layer.

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneOptions, FindOptions},
    results::{DeleteResult, InsertOneResult, UpdateResult},
    Collection, Database,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookComments},
};

#[derive(Clone)]
pub struct BooksRepository {
    collection: Collection<Book>,
}

impl BooksRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }

    /// List all books, newest identifier first
    pub async fn list_newest_first(&self) -> AppResult<Vec<Book>> {
        let options = FindOptions::builder().sort(doc! { "_id": -1 }).build();
        let cursor = self.collection.find(doc! {}, options).await?;
        let books = cursor.try_collect().await?;
        Ok(books)
    }

    /// Insert a book as a new document
    pub async fn insert(&self, book: &Book) -> AppResult<InsertOneResult> {
        let result = self.collection.insert_one(book, None).await?;
        Ok(result)
    }

    /// Fetch a book by identifier
    pub async fn get(&self, id: ObjectId) -> AppResult<Option<Book>> {
        let book = self.collection.find_one(doc! { "_id": id }, None).await?;
        Ok(book)
    }

    /// Remove a book by identifier
    pub async fn delete(&self, id: ObjectId) -> AppResult<DeleteResult> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        Ok(result)
    }

    /// Merge the given fields into an existing book document
    pub async fn merge_fields(&self, id: ObjectId, fields: Document) -> AppResult<UpdateResult> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await?;
        Ok(result)
    }

    /// Append a comment to a book's comment list
    pub async fn push_comment(&self, id: ObjectId, comment: &str) -> AppResult<UpdateResult> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$push": { "comments": comment } },
                None,
            )
            .await?;
        Ok(result)
    }

    /// Fetch only the comment list of a book
    pub async fn get_comments(&self, id: ObjectId) -> AppResult<Option<BookComments>> {
        let options = FindOneOptions::builder()
            .projection(doc! { "_id": 0, "comments": 1 })
            .build();
        let comments = self
            .collection
            .clone_with_type::<BookComments>()
            .find_one(doc! { "_id": id }, options)
            .await?;
        Ok(comments)
    }
}
