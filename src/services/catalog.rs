//! Book catalog service

use mongodb::bson::{oid::ObjectId, Document};
use mongodb::results::InsertOneResult;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookComments},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books, most recent insert first
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_newest_first().await
    }

    /// Create a new book
    pub async fn create_book(&self, book: Book) -> AppResult<InsertOneResult> {
        let result = self.repository.books.insert(&book).await?;
        tracing::info!("Book created: {}", result.inserted_id);
        Ok(result)
    }

    /// Get a book by identifier, or None if absent
    pub async fn get_book(&self, id: ObjectId) -> AppResult<Option<Book>> {
        self.repository.books.get(id).await
    }

    /// Delete a book by identifier, returning the deletion count
    pub async fn delete_book(&self, id: ObjectId) -> AppResult<u64> {
        let result = self.repository.books.delete(id).await?;
        Ok(result.deleted_count)
    }

    /// Merge partial fields into an existing book
    pub async fn update_book(&self, id: ObjectId, mut fields: Document) -> AppResult<()> {
        // The identifier is immutable; a client echoing it back must not
        // end up in the $set document.
        fields.remove("_id");

        if fields.is_empty() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        let result = self.repository.books.merge_fields(id, fields).await?;
        if result.matched_count == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        tracing::info!("Book updated: {}", id);
        Ok(())
    }

    /// Append a comment to a book's comment list
    pub async fn add_comment(&self, id: ObjectId, comment: &str) -> AppResult<()> {
        let result = self.repository.books.push_comment(id, comment).await?;
        if result.modified_count != 1 {
            return Err(AppError::NotFound(
                "Book not found or comment not added".to_string(),
            ));
        }

        tracing::info!("Comment added to book {}", id);
        Ok(())
    }

    /// Get a book's comment list
    pub async fn get_comments(&self, id: ObjectId) -> AppResult<BookComments> {
        self.repository
            .books
            .get_comments(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }
}
