//! Reader account service: user creation, wishlists and reading lists.
//!
//! The list mutations check that the user exists before appending, so an
//! unknown email surfaces as 404 rather than a silent no-op. The append
//! itself is atomic in the store; a zero modified count afterwards means
//! the document disappeared between the two calls.

use mongodb::bson::oid::ObjectId;
use mongodb::results::InsertOneResult;

use crate::{
    error::{AppError, AppResult},
    models::user::{ReadingEntry, User, STATUS_FINISHED},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReadersService {
    repository: Repository,
}

impl ReadersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new user
    pub async fn create_user(&self, user: User) -> AppResult<InsertOneResult> {
        let result = self.repository.users.insert(&user).await?;
        tracing::info!("User created: {}", result.inserted_id);
        Ok(result)
    }

    /// Append a book title to the user's wishlist
    pub async fn add_to_wishlist(&self, email: &str, title: &str) -> AppResult<()> {
        self.require_user(email).await?;

        let result = self.repository.users.push_wishlist(email, title).await?;
        if result.modified_count != 1 {
            return Err(AppError::WriteNotApplied(
                "Book not added to wishlist".to_string(),
            ));
        }

        tracing::info!("Book added to wishlist of {}", email);
        Ok(())
    }

    /// Append a new entry to the user's reading list
    pub async fn add_to_reading_list(
        &self,
        email: &str,
        title: &str,
        status: &str,
    ) -> AppResult<ReadingEntry> {
        self.require_user(email).await?;

        let entry = ReadingEntry {
            id: ObjectId::new(),
            title: title.to_string(),
            status: status.to_string(),
        };

        let result = self
            .repository
            .users
            .push_reading_entry(email, &entry)
            .await?;
        if result.modified_count != 1 {
            return Err(AppError::WriteNotApplied(
                "Book not added to the list".to_string(),
            ));
        }

        tracing::info!("Book added to the list of {}", email);
        Ok(entry)
    }

    /// Mark the reading-list entry with the given id as finished
    pub async fn finish_reading_entry(&self, email: &str, entry_id: ObjectId) -> AppResult<()> {
        self.require_user(email).await?;

        let result = self
            .repository
            .users
            .set_reading_entry_status(email, entry_id, STATUS_FINISHED)
            .await?;
        if result.modified_count != 1 {
            return Err(AppError::WriteNotApplied(
                "Failed to update book status".to_string(),
            ));
        }

        tracing::info!("Book status updated for {}", email);
        Ok(())
    }

    /// Look up a user by email; None is not an error here
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.repository.users.find_by_email(email).await
    }

    async fn require_user(&self, email: &str) -> AppResult<User> {
        self.repository
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
