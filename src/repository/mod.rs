//! Repository layer for document store operations

pub mod books;
pub mod users;

use mongodb::Database;

use crate::config::DatabaseConfig;

/// Main repository struct holding the database handle
#[derive(Clone)]
pub struct Repository {
    pub db: Database,
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository on the given database
    pub fn new(db: Database, config: &DatabaseConfig) -> Self {
        Self {
            books: books::BooksRepository::new(&db, &config.book_collection),
            users: users::UsersRepository::new(&db, &config.user_collection),
            db,
        }
    }
}
