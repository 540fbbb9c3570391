//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod issues;
pub mod publishers;
pub mod readers;
pub mod staff;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub publishers: publishers::PublishersRepository,
    pub staff: staff::StaffRepository,
    pub books: books::BooksRepository,
    pub readers: readers::ReadersRepository,
    pub issues: issues::IssuesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            publishers: publishers::PublishersRepository::new(pool.clone()),
            staff: staff::StaffRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            readers: readers::ReadersRepository::new(pool.clone()),
            issues: issues::IssuesRepository::new(pool.clone()),
            pool,
        }
    }
}
