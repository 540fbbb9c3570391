//! Authors repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get an author by email (natural key)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with email {} not found", email)))
    }

    /// Get an author by its application-level ID
    pub async fn get_by_author_id(&self, author_id: &str) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE author_id = $1 ORDER BY id LIMIT 1",
        )
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", author_id)))
    }

    /// Check if an author with this email already exists
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM authors WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Insert a new author
    pub async fn create(&self, author: &CreateAuthor) -> AppResult<Author> {
        let created = sqlx::query_as::<_, Author>(
            "INSERT INTO authors (author_id, name, email) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&author.author_id)
        .bind(&author.name)
        .bind(&author.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
