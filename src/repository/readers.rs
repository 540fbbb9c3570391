//! Readers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::reader::{CreateReader, Reader},
};

#[derive(Clone)]
pub struct ReadersRepository {
    pool: Pool<Postgres>,
}

impl ReadersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a reader by email (natural key)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>("SELECT * FROM readers WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reader with email {} not found", email)))
    }

    /// Get a reader by exact display name. Names are not unique; the lowest
    /// id wins so repeated lookups stay deterministic.
    pub async fn get_by_name(&self, name: &str) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>("SELECT * FROM readers WHERE name = $1 ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reader {} not found", name)))
    }

    /// Check if a reader with this email already exists
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM readers WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Check if a reader with this phone number already exists
    pub async fn phone_exists(&self, phone: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM readers WHERE phone = $1)")
                .bind(phone)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert a new reader with a hashed password and resolved book references
    pub async fn create(
        &self,
        reader: &CreateReader,
        password_hash: &str,
        book_ids: &[i32],
    ) -> AppResult<Reader> {
        let created = sqlx::query_as::<_, Reader>(
            r#"
            INSERT INTO readers (reader_id, name, email, phone, password_hash, address, book_ids)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&reader.reader_id)
        .bind(&reader.name)
        .bind(&reader.email)
        .bind(&reader.phone)
        .bind(password_hash)
        .bind(&reader.address)
        .bind(book_ids)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
