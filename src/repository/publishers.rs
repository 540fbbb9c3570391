//! Publishers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::publisher::{CreatePublisher, Publisher},
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a publisher by name (natural key)
    pub async fn get_by_name(&self, name: &str) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Publisher {} not found", name)))
    }

    /// Get a publisher by its application-level ID
    pub async fn get_by_publisher_id(&self, publisher_id: &str) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            "SELECT * FROM publishers WHERE publisher_id = $1 ORDER BY id LIMIT 1",
        )
        .bind(publisher_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Publisher {} not found", publisher_id)))
    }

    /// Check if a publisher with this name already exists
    pub async fn name_exists(&self, name: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM publishers WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert a new publisher
    pub async fn create(&self, publisher: &CreatePublisher) -> AppResult<Publisher> {
        let created = sqlx::query_as::<_, Publisher>(
            r#"
            INSERT INTO publishers (publisher_id, name, year_of_publication)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&publisher.publisher_id)
        .bind(&publisher.name)
        .bind(publisher.year_of_publication)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
