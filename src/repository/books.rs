//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a book by exact title (natural key)
    pub async fn get_by_title(&self, title: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE title = $1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", title)))
    }

    /// Get a book by its application-level ID
    pub async fn get_by_book_id(&self, book_id: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE book_id = $1 ORDER BY id LIMIT 1")
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", book_id)))
    }

    /// Check if a book with this title already exists
    pub async fn title_exists(&self, title: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE title = $1)")
                .bind(title)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert a new book with resolved author and publisher references
    pub async fn create(
        &self,
        book: &CreateBook,
        author_id: i32,
        publisher_id: i32,
    ) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (book_id, title, author_id, publisher_id, edition, price, available, stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&book.book_id)
        .bind(&book.title)
        .bind(author_id)
        .bind(publisher_id)
        .bind(&book.edition)
        .bind(book.price)
        .bind(book.available)
        .bind(book.stock)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
