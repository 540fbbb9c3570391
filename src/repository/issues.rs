//! Book issues repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::issue::{BookIssue, NewIssue},
};

#[derive(Clone)]
pub struct IssuesRepository {
    pool: Pool<Postgres>,
}

impl IssuesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get an issue by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BookIssue> {
        sqlx::query_as::<_, BookIssue>("SELECT * FROM book_issues WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Issue with id {} not found", id)))
    }

    /// Find the most recent open issue for a (reader name, book name) pair.
    /// The pair is not unique; ordering by issue date keeps the match
    /// deterministic.
    pub async fn find_open_by_names(
        &self,
        reader_name: &str,
        book_name: &str,
    ) -> AppResult<Option<BookIssue>> {
        let issue = sqlx::query_as::<_, BookIssue>(
            r#"
            SELECT * FROM book_issues
            WHERE reader_name = $1 AND book_name = $2 AND status = 'issued'
            ORDER BY issue_date DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(reader_name)
        .bind(book_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(issue)
    }

    /// Insert a new issue in the `issued` state
    pub async fn create(&self, issue: &NewIssue) -> AppResult<BookIssue> {
        let created = sqlx::query_as::<_, BookIssue>(
            r#"
            INSERT INTO book_issues
                (reader_name, book_name, reader_id, book_id, status, issue_date, return_date)
            VALUES ($1, $2, $3, $4, 'issued', $5, $6)
            RETURNING *
            "#,
        )
        .bind(&issue.reader_name)
        .bind(&issue.book_name)
        .bind(issue.reader_id)
        .bind(issue.book_id)
        .bind(issue.issue_date)
        .bind(issue.due_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Transition an issue to `returned` and stamp the actual return time.
    /// The status guard keeps the transition one-way; an already-returned
    /// issue yields `None`.
    pub async fn mark_returned(
        &self,
        id: i32,
        returned_at: DateTime<Utc>,
    ) -> AppResult<Option<BookIssue>> {
        let updated = sqlx::query_as::<_, BookIssue>(
            r#"
            UPDATE book_issues
            SET status = 'returned', return_date = $2
            WHERE id = $1 AND status = 'issued'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(returned_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }
}
