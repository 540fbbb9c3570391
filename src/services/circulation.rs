//! Book issue workflow service

use chrono::{Duration, Utc};

use crate::{
    error::{AppError, AppResult},
    models::issue::{BookIssue, IssueBook, NewIssue, ReturnTarget},
    repository::Repository,
};

/// Loan period applied when the caller does not supply a due date
const DEFAULT_LOAN_DAYS: i64 = 21;

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Issue a book to a reader, resolving both by their display names.
    /// An unknown book or reader is a recoverable not-found failure and
    /// nothing is persisted.
    pub async fn issue_book(&self, request: IssueBook) -> AppResult<BookIssue> {
        let book = self.repository.books.get_by_title(&request.book_name).await?;
        let reader = self
            .repository
            .readers
            .get_by_name(&request.reader_name)
            .await?;

        let now = Utc::now();
        let due_date = request
            .due_date
            .unwrap_or_else(|| now + Duration::days(DEFAULT_LOAN_DAYS));

        // TODO: decrement stock and flip availability here once a stock
        // policy is decided; the legacy service never touched either on
        // issue.
        let issue = self
            .repository
            .issues
            .create(&NewIssue {
                reader_name: request.reader_name,
                book_name: request.book_name,
                reader_id: reader.id,
                book_id: book.id,
                issue_date: now,
                due_date,
            })
            .await?;

        tracing::info!(
            "Issued book {} to reader {} (issue {})",
            issue.book_name,
            issue.reader_name,
            issue.id
        );
        Ok(issue)
    }

    /// Return an issued book. An issue ID targets the exact record; a
    /// (reader name, book name) pair targets the most recent open issue.
    /// A record that is already returned stays returned.
    pub async fn return_book(&self, target: ReturnTarget) -> AppResult<BookIssue> {
        let issue = match target {
            ReturnTarget::Issue(id) => self.repository.issues.get_by_id(id).await?,
            ReturnTarget::Names {
                reader_name,
                book_name,
            } => self
                .repository
                .issues
                .find_open_by_names(&reader_name, &book_name)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "No open issue for reader {} and book {}",
                        reader_name, book_name
                    ))
                })?,
        };

        let returned = self
            .repository
            .issues
            .mark_returned(issue.id, Utc::now())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Issue {} is already returned", issue.id))
            })?;

        tracing::info!(
            "Returned book {} from reader {} (issue {})",
            returned.book_name,
            returned.reader_name,
            returned.id
        );
        Ok(returned)
    }
}
