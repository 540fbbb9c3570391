//! Book issue endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        issue::{IssueBook, ReturnTarget},
        BookIssue,
    },
};

use super::{missing_fields, require_body};

/// Book issue creation payload. `status` and `issueDate` are accepted for
/// wire compatibility; new issues always start `issued` and the server clock
/// sets the issue date.
#[derive(Debug, Deserialize, ToSchema)]
pub struct IssuePayload {
    pub reader_name: Option<String>,
    pub book_name: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "issueDate")]
    pub issue_date: Option<DateTime<Utc>>,
    /// Due date; defaults to the standard loan period when omitted
    #[serde(rename = "returnDate")]
    pub return_date: Option<DateTime<Utc>>,
}

impl IssuePayload {
    fn validated(self) -> AppResult<IssueBook> {
        match (self.reader_name, self.book_name) {
            (Some(reader_name), Some(book_name)) => Ok(IssueBook {
                reader_name,
                book_name,
                due_date: self.return_date,
            }),
            (reader_name, book_name) => Err(missing_fields(&[
                ("reader_name", reader_name.is_none()),
                ("book_name", book_name.is_none()),
            ])),
        }
    }
}

/// Book return payload. An `issue_id` targets the exact issue; otherwise the
/// (reader_name, book_name) pair targets the most recent open issue.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReturnPayload {
    pub issue_id: Option<i32>,
    pub reader_name: Option<String>,
    pub book_name: Option<String>,
}

impl ReturnPayload {
    fn target(self) -> AppResult<ReturnTarget> {
        if let Some(id) = self.issue_id {
            return Ok(ReturnTarget::Issue(id));
        }
        match (self.reader_name, self.book_name) {
            (Some(reader_name), Some(book_name)) => Ok(ReturnTarget::Names {
                reader_name,
                book_name,
            }),
            (reader_name, book_name) => Err(missing_fields(&[
                ("reader_name", reader_name.is_none()),
                ("book_name", book_name.is_none()),
            ])),
        }
    }
}

/// Issue a book to a reader
#[utoipa::path(
    post,
    path = "/bookissue",
    tag = "issues",
    request_body = IssuePayload,
    responses(
        (status = 201, description = "Issue created", body = BookIssue),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Reader or book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_issue(
    State(state): State<crate::AppState>,
    payload: Option<Json<IssuePayload>>,
) -> AppResult<(StatusCode, Json<BookIssue>)> {
    let request = require_body(payload)?.validated()?;
    let issue = state.services.circulation.issue_book(request).await?;
    Ok((StatusCode::CREATED, Json(issue)))
}

/// Return an issued book
#[utoipa::path(
    patch,
    path = "/bookissue",
    tag = "issues",
    request_body = ReturnPayload,
    responses(
        (status = 200, description = "Issue returned", body = BookIssue),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "No open issue matches", body = crate::error::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_issue(
    State(state): State<crate::AppState>,
    payload: Option<Json<ReturnPayload>>,
) -> AppResult<Json<BookIssue>> {
    let target = require_body(payload)?.target()?;
    let issue = state.services.circulation.return_book(target).await?;
    Ok(Json(issue))
}
