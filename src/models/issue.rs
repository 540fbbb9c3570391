//! Book issue model and lifecycle types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lifecycle status of a book issue. `Issued` is the initial state,
/// `Returned` is terminal; no other transition exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "issue_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Issued,
    Returned,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Issued => "issued",
            IssueStatus::Returned => "returned",
        }
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Book issue record from the database.
///
/// Carries both the denormalized display names the legacy API matches on and
/// the resolved foreign keys of the reader and book.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookIssue {
    pub id: i32,
    pub reader_name: String,
    pub book_name: String,
    pub reader_id: i32,
    pub book_id: i32,
    pub status: IssueStatus,
    #[serde(rename = "issueDate")]
    pub issue_date: DateTime<Utc>,
    /// Due date while the issue is open; actual return time once returned
    #[serde(rename = "returnDate")]
    pub return_date: DateTime<Utc>,
}

/// Issue creation data with resolved references
#[derive(Debug)]
pub struct NewIssue {
    pub reader_name: String,
    pub book_name: String,
    pub reader_id: i32,
    pub book_id: i32,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

/// Validated issue request
#[derive(Debug)]
pub struct IssueBook {
    pub reader_name: String,
    pub book_name: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// Which issue a return targets. The issue ID is exact; the name pair
/// resolves to the most recent open issue.
#[derive(Debug)]
pub enum ReturnTarget {
    Issue(i32),
    Names {
        reader_name: String,
        book_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&IssueStatus::Issued).unwrap(),
            "\"issued\""
        );
        assert_eq!(IssueStatus::Returned.to_string(), "returned");
    }
}
