//! Reader model and related types

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reader record from the database. The password hash never leaves the
/// server.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Reader {
    pub id: i32,
    #[serde(rename = "readerID")]
    pub reader_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub address: String,
    /// Resolved foreign keys of the reader's registered books
    #[serde(rename = "book")]
    pub book_ids: Vec<i32>,
}

/// Validated reader creation data. `books` holds the application-level IDs
/// of the referenced books, resolved to foreign keys at creation time.
#[derive(Debug)]
pub struct CreateReader {
    pub reader_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub books: Vec<String>,
}
