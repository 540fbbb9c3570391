//! Book model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record from the database.
///
/// `author_id` and `publisher_id` are resolved foreign keys; the legacy API
/// carried the referenced application IDs as loose strings instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    #[serde(rename = "bookID")]
    pub book_id: String,
    pub title: String,
    pub author_id: i32,
    pub publisher_id: i32,
    pub edition: String,
    pub price: Decimal,
    #[serde(rename = "availability")]
    pub available: bool,
    pub stock: i32,
}

/// Validated book creation data. `author` and `publisher` hold the
/// application-level IDs of the referenced records, resolved to foreign
/// keys at creation time.
#[derive(Debug)]
pub struct CreateBook {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub edition: String,
    pub price: Decimal,
    pub available: bool,
    pub stock: i32,
}
