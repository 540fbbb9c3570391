//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    #[serde(rename = "authorID")]
    pub author_id: String,
    pub name: String,
    pub email: String,
}

/// Validated author creation data
#[derive(Debug)]
pub struct CreateAuthor {
    pub author_id: String,
    pub name: String,
    pub email: String,
}
