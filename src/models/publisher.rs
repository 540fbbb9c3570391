//! Publisher model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Publisher record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub id: i32,
    #[serde(rename = "publisherID")]
    pub publisher_id: String,
    pub name: String,
    #[serde(rename = "yearOfPublication")]
    pub year_of_publication: i32,
}

/// Validated publisher creation data
#[derive(Debug)]
pub struct CreatePublisher {
    pub publisher_id: String,
    pub name: String,
    pub year_of_publication: i32,
}
