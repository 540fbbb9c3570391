//! Staff model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Staff record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Staff {
    pub id: i32,
    #[serde(rename = "staffID")]
    pub staff_id: String,
    pub name: String,
}

/// Validated staff creation data
#[derive(Debug)]
pub struct CreateStaff {
    pub staff_id: String,
    pub name: String,
}
