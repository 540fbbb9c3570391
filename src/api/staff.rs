//! Staff endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{staff::CreateStaff, Staff},
};

use super::{missing_fields, require_body};

/// Staff create/fetch payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct StaffPayload {
    #[serde(rename = "staffID")]
    pub staff_id: Option<String>,
    pub name: Option<String>,
}

impl StaffPayload {
    fn validated(self) -> AppResult<CreateStaff> {
        match (self.staff_id, self.name) {
            (Some(staff_id), Some(name)) => Ok(CreateStaff { staff_id, name }),
            (staff_id, name) => Err(missing_fields(&[
                ("staffID", staff_id.is_none()),
                ("name", name.is_none()),
            ])),
        }
    }
}

/// Create a new staff member
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    request_body = StaffPayload,
    responses(
        (status = 201, description = "Staff member created", body = Staff),
        (status = 400, description = "Staff member with this ID already exists", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_staff(
    State(state): State<crate::AppState>,
    payload: Option<Json<StaffPayload>>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    let staff = require_body(payload)?.validated()?;
    let created = state.services.members.create_staff(staff).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch a staff member by staff ID, with the full shape in the request body
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    request_body = StaffPayload,
    responses(
        (status = 201, description = "Staff member found", body = Staff),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn fetch_staff(
    State(state): State<crate::AppState>,
    payload: Option<Json<StaffPayload>>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    let staff = require_body(payload)?.validated()?;
    let found = state.services.members.get_staff(&staff.staff_id).await?;
    Ok((StatusCode::CREATED, Json(found)))
}
