//! Publisher endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{publisher::CreatePublisher, Publisher},
};

use super::{missing_fields, require_body};

/// Publisher create/fetch payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct PublisherPayload {
    #[serde(rename = "publisherID")]
    pub publisher_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "yearOfPublication")]
    pub year_of_publication: Option<i32>,
}

impl PublisherPayload {
    fn validated(self) -> AppResult<CreatePublisher> {
        match (self.publisher_id, self.name, self.year_of_publication) {
            (Some(publisher_id), Some(name), Some(year_of_publication)) => Ok(CreatePublisher {
                publisher_id,
                name,
                year_of_publication,
            }),
            (publisher_id, name, year) => Err(missing_fields(&[
                ("publisherID", publisher_id.is_none()),
                ("name", name.is_none()),
                ("yearOfPublication", year.is_none()),
            ])),
        }
    }
}

/// Create a new publisher
#[utoipa::path(
    post,
    path = "/publisher",
    tag = "publishers",
    request_body = PublisherPayload,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Publisher with this name already exists", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    payload: Option<Json<PublisherPayload>>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    let publisher = require_body(payload)?.validated()?;
    let created = state.services.catalog.create_publisher(publisher).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch a publisher by name, with the full shape in the request body
#[utoipa::path(
    get,
    path = "/publisher",
    tag = "publishers",
    request_body = PublisherPayload,
    responses(
        (status = 201, description = "Publisher found", body = Publisher),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn fetch_publisher(
    State(state): State<crate::AppState>,
    payload: Option<Json<PublisherPayload>>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    let publisher = require_body(payload)?.validated()?;
    let found = state.services.catalog.get_publisher(&publisher.name).await?;
    Ok((StatusCode::CREATED, Json(found)))
}
