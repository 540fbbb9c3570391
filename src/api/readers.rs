//! Reader endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{reader::CreateReader, Reader},
};

use super::{missing_fields, require_body};

/// Reader create/fetch payload. `book` carries the application-level IDs of
/// the reader's registered books.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReaderPayload {
    #[serde(rename = "readerID")]
    pub reader_id: Option<String>,
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "book", default)]
    pub books: Option<Vec<String>>,
}

impl ReaderPayload {
    fn validated(self) -> AppResult<CreateReader> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        match (
            self.reader_id,
            self.name,
            self.email,
            self.phone,
            self.password,
            self.address,
        ) {
            (Some(reader_id), Some(name), Some(email), Some(phone), Some(password), Some(address)) => {
                Ok(CreateReader {
                    reader_id,
                    name,
                    email,
                    phone,
                    password,
                    address,
                    books: self.books.unwrap_or_default(),
                })
            }
            (reader_id, name, email, phone, password, address) => Err(missing_fields(&[
                ("readerID", reader_id.is_none()),
                ("name", name.is_none()),
                ("email", email.is_none()),
                ("phone", phone.is_none()),
                ("password", password.is_none()),
                ("address", address.is_none()),
            ])),
        }
    }
}

/// Register a new reader
#[utoipa::path(
    post,
    path = "/reader",
    tag = "readers",
    request_body = ReaderPayload,
    responses(
        (status = 201, description = "Reader created", body = Reader),
        (status = 400, description = "Reader with this email or phone already exists", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Referenced book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reader(
    State(state): State<crate::AppState>,
    payload: Option<Json<ReaderPayload>>,
) -> AppResult<(StatusCode, Json<Reader>)> {
    let reader = require_body(payload)?.validated()?;
    let created = state.services.members.create_reader(reader).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch a reader by email, with the full shape in the request body
#[utoipa::path(
    get,
    path = "/reader",
    tag = "readers",
    request_body = ReaderPayload,
    responses(
        (status = 201, description = "Reader found", body = Reader),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Reader not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn fetch_reader(
    State(state): State<crate::AppState>,
    payload: Option<Json<ReaderPayload>>,
) -> AppResult<(StatusCode, Json<Reader>)> {
    let reader = require_body(payload)?.validated()?;
    let found = state.services.members.get_reader(&reader.email).await?;
    Ok((StatusCode::CREATED, Json(found)))
}
