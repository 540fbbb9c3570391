//! Author endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{author::CreateAuthor, Author},
};

use super::{missing_fields, require_body};

/// Author create/fetch payload. Fetch requests validate the same shape as
/// creates, matching the legacy API.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthorPayload {
    #[serde(rename = "authorID")]
    pub author_id: Option<String>,
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl AuthorPayload {
    fn validated(self) -> AppResult<CreateAuthor> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        match (self.author_id, self.name, self.email) {
            (Some(author_id), Some(name), Some(email)) => Ok(CreateAuthor {
                author_id,
                name,
                email,
            }),
            (author_id, name, email) => Err(missing_fields(&[
                ("authorID", author_id.is_none()),
                ("name", name.is_none()),
                ("email", email.is_none()),
            ])),
        }
    }
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/author",
    tag = "authors",
    request_body = AuthorPayload,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Author with this email already exists", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    payload: Option<Json<AuthorPayload>>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = require_body(payload)?.validated()?;
    let created = state.services.catalog.create_author(author).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch an author by email. The full author shape is passed in the request
/// body, not the query string.
#[utoipa::path(
    get,
    path = "/author",
    tag = "authors",
    request_body = AuthorPayload,
    responses(
        (status = 201, description = "Author found", body = Author),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn fetch_author(
    State(state): State<crate::AppState>,
    payload: Option<Json<AuthorPayload>>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = require_body(payload)?.validated()?;
    let found = state.services.catalog.get_author(&author.email).await?;
    // Found responses use 201, matching the legacy API
    Ok((StatusCode::CREATED, Json(found)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_with_all_fields_validates() {
        let payload = AuthorPayload {
            author_id: Some("A1".to_string()),
            name: Some("Jane".to_string()),
            email: Some("jane@x.com".to_string()),
        };
        let author = payload.validated().unwrap();
        assert_eq!(author.author_id, "A1");
        assert_eq!(author.email, "jane@x.com");
    }

    #[test]
    fn payload_lists_all_missing_fields() {
        let payload = AuthorPayload {
            author_id: None,
            name: Some("Jane".to_string()),
            email: None,
        };
        match payload.validated().unwrap_err() {
            AppError::Validation(msg) => {
                assert!(msg.contains("authorID"));
                assert!(msg.contains("email"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn payload_rejects_malformed_email() {
        let payload = AuthorPayload {
            author_id: Some("A1".to_string()),
            name: Some("Jane".to_string()),
            email: Some("not-an-email".to_string()),
        };
        assert!(matches!(
            payload.validated().unwrap_err(),
            AppError::Validation(_)
        ));
    }
}
