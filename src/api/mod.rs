//! API handlers for the Libris REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod issues;
pub mod openapi;
pub mod publishers;
pub mod readers;
pub mod staff;

use axum::Json;

use crate::error::{AppError, AppResult};

/// Build the legacy validation error listing every missing field.
/// `checks` pairs each wire field name with whether it is missing.
pub fn missing_fields(checks: &[(&str, bool)]) -> AppError {
    let missing: Vec<&str> = checks
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();
    AppError::Validation(format!("Missing required fields: {}", missing.join(", ")))
}

/// Unwrap an optional JSON body, reporting the legacy 401 when the body is
/// absent or unreadable.
pub fn require_body<T>(body: Option<Json<T>>) -> AppResult<T> {
    body.map(|Json(payload)| payload)
        .ok_or_else(|| AppError::Validation("Request body is missing".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_absent_field() {
        let err = missing_fields(&[("authorID", true), ("name", false), ("email", true)]);
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("authorID"));
                assert!(msg.contains("email"));
                assert!(!msg.contains("name"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn require_body_reports_missing_body() {
        let err = require_body::<serde_json::Value>(None).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Request body is missing"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn require_body_passes_payload_through() {
        let value = require_body(Some(Json(serde_json::json!({"name": "Jane"})))).unwrap();
        assert_eq!(value["name"], "Jane");
    }
}
