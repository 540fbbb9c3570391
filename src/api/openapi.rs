//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health, issues, publishers, readers, staff};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "1.0.0",
        description = "Library Records Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::create_author,
        authors::fetch_author,
        // Publishers
        publishers::create_publisher,
        publishers::fetch_publisher,
        // Staff
        staff::create_staff,
        staff::fetch_staff,
        // Books
        books::create_book,
        books::fetch_book,
        // Readers
        readers::create_reader,
        readers::fetch_reader,
        // Issues
        issues::create_issue,
        issues::return_issue,
    ),
    components(
        schemas(
            // Authors
            crate::models::author::Author,
            authors::AuthorPayload,
            // Publishers
            crate::models::publisher::Publisher,
            publishers::PublisherPayload,
            // Staff
            crate::models::staff::Staff,
            staff::StaffPayload,
            // Books
            crate::models::book::Book,
            books::BookPayload,
            // Readers
            crate::models::reader::Reader,
            readers::ReaderPayload,
            // Issues
            crate::models::issue::BookIssue,
            crate::models::issue::IssueStatus,
            issues::IssuePayload,
            issues::ReturnPayload,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author records"),
        (name = "publishers", description = "Publisher records"),
        (name = "staff", description = "Staff records"),
        (name = "books", description = "Book records"),
        (name = "readers", description = "Reader records"),
        (name = "issues", description = "Book issue workflow")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
