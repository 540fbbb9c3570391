//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{book::CreateBook, Book},
};

use super::{missing_fields, require_body};

/// Book create/fetch payload. `author` and `publisher` carry the
/// application-level IDs of the referenced records.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookPayload {
    #[serde(rename = "bookID")]
    pub book_id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub edition: Option<String>,
    pub price: Option<Decimal>,
    pub availability: Option<bool>,
    pub stock: Option<i32>,
}

impl BookPayload {
    fn validated(self) -> AppResult<CreateBook> {
        match (
            self.book_id,
            self.title,
            self.author,
            self.publisher,
            self.edition,
            self.price,
            self.availability,
            self.stock,
        ) {
            (
                Some(book_id),
                Some(title),
                Some(author),
                Some(publisher),
                Some(edition),
                Some(price),
                Some(available),
                Some(stock),
            ) => Ok(CreateBook {
                book_id,
                title,
                author,
                publisher,
                edition,
                price,
                available,
                stock,
            }),
            (book_id, title, author, publisher, edition, price, availability, stock) => {
                Err(missing_fields(&[
                    ("bookID", book_id.is_none()),
                    ("title", title.is_none()),
                    ("author", author.is_none()),
                    ("publisher", publisher.is_none()),
                    ("edition", edition.is_none()),
                    ("price", price.is_none()),
                    ("availability", availability.is_none()),
                    ("stock", stock.is_none()),
                ]))
            }
        }
    }
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Book with this title already exists", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Referenced author or publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    payload: Option<Json<BookPayload>>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = require_body(payload)?.validated()?;
    let created = state.services.catalog.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch a book by title, with the full shape in the request body. Books
/// flagged unavailable are withheld even though the record exists.
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book found", body = Book),
        (status = 401, description = "Missing required fields or book unavailable", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn fetch_book(
    State(state): State<crate::AppState>,
    payload: Option<Json<BookPayload>>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = require_body(payload)?.validated()?;
    let found = state.services.catalog.get_book(&book.title).await?;
    Ok((StatusCode::CREATED, Json(found)))
}
