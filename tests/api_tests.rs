//! API integration tests
//!
//! These tests exercise a running server. Run with:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:3000/api";

/// Unique suffix so creation tests can be re-run against the same database
fn unique() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

async fn create_author(client: &Client, author_id: &str, name: &str, email: &str) -> Value {
    let response = client
        .post(format!("{}/author", BASE_URL))
        .json(&json!({ "authorID": author_id, "name": name, "email": email }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn create_publisher(client: &Client, publisher_id: &str, name: &str) -> Value {
    let response = client
        .post(format!("{}/publisher", BASE_URL))
        .json(&json!({ "publisherID": publisher_id, "name": name, "yearOfPublication": 1965 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn create_book(client: &Client, title: &str, author_id: &str, publisher_id: &str, available: bool) -> Value {
    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "bookID": format!("B{}", unique()),
            "title": title,
            "author": author_id,
            "publisher": publisher_id,
            "edition": "1st",
            "price": 25.50,
            "availability": available,
            "stock": 3
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn create_reader(client: &Client, name: &str, email: &str, phone: &str) -> Value {
    let response = client
        .post(format!("{}/reader", BASE_URL))
        .json(&json!({
            "readerID": format!("R{}", unique()),
            "name": name,
            "email": email,
            "phone": phone,
            "password": "reading-glasses",
            "address": "12 Shelf Lane"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_author_then_duplicate_conflicts() {
    let client = Client::new();
    let email = format!("jane{}@x.com", unique());
    let payload = json!({ "authorID": "A1", "name": "Jane", "email": email });

    let response = client
        .post(format!("{}/author", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["authorID"], "A1");
    assert_eq!(body["email"], email.as_str());

    // Identical repeat must conflict
    let response = client
        .post(format!("{}/author", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ConflictError");
}

#[tokio::test]
#[ignore]
async fn test_fetch_author_round_trip() {
    let client = Client::new();
    let email = format!("ursula{}@x.com", unique());
    let created = create_author(&client, "A2", "Ursula", &email).await;

    let response = client
        .get(format!("{}/author", BASE_URL))
        .json(&json!({ "authorID": "A2", "name": "Ursula", "email": email }))
        .send()
        .await
        .expect("Failed to send request");
    // Found responses use 201, matching the legacy API
    assert_eq!(response.status(), 201);

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], "Ursula");
}

#[tokio::test]
#[ignore]
async fn test_fetch_author_validates_write_shape() {
    let client = Client::new();

    // Reads validate the full write shape; a lone email is rejected
    let response = client
        .get(format!("{}/author", BASE_URL))
        .json(&json!({ "email": "someone@x.com" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ValidationError");
    let message = body["message"].as_str().expect("No message");
    assert!(message.contains("authorID"));
    assert!(message.contains("name"));
}

#[tokio::test]
#[ignore]
async fn test_fetch_unknown_author_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/author", BASE_URL))
        .json(&json!({
            "authorID": "A0",
            "name": "Nobody",
            "email": format!("nobody{}@x.com", unique())
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NotFoundError");
}

#[tokio::test]
#[ignore]
async fn test_duplicate_staff_id_conflicts() {
    let client = Client::new();
    let staff_id = format!("S{}", unique());
    let payload = json!({ "staffID": staff_id, "name": "Morgan" });

    let response = client
        .post(format!("{}/staff", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/staff", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_fetch_unavailable_book_is_withheld() {
    let client = Client::new();
    let n = unique();
    let author = create_author(&client, &format!("A{}", n), "Frank", &format!("frank{}@x.com", n)).await;
    let publisher = create_publisher(&client, &format!("P{}", n), &format!("Chilton {}", n)).await;

    let title = format!("Archive Copy {}", n);
    create_book(
        &client,
        &title,
        author["authorID"].as_str().expect("No author ID"),
        publisher["publisherID"].as_str().expect("No publisher ID"),
        false,
    )
    .await;

    let response = client
        .get(format!("{}/book", BASE_URL))
        .json(&json!({
            "bookID": "B0",
            "title": title,
            "author": author["authorID"],
            "publisher": publisher["publisherID"],
            "edition": "1st",
            "price": 25.50,
            "availability": false,
            "stock": 0
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "UnavailableError");
}

#[tokio::test]
#[ignore]
async fn test_issue_then_return_round_trip() {
    let client = Client::new();
    let n = unique();
    let author = create_author(&client, &format!("A{}", n), "Herbert", &format!("herbert{}@x.com", n)).await;
    let publisher = create_publisher(&client, &format!("P{}", n), &format!("Ace {}", n)).await;

    let title = format!("Dune {}", n);
    create_book(
        &client,
        &title,
        author["authorID"].as_str().expect("No author ID"),
        publisher["publisherID"].as_str().expect("No publisher ID"),
        true,
    )
    .await;

    let reader_name = format!("Bob {}", n);
    create_reader(
        &client,
        &reader_name,
        &format!("bob{}@x.com", n),
        &format!("+1555{}", n % 10_000_000),
    )
    .await;

    // Issue
    let response = client
        .post(format!("{}/bookissue", BASE_URL))
        .json(&json!({ "reader_name": reader_name, "book_name": title }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let issue: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(issue["status"], "issued");
    let issue_id = issue["id"].as_i64().expect("No issue ID");

    // Return
    let response = client
        .patch(format!("{}/bookissue", BASE_URL))
        .json(&json!({ "reader_name": reader_name, "book_name": title }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let returned: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(returned["id"].as_i64(), Some(issue_id));
    assert_eq!(returned["status"], "returned");

    let issued_at: chrono::DateTime<chrono::Utc> = issue["issueDate"]
        .as_str()
        .expect("No issue date")
        .parse()
        .expect("Bad issue date");
    let returned_at: chrono::DateTime<chrono::Utc> = returned["returnDate"]
        .as_str()
        .expect("No return date")
        .parse()
        .expect("Bad return date");
    assert!(returned_at > issued_at);

    // The transition is one-way; a second return finds no open issue
    let response = client
        .patch(format!("{}/bookissue", BASE_URL))
        .json(&json!({ "reader_name": reader_name, "book_name": title }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_return_targets_exact_issue_by_id() {
    let client = Client::new();
    let n = unique();
    let author = create_author(&client, &format!("A{}", n), "Clarke", &format!("clarke{}@x.com", n)).await;
    let publisher = create_publisher(&client, &format!("P{}", n), &format!("Gollancz {}", n)).await;

    let title = format!("Rendezvous {}", n);
    create_book(
        &client,
        &title,
        author["authorID"].as_str().expect("No author ID"),
        publisher["publisherID"].as_str().expect("No publisher ID"),
        true,
    )
    .await;

    let reader_name = format!("Rama {}", n);
    create_reader(
        &client,
        &reader_name,
        &format!("rama{}@x.com", n),
        &format!("+1666{}", n % 10_000_000),
    )
    .await;

    let response = client
        .post(format!("{}/bookissue", BASE_URL))
        .json(&json!({ "reader_name": reader_name, "book_name": title }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let issue: Value = response.json().await.expect("Failed to parse response");

    let response = client
        .patch(format!("{}/bookissue", BASE_URL))
        .json(&json!({ "issue_id": issue["id"] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let returned: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(returned["id"], issue["id"]);
    assert_eq!(returned["status"], "returned");
}

#[tokio::test]
#[ignore]
async fn test_issue_with_unknown_reader_and_book_is_404() {
    let client = Client::new();
    let n = unique();

    let response = client
        .post(format!("{}/bookissue", BASE_URL))
        .json(&json!({
            "reader_name": format!("Nobody {}", n),
            "book_name": format!("No Such Book {}", n)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NotFoundError");
}

#[tokio::test]
#[ignore]
async fn test_return_with_no_open_issue_is_404() {
    let client = Client::new();
    let n = unique();

    let response = client
        .patch(format!("{}/bookissue", BASE_URL))
        .json(&json!({
            "reader_name": format!("Ghost {}", n),
            "book_name": format!("Unissued {}", n)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}
