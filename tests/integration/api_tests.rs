//! API integration tests
//!
//! These run against a live server, e.g. `RUN_MODE=development cargo run`
//! with a MongoDB reachable at `MONGO_URL`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

async fn get_json(client: &Client, path: &str) -> Value {
    client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
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
async fn test_ready() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();
    let body = get_json(&client, "/").await;
    assert!(body["getAllBooks"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_unknown_isbn_reports_error() {
    let client = Client::new();

    let response = client
        .get(format!("{}/is/does-not-exist-0000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let isbn = "integration-test-isbn";

    // Create book
    let response = client
        .post(format!("{}/book/new", BASE_URL))
        .json(&json!({
            "newBook": {
                "ISBN": isbn,
                "title": "Integration Testing",
                "language": "en",
                "authors": [1],
                "category": ["tech"]
            }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body = get_json(&client, &format!("/is/{}", isbn)).await;
    assert_eq!(body["book"]["title"], "Integration Testing");

    // Update title
    let response = client
        .put(format!("{}/book/update/{}", BASE_URL, isbn))
        .json(&json!({ "bookTitle": "Integration Testing, 2nd ed." }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body = get_json(&client, &format!("/is/{}", isbn)).await;
    assert_eq!(body["book"]["title"], "Integration Testing, 2nd ed.");
    assert_eq!(body["book"]["ISBN"], isbn);

    // Add author
    let response = client
        .put(format!("{}/book/author/update/{}", BASE_URL, isbn))
        .json(&json!({ "newAuthor": 2 }))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["books"]["authors"], json!([1, 2]));

    // Delete book
    let response = client
        .delete(format!("{}/book/delete/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body = get_json(&client, &format!("/is/{}", isbn)).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_list_authors_and_publications() {
    let client = Client::new();

    let authors = get_json(&client, "/author").await;
    assert!(authors.is_array());

    let publications = get_json(&client, "/publications").await;
    assert!(publications.is_array());
}
