//! API integration tests against a running server and MongoDB

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000";

/// Create a book with a unique name and return that name
async fn create_book(client: &Client, suffix: &str) -> String {
    let name = format!("Dune-{}-{}", suffix, std::process::id());
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "name": name,
            "author": "Herbert",
            "publishedDate": "1965"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    name
}

async fn get_json(client: &Client, url: String) -> (StatusCode, Value) {
    let response = client.get(url).send().await.expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.expect("Failed to parse response");
    (status, body)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_create_and_find_book() {
    let client = Client::new();
    let name = create_book(&client, "find").await;

    let (status, body) = get_json(&client, format!("{}/books/{}", BASE_URL, name)).await;
    assert_eq!(status, StatusCode::CREATED);

    let data = body["data"].as_array().expect("data is an array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["author"], "Herbert");
    assert_eq!(data[0]["publishedDate"], "1965");
    assert!(data[0]["_id"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_create_book_missing_field() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "name": "Incomplete" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["errors"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_book() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/000000000000000000000000", BASE_URL))
        .json(&json!({ "author": "Nobody" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["matchedCount"], 0);
}

#[tokio::test]
#[ignore]
async fn test_delete_book() {
    let client = Client::new();
    let name = create_book(&client, "delete").await;

    let (_, body) = get_json(&client, format!("{}/books/{}", BASE_URL, name)).await;
    let id = body["data"][0]["_id"].as_str().expect("id").to_string();

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, body) = get_json(&client, format!("{}/books/{}", BASE_URL, name)).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_create_user_hashes_password() {
    let client = Client::new();
    let name = format!("alice-{}", std::process::id());

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "name": name, "password": "secret1", "role": "admin" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, body) = get_json(&client, format!("{}/users/{}", BASE_URL, name)).await;
    let password = body["data"][0]["password"].as_str().expect("password");
    assert_ne!(password, "secret1");
    assert_eq!(password.len(), 64);
}

#[tokio::test]
#[ignore]
async fn test_malformed_id() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/users/not-an-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
