//! API integration tests
//!
//! These run against a live server with a reachable MongoDB instance:
//! start the server, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000";

/// Create a book and return its identifier
async fn create_book(client: &Client, body: Value) -> String {
    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["acknowledged"], true);
    body["insertedId"]
        .as_str()
        .expect("No insertedId in response")
        .to_string()
}

/// Create a user with a unique email and return the email
async fn create_user(client: &Client, tag: &str) -> String {
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let email = format!("{}-{}@example.com", tag, nonce);
    let response = client
        .post(format!("{}/user", BASE_URL))
        .json(&json!({ "email": email }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    email
}

async fn fetch_user(client: &Client, email: &str) -> Value {
    let response = client
        .get(format!("{}/user/{}", BASE_URL, email))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_root_greeting() {
    let client = Client::new();

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "Hello World!");
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
async fn test_create_then_fetch_book() {
    let client = Client::new();

    let id = create_book(
        &client,
        json!({ "title": "Dune", "author": "Frank Herbert", "genre": "science fiction" }),
    )
    .await;

    let response = client
        .get(format!("{}/book/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["_id"], id);
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["author"], "Frank Herbert");
    // Passthrough field survives the round trip
    assert_eq!(body["genre"], "science fiction");
}

#[tokio::test]
#[ignore]
async fn test_delete_then_fetch_book() {
    let client = Client::new();

    let id = create_book(&client, json!({ "title": "Disposable" })).await;

    let response = client
        .delete(format!("{}/book/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deletedCount"], 1);

    let response = client
        .get(format!("{}/book/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_null());
}

#[tokio::test]
#[ignore]
async fn test_list_books_newest_first() {
    let client = Client::new();

    let first = create_book(&client, json!({ "title": "Older" })).await;
    let second = create_book(&client, json!({ "title": "Newer" })).await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], true);

    let data = body["data"].as_array().expect("data is not an array");
    let ids: Vec<&str> = data.iter().filter_map(|b| b["_id"].as_str()).collect();

    let pos_first = ids.iter().position(|id| *id == first).expect("first book missing");
    let pos_second = ids.iter().position(|id| *id == second).expect("second book missing");
    assert!(pos_second < pos_first, "newer book should come first");
}

#[tokio::test]
#[ignore]
async fn test_update_book_merges_fields() {
    let client = Client::new();

    let id = create_book(&client, json!({ "title": "Draft", "author": "Anon" })).await;

    let response = client
        .patch(format!("{}/book/{}", BASE_URL, id))
        .json(&json!({ "title": "Final" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book updated successfully");

    let response = client
        .get(format!("{}/book/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Final");
    assert_eq!(body["author"], "Anon");
}

#[tokio::test]
#[ignore]
async fn test_update_missing_book_is_404() {
    let client = Client::new();

    let response = client
        .patch(format!("{}/book/{}", BASE_URL, "ffffffffffffffffffffffff"))
        .json(&json!({ "title": "Ghost" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_comment_append_and_fetch() {
    let client = Client::new();

    let id = create_book(&client, json!({ "title": "Commented" })).await;

    let response = client
        .post(format!("{}/comment/{}", BASE_URL, id))
        .json(&json!({ "comment": "first!" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/comment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let comments = body["comments"].as_array().expect("comments missing");
    assert_eq!(comments.last().unwrap(), "first!");
}

#[tokio::test]
#[ignore]
async fn test_comment_on_missing_book_is_an_error() {
    let client = Client::new();

    let response = client
        .post(format!("{}/comment/{}", BASE_URL, "ffffffffffffffffffffffff"))
        .json(&json!({ "comment": "into the void" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_malformed_book_id_is_400() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book/{}", BASE_URL, "not-an-id"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_wishlist_append_for_known_email() {
    let client = Client::new();
    let email = create_user(&client, "wishlist").await;

    let response = client
        .post(format!("{}/wishlist", BASE_URL))
        .json(&json!({ "email": email, "bookTitle": "Dune" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body = fetch_user(&client, &email).await;
    assert_eq!(body["status"], true);
    let wishlist = body["data"]["wishlist"].as_array().expect("wishlist missing");
    assert_eq!(wishlist.last().unwrap(), "Dune");
}

#[tokio::test]
#[ignore]
async fn test_wishlist_append_for_unknown_email_is_404() {
    let client = Client::new();

    let response = client
        .post(format!("{}/wishlist", BASE_URL))
        .json(&json!({ "email": "nobody@example.com", "bookTitle": "Dune" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_user_lookup_unknown_email_has_false_flag() {
    let client = Client::new();

    let body = fetch_user(&client, "missing@example.com").await;
    assert_eq!(body["status"], false);
    assert!(body.get("data").is_none());
}

/// The appends are atomic in the store, so concurrent requests against the
/// same email must both land; neither overwrites the other.
#[tokio::test]
#[ignore]
async fn test_concurrent_reading_list_appends_both_survive() {
    let client = Client::new();
    let email = create_user(&client, "concurrent").await;

    let (a, b) = tokio::join!(
        client
            .post(format!("{}/myList", BASE_URL))
            .json(&json!({ "email": email, "bookTitle": "Dune", "status": "reading" }))
            .send(),
        client
            .post(format!("{}/myList", BASE_URL))
            .json(&json!({ "email": email, "bookTitle": "Hyperion", "status": "read-soon" }))
            .send(),
    );

    assert!(a.expect("request a failed").status().is_success());
    assert!(b.expect("request b failed").status().is_success());

    let body = fetch_user(&client, &email).await;
    let list = body["data"]["myList"].as_array().expect("myList missing");
    assert_eq!(list.len(), 2, "both concurrent appends must survive");
}

#[tokio::test]
#[ignore]
async fn test_finish_reading_entry_only_touches_target() {
    let client = Client::new();
    let email = create_user(&client, "finish").await;

    for (title, status) in [("Dune", "reading"), ("Hyperion", "read-soon")] {
        let response = client
            .post(format!("{}/myList", BASE_URL))
            .json(&json!({ "email": email, "bookTitle": title, "status": status }))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());
    }

    let body = fetch_user(&client, &email).await;
    let list = body["data"]["myList"].as_array().expect("myList missing");
    let target_id = list[0]["_id"].as_str().expect("entry id missing").to_string();

    let response = client
        .patch(format!("{}/myList/{}/{}", BASE_URL, email, target_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book status updated");

    let body = fetch_user(&client, &email).await;
    let list = body["data"]["myList"].as_array().expect("myList missing");
    let target = list
        .iter()
        .find(|e| e["_id"] == target_id.as_str())
        .expect("target entry missing");
    let other = list
        .iter()
        .find(|e| e["_id"] != target_id.as_str())
        .expect("other entry missing");

    assert_eq!(target["status"], "finished reading");
    assert_eq!(other["status"], "read-soon");
    assert_eq!(target["title"], "Dune");
}

#[tokio::test]
#[ignore]
async fn test_wishlist_rejects_invalid_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/wishlist", BASE_URL))
        .json(&json!({ "email": "not-an-email", "bookTitle": "Dune" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
