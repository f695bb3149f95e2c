//! HTTP API Tests
//!
//! Drive the assembled router end to end: request in, status + JSON body
//! out. Each test builds its own service over a fresh in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookstore::http::HttpServer;
use bookstore::service::BookService;
use bookstore::store::MemoryStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn test_router() -> Router {
    let service = BookService::new(Arc::new(MemoryStore::open()));
    HttpServer::new(service).router()
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// POST a valid book and return its assigned identifier.
async fn create_book(router: &Router, body: Value) -> String {
    let (status, json) = send(router, "POST", "/book", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    json["bookId"].as_str().unwrap().to_string()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let router = test_router();
    let (status, json) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_created_with_book_id() {
    let router = test_router();
    let (status, json) = send(
        &router,
        "POST",
        "/book",
        Some(json!({"title": "Dune", "author": "Frank Herbert"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "book created");
    assert!(json["bookId"].is_string());
}

#[tokio::test]
async fn test_create_missing_required_fields() {
    let router = test_router();

    let (status, json) = send(&router, "POST", "/book", Some(json!({"author": "X"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("title"));

    let (status, json) = send(&router, "POST", "/book", Some(json!({"title": "X"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("author"));
}

#[tokio::test]
async fn test_create_scalar_genres_rejected() {
    let router = test_router();
    let (status, json) = send(
        &router,
        "POST",
        "/book",
        Some(json!({"title": "A", "author": "B", "genres": "fiction"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("genres must be a sequence"));
}

#[tokio::test]
async fn test_create_rating_boundaries() {
    let router = test_router();

    for rating in [0.0, 5.0] {
        let (status, _) = send(
            &router,
            "POST",
            "/book",
            Some(json!({"title": "T", "author": "A", "rating": rating})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "rating={rating}");
    }

    for rating in [-0.5, 5.5] {
        let (status, _) = send(
            &router,
            "POST",
            "/book",
            Some(json!({"title": "T", "author": "A", "rating": rating})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "rating={rating}");
    }
}

#[tokio::test]
async fn test_create_year_rules() {
    let router = test_router();

    let (status, _) = send(
        &router,
        "POST",
        "/book",
        Some(json!({"title": "T", "author": "A", "year": 1800})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = send(
        &router,
        "POST",
        "/book",
        Some(json!({"title": "T", "author": "A", "year": 1799})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("year"));
}

#[tokio::test]
async fn test_create_error_lists_every_violation() {
    let router = test_router();
    let (status, json) = send(
        &router,
        "POST",
        "/book",
        Some(json!({"title": "T", "author": "A", "year": 1500, "rating": 9})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("year"));
    assert!(error.contains("rating"));
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let router = test_router();
    let id = create_book(
        &router,
        json!({
            "title": "The Dispossessed",
            "author": "Ursula K. Le Guin",
            "year": 1974,
            "available": true,
            "genres": ["sf"],
            "rating": 4.5,
            "stock": 2
        }),
    )
    .await;

    let (status, book) = send(&router, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["id"], id.as_str());
    assert_eq!(book["title"], "The Dispossessed");
    assert_eq!(book["author"], "Ursula K. Le Guin");
    assert_eq!(book["year"], 1974);
    assert_eq!(book["available"], true);
    assert_eq!(book["genres"], json!(["sf"]));
    assert_eq!(book["rating"], 4.5);
    assert_eq!(book["stock"], 2.0);
}

#[tokio::test]
async fn test_get_malformed_id_is_bad_request() {
    let router = test_router();
    let (status, json) = send(&router, "GET", "/books/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let router = test_router();
    let (status, json) = send(
        &router,
        "GET",
        "/books/00000000-0000-4000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["message"].is_string());
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_empty_collection_is_not_found() {
    let router = test_router();
    let (status, json) = send(&router, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_list_returns_all_records() {
    let router = test_router();
    create_book(&router, json!({"title": "A", "author": "X"})).await;
    create_book(&router, json!({"title": "B", "author": "Y"})).await;

    let (status, json) = send(&router, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_min_rating_sorted_descending() {
    let router = test_router();
    for rating in [3.0, 4.2, 4.8] {
        create_book(&router, json!({"title": "T", "author": "A", "rating": rating})).await;
    }

    let (status, json) = send(
        &router,
        "GET",
        "/books?minRating=4&sortBy=rating&order=desc",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ratings: Vec<f64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["rating"].as_f64().unwrap())
        .collect();
    assert_eq!(ratings, vec![4.8, 4.2]);
}

#[tokio::test]
async fn test_list_author_filter_is_exact() {
    let router = test_router();
    create_book(&router, json!({"title": "A", "author": "Borges"})).await;
    create_book(&router, json!({"title": "B", "author": "Bolaño"})).await;

    let (status, json) = send(&router, "GET", "/books?author=Borges", None).await;
    assert_eq!(status, StatusCode::OK);
    let books = json.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "A");
}

#[tokio::test]
async fn test_list_available_filter() {
    let router = test_router();
    create_book(&router, json!({"title": "A", "author": "X", "available": true})).await;
    create_book(&router, json!({"title": "B", "author": "X", "available": false})).await;

    let (_, json) = send(&router, "GET", "/books?available=true", None).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["title"], "A");

    // Any value other than the literal "true" means false.
    let (_, json) = send(&router, "GET", "/books?available=no", None).await;
    assert_eq!(json[0]["title"], "B");
}

#[tokio::test]
async fn test_list_genre_membership_filter() {
    let router = test_router();
    create_book(
        &router,
        json!({"title": "A", "author": "X", "genres": ["sf", "classic"]}),
    )
    .await;
    create_book(&router, json!({"title": "B", "author": "X", "genres": ["crime"]})).await;

    let (_, json) = send(&router, "GET", "/books?genres=classic", None).await;
    let books = json.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "A");
}

#[tokio::test]
async fn test_list_sort_by_year_ascending() {
    let router = test_router();
    for year in [1999, 1815, 1925] {
        create_book(&router, json!({"title": "T", "author": "A", "year": year})).await;
    }

    let (_, json) = send(&router, "GET", "/books?sortBy=year", None).await;
    let years: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![1815, 1925, 1999]);
}

#[tokio::test]
async fn test_list_unparsable_min_rating_is_ignored() {
    let router = test_router();
    create_book(&router, json!({"title": "A", "author": "X", "rating": 1.0})).await;

    let (status, json) = send(&router, "GET", "/books?minRating=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_book_surface_is_also_mounted_under_api() {
    let router = test_router();
    create_book(&router, json!({"title": "A", "author": "X"})).await;

    let (status, json) = send(&router, "GET", "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_merges_supplied_fields_only() {
    let router = test_router();
    let id = create_book(
        &router,
        json!({"title": "A", "author": "X", "rating": 3.0, "year": 1984}),
    )
    .await;

    let (status, json) = send(
        &router,
        "PUT",
        &format!("/book/{id}"),
        Some(json!({"rating": 4.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "book updated");

    let (_, book) = send(&router, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(book["rating"], 4.5);
    assert_eq!(book["year"], 1984);
    assert_eq!(book["title"], "A");
}

#[tokio::test]
async fn test_update_body_id_never_changes_the_identifier() {
    let router = test_router();
    let id = create_book(&router, json!({"title": "A", "author": "X"})).await;

    let (status, _) = send(
        &router,
        "PUT",
        &format!("/book/{id}"),
        Some(json!({"id": "impostor", "rating": 4.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, book) = send(&router, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["id"], id.as_str());
    assert_eq!(book["rating"], 4.5);
}

#[tokio::test]
async fn test_update_validation_failure() {
    let router = test_router();
    let id = create_book(&router, json!({"title": "A", "author": "X"})).await;

    let (status, json) = send(
        &router,
        "PUT",
        &format!("/book/{id}"),
        Some(json!({"year": 1200})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("year"));
}

#[tokio::test]
async fn test_update_malformed_and_unknown_ids() {
    let router = test_router();

    let (status, _) = send(
        &router,
        "PUT",
        "/book/not-an-id",
        Some(json!({"rating": 4.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &router,
        "PUT",
        "/book/00000000-0000-4000-8000-000000000000",
        Some(json!({"rating": 4.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_then_delete_again() {
    let router = test_router();
    let id = create_book(&router, json!({"title": "A", "author": "X"})).await;

    let (status, json) = send(&router, "DELETE", &format!("/book/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "book deleted");

    // Second delete of the same identifier: not found, not a fault.
    let (status, _) = send(&router, "DELETE", &format!("/book/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_malformed_id_is_bad_request() {
    let router = test_router();
    let (status, json) = send(&router, "DELETE", "/book/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}
