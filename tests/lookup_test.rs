use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use shelfmark::db;
use shelfmark::domain::DomainError;
use shelfmark::infrastructure::AppState;
use shelfmark::modules::integrations::OpenLibraryClient;
use shelfmark::server;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn details_response(isbn: &str) -> Value {
    json!({
        (format!("ISBN:{}", isbn)): {
            "bib_key": format!("ISBN:{}", isbn),
            "details": {
                "title": "Effective Java",
                "authors": [
                    { "key": "/authors/OL1A", "name": "Joshua Bloch" },
                    { "key": "/authors/OL0A", "name": "Unknown author" }
                ],
                "languages": [{ "key": "/languages/eng" }]
            }
        }
    })
}

#[tokio::test]
async fn test_fetch_book_info() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("bibkeys", "ISBN:9780134685991"))
        .and(query_param("jscmd", "details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_response("9780134685991")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OpenLibraryClient::new(mock_server.uri());
    let info = client
        .fetch_book_info("978-0-13-468599-1")
        .await
        .expect("Lookup failed");

    assert_eq!(info.isbn, "9780134685991");
    assert_eq!(info.title, "Effective Java");
    assert_eq!(info.author, "Joshua Bloch");
    assert_eq!(info.language.as_deref(), Some("eng"));
}

#[tokio::test]
async fn test_fetch_book_info_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = OpenLibraryClient::new(mock_server.uri());
    let result = client.fetch_book_info("0000000000").await;
    assert_eq!(result, Err(DomainError::NotFound));
}

#[tokio::test]
async fn test_fetch_book_info_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = OpenLibraryClient::new(mock_server.uri());
    let result = client.fetch_book_info("9780134685991").await;
    assert!(matches!(result, Err(DomainError::External(_))));
}

#[tokio::test]
async fn test_lookup_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("bibkeys", "ISBN:9780134685991"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_response("9780134685991")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("bibkeys", "ISBN:1111111111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let state = AppState::new(db).with_lookup(OpenLibraryClient::new(mock_server.uri()));
    let app = server::build_router(state, &[]);

    let req = Request::builder()
        .uri("/api/lookup/9780134685991")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["title"], "Effective Java");
    assert_eq!(body["author"], "Joshua Bloch");

    let req = Request::builder()
        .uri("/api/lookup/1111111111")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
