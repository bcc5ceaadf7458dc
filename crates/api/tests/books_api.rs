use reqwest::StatusCode;
use serde_json::{json, Value};

use api::AppState;
use db::pool::create_memory_pool;
use db::DbPool;

struct TestServer {
    base_url: String,
    pool: DbPool,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod over a fresh in-memory database, on an ephemeral port.
        let pool = create_memory_pool().await.expect("in-memory pool");
        let app = api::router(AppState::new(pool.clone()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, pool, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create(client: &reqwest::Client, server: &TestServer, title: &str, author: &str) -> Value {
    let res = client
        .post(server.url("/book"))
        .json(&json!({ "title": title, "author": author }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn post_book_returns_created_with_id() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body = create(&client, &server, "Java Spring", "Kim").await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Java Spring");
    assert_eq!(body["author"], "Kim");
}

#[tokio::test]
async fn post_book_ignores_client_supplied_id() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/book"))
        .json(&json!({ "id": 77, "title": "t", "author": "a" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn get_all_lists_books_in_insertion_order() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    for (title, author) in [
        ("Java Spring", "Kim"),
        ("Clean Code", "Robert C. Martin"),
        ("Norwegian Wood", "Haruki Murakami"),
        ("Lowest", "Sakuna Mana"),
    ] {
        create(&client, &server, title, author).await;
    }

    let res = client.get(server.url("/book")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let books = body.as_array().expect("array body");
    assert_eq!(books.len(), 4);
    assert_eq!(books[3]["title"], "Lowest");
}

#[tokio::test]
async fn get_by_id_returns_book_or_404() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let created = create(&client, &server, "Secret", "Keigo Higashino").await;
    let id = created["id"].as_i64().unwrap();

    let res = client.get(server.url(&format!("/book/{id}"))).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, created);

    let res = client.get(server.url("/book/999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn put_updates_fields_and_keeps_id() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    for title in ["a", "b", "c", "d"] {
        create(&client, &server, title, "someone").await;
    }

    let res = client
        .put(server.url("/book/4"))
        .json(&json!({ "title": "1Q84", "author": "Haruki Murakami" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], 4);
    assert_eq!(body["title"], "1Q84");
    assert_eq!(body["author"], "Haruki Murakami");
}

#[tokio::test]
async fn put_missing_id_is_404() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(server.url("/book/1"))
        .json(&json!({ "title": "t", "author": "a" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_ok_and_removes_book() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create(&client, &server, "t", "a").await;

    let res = client.delete(server.url("/book/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "ok");

    let res = client.get(server.url("/book/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(server.url("/book/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/book"))
        .header("content-type", "application/json")
        .body("{\"title\": ")
        .send()
        .await
        .unwrap();

    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn health_reports_book_count() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create(&client, &server, "t", "a").await;

    let res = client.get(server.url("/health")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok", "books": 1 }));
}

#[tokio::test]
async fn health_is_500_when_database_is_unavailable() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    server.pool.close().await;

    let res = client.get(server.url("/health")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "internal_error");
}
