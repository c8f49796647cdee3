//! HTTP-level tests driving the full router over a temporary data file.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use game_store_api::{
    config::AppConfig, dao::game_store::JsonFileStore, routes, state::AppState,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("wwwroot");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), "<h1>Game Store</h1>").unwrap();

        let config = AppConfig::default()
            .with_data_file(dir.path().join("games.json"))
            .with_static_dir(static_dir);
        let state = AppState::new(Arc::new(JsonFileStore::new(config.data_file())));
        let router = routes::router(state, &config);

        Self { router, dir }
    }

    fn data_file(&self) -> std::path::PathBuf {
        self.dir.path().join("games.json")
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

async fn json_body(res: Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_list_update_delete_round() {
    let app = TestApp::new();

    let res = app
        .send(Method::POST, "/api/games", Some(json!({ "name": "Chess" })))
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()[header::LOCATION], "/api/games/1");
    assert_eq!(json_body(res).await["id"], 1);

    let res = app
        .send(
            Method::POST,
            "/api/games",
            Some(json!({
                "id": 40,
                "name": "Go",
                "genre": "Board",
                "price": 12.5,
                "releaseDate": "2001-02-03T00:00:00",
                "rating": 4.9
            })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let go = json_body(res).await;
    assert_eq!(go["id"], 2);
    assert_eq!(go["releaseDate"], "2001-02-03T00:00:00Z");
    assert_eq!(go["price"], 12.5);

    let res = app.send(Method::GET, "/api/games", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let list = json_body(res).await;
    let names = list
        .as_array()
        .unwrap()
        .iter()
        .map(|game| game["name"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Chess", "Go"]);

    let res = app
        .send(
            Method::PUT,
            "/api/games/2",
            Some(json!({ "id": 99, "name": "Weiqi", "platform": "Board" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = json_body(res).await;
    assert_eq!(updated["id"], 2);
    assert_eq!(updated["name"], "Weiqi");
    assert_eq!(updated["genre"], "");

    let res = app.send(Method::GET, "/api/games/2", None).await;
    assert_eq!(json_body(res).await["platform"], "Board");

    let res = app.send(Method::DELETE, "/api/games/1", None).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.send(Method::DELETE, "/api/games/1", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(res).await["message"],
        "Game with ID 1 not found."
    );

    let persisted: Value =
        serde_json::from_str(&std::fs::read_to_string(app.data_file()).unwrap()).unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 1);
    assert_eq!(persisted[0]["name"], "Weiqi");
}

#[tokio::test]
async fn unknown_ids_return_not_found() {
    let app = TestApp::new();

    let res = app.send(Method::GET, "/api/games/5", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .send(Method::PUT, "/api/games/5", Some(json!({ "name": "Go" })))
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(!app.data_file().exists());
}

#[tokio::test]
async fn invalid_requests_are_rejected() {
    let app = TestApp::new();

    let res = app
        .send(Method::POST, "/api/games", Some(json!({ "genre": "Board" })))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .send(Method::POST, "/api/games", Some(json!({ "name": "Go", "rating": "high" })))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.send(Method::GET, "/api/games/abc", None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(res).await["message"].is_string());

    let res = app.send(Method::DELETE, "/api/games/1.5", None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(res).await["message"].is_string());

    assert!(!app.data_file().exists());
}

#[tokio::test]
async fn malformed_data_file_is_an_internal_error() {
    let app = TestApp::new();
    std::fs::write(app.data_file(), "{ broken").unwrap();

    let res = app.send(Method::GET, "/api/games", None).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let message = json_body(res).await["message"].as_str().unwrap().to_string();
    assert!(!message.contains("games.json"), "message leaks path: {message}");
}

#[tokio::test]
async fn health_reports_endpoints() {
    let app = TestApp::new();

    let res = app.send(Method::GET, "/health", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["status"], "Healthy");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn root_redirects_to_static_index() {
    let app = TestApp::new();

    let res = app.send(Method::GET, "/", None).await;
    assert!(res.status().is_redirection());
    assert_eq!(res.headers()[header::LOCATION], "/index.html");

    let res = app.send(Method::GET, "/index.html", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>Game Store</h1>");
}

#[tokio::test]
async fn openapi_document_lists_game_routes() {
    let app = TestApp::new();

    let res = app.send(Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let doc = json_body(res).await;
    assert!(doc["paths"]["/api/games"].is_object());
    assert!(doc["paths"]["/api/games/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn prices_keep_every_digit() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/games")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Chess","price":19.999999999999999999}"#))
        .unwrap();

    let res = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains(r#""price":19.999999999999999999"#), "{body}");

    let persisted = std::fs::read_to_string(app.data_file()).unwrap();
    assert!(persisted.contains("19.999999999999999999"), "{persisted}");
}
