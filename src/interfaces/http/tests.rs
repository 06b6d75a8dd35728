//! End-to-end tests: full router over an in-memory database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::infrastructure::database::migrator::Migrator;
use crate::{create_api_router, init_database, DatabaseConfig};

const ABSENT_ID: &str = "573a1390f29313caabcd4135";

async fn app() -> Router {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    create_api_router(db)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn create_users(app: &Router, count: usize) -> Vec<String> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let (status, user) = send(
            app,
            "POST",
            "/api/users",
            Some(json!({
                "name": format!("User {i}"),
                "email": format!("user{i}@example.com"),
                "password": "secret",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{user}");
        ids.push(user["_id"].as_str().unwrap().to_string());
    }
    ids
}

fn titles(page: &Value, key: &str) -> Vec<String> {
    page[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect()
}

// ── Pagination ─────────────────────────────────────────────────

#[tokio::test]
async fn list_uses_default_page_and_limit() {
    let app = app().await;
    create_users(&app, 20).await;

    let (status, body) = send(&app, "GET", "/api/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().unwrap().len(), 10);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["totalUsers"], 20);
}

#[tokio::test]
async fn list_returns_requested_window_in_creation_order() {
    let app = app().await;
    for i in 1..=15 {
        let (status, _) = send(
            &app,
            "POST",
            "/api/movies",
            Some(json!({ "title": format!("Movie {i}") })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/api/movies?page=2&limit=5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentPage"], 2);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["totalMovies"], 15);
    assert_eq!(
        titles(&body, "movies"),
        vec!["Movie 6", "Movie 7", "Movie 8", "Movie 9", "Movie 10"]
    );
}

#[tokio::test]
async fn unparsable_page_falls_back_to_first_page() {
    let app = app().await;
    create_users(&app, 3).await;

    let (status, body) = send(&app, "GET", "/api/users?page=abc&limit=2.9", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["users"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let app = app().await;
    create_users(&app, 3).await;

    let (status, body) = send(&app, "GET", "/api/users?page=5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"], json!([]));
    assert_eq!(body["currentPage"], 5);
    assert_eq!(body["totalUsers"], 3);
}

#[tokio::test]
async fn negative_page_reads_from_start() {
    let app = app().await;
    create_users(&app, 3).await;

    let (status, body) = send(&app, "GET", "/api/users?page=-1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentPage"], -1);
    assert_eq!(body["users"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn negative_limit_caps_window_by_magnitude() {
    let app = app().await;
    create_users(&app, 7).await;

    let (status, body) = send(&app, "GET", "/api/users?limit=-5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().unwrap().len(), 5);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["totalPages"], -1);
    assert_eq!(body["totalUsers"], 7);

    let (status, body) = send(&app, "GET", "/api/users?limit=-10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().unwrap().len(), 7);
    assert_eq!(body["totalPages"], 0);
}

#[tokio::test]
async fn empty_collection_has_zero_pages() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/api/embedded-movies", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "embeddedMovies": [],
            "currentPage": 1,
            "totalPages": 0,
            "totalEmbeddedMovies": 0,
        })
    );
}

// ── Outcome mapping ────────────────────────────────────────────

#[tokio::test]
async fn absent_record_is_404_for_every_operation() {
    let app = app().await;
    let uri = format!("/api/users/{ABSENT_ID}");

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "User not found" }));

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    for _ in 0..2 {
        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User not found");
    }
}

#[tokio::test]
async fn malformed_id_is_500_on_read_and_delete_but_400_on_update() {
    let app = app().await;
    let message =
        "Cast to ObjectId failed for value \"not-an-id\" at path \"_id\" for model \"Theater\"";

    let (status, body) = send(&app, "GET", "/api/theaters/not-an-id", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], message);

    let (status, body) = send(&app, "DELETE", "/api/theaters/not-an-id", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], message);

    let (status, body) = send(
        &app,
        "PUT",
        "/api/theaters/not-an-id",
        Some(json!({ "theaterId": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], message);
}

#[tokio::test]
async fn create_without_required_field_is_400() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({ "name": "Ned Stark", "password": "winter" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn duplicate_email_is_400_with_store_message() {
    let app = app().await;
    let user = json!({ "name": "A", "email": "a@example.com", "password": "p" });

    let (status, _) = send(&app, "POST", "/api/users", Some(user.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/api/users", Some(user)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("UNIQUE"));
}

#[tokio::test]
async fn validation_failure_on_update_is_400() {
    let app = app().await;
    let id = create_users(&app, 1).await.remove(0);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/users/{id}"),
        Some(json!({ "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Validation failed: email: must be a valid email address"
    );
}

// ── Record lifecycle ───────────────────────────────────────────

#[tokio::test]
async fn user_lifecycle() {
    let app = app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({ "name": "Ned Stark", "email": "ned@example.com", "password": "winter" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["_id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 24);
    assert_eq!(created["name"], "Ned Stark");
    assert!(created.get("password").is_none());

    let uri = format!("/api/users/{id}");

    let (status, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(&app, "PUT", &uri, Some(json!({ "name": "Eddard Stark" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Eddard Stark");
    assert_eq!(updated["email"], "ned@example.com");

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User deleted successfully" }));

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_update_returns_record_unchanged() {
    let app = app().await;
    let id = create_users(&app, 1).await.remove(0);
    let uri = format!("/api/users/{id}");

    let (_, before) = send(&app, "GET", &uri, None).await;
    let (status, after) = send(&app, "PUT", &uri, Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn theater_round_trips_nested_location() {
    let app = app().await;
    let location = json!({
        "address": {
            "street1": "340 W Market",
            "city": "Bloomington",
            "state": "MN",
            "zipcode": "55425"
        },
        "geo": { "type": "Point", "coordinates": [-93.24565, 44.85466] }
    });

    let (status, created) = send(
        &app,
        "POST",
        "/api/theaters",
        Some(json!({ "theaterId": 1000, "location": location })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["theaterId"], 1000);
    assert_eq!(created["location"]["address"]["city"], "Bloomington");
    assert_eq!(created["location"]["geo"]["type"], "Point");
    assert_eq!(created["location"]["geo"]["coordinates"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "GET", "/api/theaters", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalTheaters"], 1);
}

#[tokio::test]
async fn comment_requires_well_formed_movie_id() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/comments",
        Some(json!({
            "name": "Mercedes Tyler",
            "email": "mercedes_tyler@fakegmail.com",
            "movie_id": "nope",
            "text": "Eius veritatis vero facilis quaerat fuga temporibus."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("movie_id"));

    let (status, created) = send(
        &app,
        "POST",
        "/api/comments",
        Some(json!({
            "name": "Mercedes Tyler",
            "email": "mercedes_tyler@fakegmail.com",
            "movie_id": ABSENT_ID,
            "text": "Eius veritatis vero facilis quaerat fuga temporibus."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["movie_id"], ABSENT_ID);
    assert!(created["date"].is_string());
}

#[tokio::test]
async fn embedded_movie_keeps_plot_embedding() {
    let app = app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/embedded-movies",
        Some(json!({
            "title": "The Great Train Robbery",
            "year": 1903,
            "genres": ["Short", "Western"],
            "type": "movie",
            "plot_embedding": [0.25, -0.5, 0.125]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["type"], "movie");
    assert_eq!(created["genres"], json!(["Short", "Western"]));
    assert_eq!(created["plot_embedding"], json!([0.25, -0.5, 0.125]));

    let id = created["_id"].as_str().unwrap();
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/embedded-movies/{id}"),
        Some(json!({ "runtime": 11 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["runtime"], 11);
    assert_eq!(updated["title"], "The Great Train Robbery");
    assert_eq!(updated["plot_embedding"], json!([0.25, -0.5, 0.125]));
}

#[tokio::test]
async fn movie_without_title_is_400() {
    let app = app().await;

    let (status, _) = send(&app, "POST", "/api/movies", Some(json!({ "year": 1999 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "POST", "/api/movies", Some(json!({ "title": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed: title: title is required");
}

#[tokio::test]
async fn null_in_update_clears_optional_fields() {
    let app = app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/movies",
        Some(json!({
            "title": "Blacksmith Scene",
            "plot": "Three men hammer on an anvil.",
            "genres": ["Short"],
            "runtime": 1,
            "awards": { "wins": 1, "nominations": 0, "text": "1 win." }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    let uri = format!("/api/movies/{}", created["_id"].as_str().unwrap());

    let (status, updated) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "plot": null, "genres": null, "awards": null, "title": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["plot"], Value::Null);
    assert_eq!(updated["genres"], Value::Null);
    assert_eq!(updated["awards"], Value::Null);
    assert_eq!(updated["title"], "Blacksmith Scene");
    assert_eq!(updated["runtime"], 1);

    let (status, updated) = send(&app, "PUT", &uri, Some(json!({ "runtime": null }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["runtime"], Value::Null);
    assert_eq!(updated["title"], "Blacksmith Scene");
}

// ── Ambient routes ─────────────────────────────────────────────

#[tokio::test]
async fn health_reports_database_ok() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/api-doc/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/embedded-movies/{id}"]["delete"].is_object());
}
