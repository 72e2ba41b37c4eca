//! HTTP API契約テスト
//!
//! tower::ServiceExt::oneshotでルーター全体を通すエンドツーエンドテスト

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;
use urlmon::db::checks::CheckHistoryStorage;
use urlmon::db::migrations::initialize_database;
use urlmon::prober::UrlProber;
use urlmon::{api, AppState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn build_app() -> (Router, SqlitePool) {
    let pool = initialize_database("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    let state = AppState {
        storage: CheckHistoryStorage::new(pool.clone()),
        prober: UrlProber::new(),
    };

    (api::create_app(state), pool)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_check(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/check")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// 明示タイムスタンプで履歴行を投入する（読み取り系テストのシード用）
async fn seed_check(pool: &SqlitePool, url: &str, status: &str, rt: f64, checked_at: &str) {
    sqlx::query(
        "INSERT INTO url_checks (url, status, response_time, checked_at) VALUES (?, ?, ?, ?)",
    )
    .bind(url)
    .bind(status)
    .bind(rt)
    .bind(checked_at)
    .execute(pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn check_skips_blank_entries_and_normalizes_the_rest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (app, pool) = build_app().await;

    // 空エントリは結果にもDB行にも現れない
    let target = server.uri().trim_start_matches("http://").to_string();
    let response = app
        .clone()
        .oneshot(post_check(json!({ "urls": ["", format!("  {}  ", target)] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let results = body_json(response).await;
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["url"], format!("http://{}", target));
    assert_eq!(results[0]["status"], "UP");
    assert!(results[0]["response_time"].as_f64().unwrap() >= 0.0);

    // DBにも1行だけ
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_checks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn check_reports_down_for_unreachable_url() {
    let (app, _pool) = build_app().await;

    // `.invalid` TLD（RFC 2606予約）は名前解決が必ず失敗する
    let response = app
        .oneshot(post_check(json!({ "urls": ["http://urlmon-test.invalid"] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let results = body_json(response).await;
    assert_eq!(results[0]["status"], "DOWN");
    assert_eq!(results[0]["response_time"], 0.0);
}

#[tokio::test]
async fn malformed_check_body_is_rejected_with_400() {
    let (app, _pool) = build_app().await;

    let response = app
        .clone()
        .oneshot(post_check(json!({ "urls": "not-an-array" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/check")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn history_returns_newest_first_with_all_fields() {
    let (app, pool) = build_app().await;

    seed_check(&pool, "http://t2.example", "UP", 20.0, "2026-08-23 10:00:02").await;
    seed_check(&pool, "http://t1.example", "DOWN", 0.0, "2026-08-23 10:00:01").await;
    seed_check(&pool, "http://t3.example", "UP", 30.0, "2026-08-23 10:00:03").await;

    let response = app.oneshot(get("/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap().clone();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["url"], "http://t3.example");
    assert_eq!(entries[1]["url"], "http://t2.example");
    assert_eq!(entries[2]["url"], "http://t1.example");
    assert_eq!(entries[2]["status"], "DOWN");
    assert_eq!(entries[0]["response_time"], 30.0);
    assert_eq!(entries[0]["checked_at"], "2026-08-23 10:00:03");
}

#[tokio::test]
async fn history_is_capped_at_twenty_entries() {
    let (app, pool) = build_app().await;

    for i in 0..25 {
        seed_check(
            &pool,
            &format!("http://host{}.example", i),
            "UP",
            1.0,
            &format!("2026-08-23 10:00:{:02}", i),
        )
        .await;
    }

    let response = app.oneshot(get("/history")).await.unwrap();
    let entries = body_json(response).await;
    assert_eq!(entries.as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn chart_data_is_chronological_with_mapped_values() {
    let (app, pool) = build_app().await;

    seed_check(&pool, "http://a.example", "UP", 12.5, "2026-08-23 10:00:01").await;
    seed_check(&pool, "http://a.example", "DOWN", 0.0, "2026-08-23 10:00:02").await;
    seed_check(&pool, "http://a.example", "UP", 9.75, "2026-08-23 10:00:03").await;

    let response = app.oneshot(get("/chart-data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let points = body_json(response).await;
    let points = points.as_array().unwrap().clone();
    assert_eq!(points.len(), 3);

    // 昇順（古い→新しい）でISO-8601の'T'区切り
    assert_eq!(points[0]["x"], "2026-08-23T10:00:01");
    assert_eq!(points[1]["x"], "2026-08-23T10:00:02");
    assert_eq!(points[2]["x"], "2026-08-23T10:00:03");

    // UP=1、DOWN=0
    assert_eq!(points[0]["y"], 1);
    assert_eq!(points[1]["y"], 0);
    assert_eq!(points[2]["y"], 1);
    assert_eq!(points[2]["response_time"], 9.75);
}

#[tokio::test]
async fn chart_data_returns_empty_array_when_no_rows() {
    let (app, _pool) = build_app().await;

    let response = app.oneshot(get("/chart-data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn read_endpoints_degrade_to_empty_arrays_on_storage_failure() {
    let (app, pool) = build_app().await;
    pool.close().await;

    let response = app.clone().oneshot(get("/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    let response = app.oneshot(get("/chart-data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn storage_write_failure_does_not_abort_the_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (app, pool) = build_app().await;
    pool.close().await;

    let target = server.uri();
    let response = app
        .oneshot(post_check(json!({ "urls": [target.clone(), target] })))
        .await
        .unwrap();

    // 書き込みが全滅してもバッチは完走し、各URLがERRORへ縮退する
    assert_eq!(response.status(), StatusCode::OK);
    let results = body_json(response).await;
    let results = results.as_array().unwrap().clone();
    assert_eq!(results.len(), 2);
    for result in results {
        assert_eq!(result["status"], "ERROR");
        assert_eq!(result["response_time"], 0.0);
    }
}

#[tokio::test]
async fn index_serves_placeholder_page() {
    let (app, _pool) = build_app().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("urlmon"));
}
