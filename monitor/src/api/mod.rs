//! REST APIハンドラー

use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// チェック実行API
pub mod check;

/// エラーレスポンス型
pub mod error;

/// 履歴・チャートAPI
pub mod history;

/// アプリケーションルーターを構築する
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/check", post(check::check_urls))
        .route("/history", get(history::get_history))
        .route("/chart-data", get(history::get_chart_data))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /
///
/// 対話UIは外部コラボレーター（別途配信）。ここでは最小限の
/// プレースホルダーのみ返す。
async fn index() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html><html><head><title>urlmon</title></head>\
         <body><h1>urlmon</h1>\
         <p>POST /check, GET /history, GET /chart-data</p></body></html>",
    )
}
