//! チェック実行API
//!
//! POST /check - URLリストを受け取り、逐次プローブして結果を返す

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{error, info};
use urlmon_common::error::MonitorError;
use urlmon_common::protocol::{CheckRequest, CheckResult};
use urlmon_common::types::CheckStatus;

use super::error::AppError;
use crate::normalizer::normalize;
use crate::AppState;

/// POST /check
///
/// ボディの各URLを正規化（空エントリは破棄）し、入力順に1件ずつ
/// プローブして永続化する。永続化に失敗したURLはERRORへ差し替えて
/// バッチを続行する。不正なボディは400を返す。
pub async fn check_urls(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<Vec<CheckResult>>, AppError> {
    let Json(request) = payload.map_err(|e| {
        MonitorError::BadRequest(format!("invalid request body: {}", e.body_text()))
    })?;

    let candidates: Vec<String> = request
        .urls
        .iter()
        .filter_map(|raw| normalize(raw))
        .collect();

    info!(count = candidates.len(), "Running reachability checks");

    let mut results = Vec::with_capacity(candidates.len());

    // 並列化しない。バッチ内は厳密に逐次実行する
    for url in candidates {
        let outcome = state.prober.probe(&url).await;

        let result = match state
            .storage
            .append(&url, outcome.status, outcome.response_time_ms)
            .await
        {
            Ok(()) => CheckResult {
                url,
                status: outcome.status,
                response_time: outcome.response_time_ms,
            },
            Err(e) => {
                // 書き込み失敗はバッチを中断しない。当該URLのみERROR扱い
                error!(url = %url, error = %e, "Failed to persist check result");
                CheckResult {
                    url,
                    status: CheckStatus::Error,
                    response_time: 0.0,
                }
            }
        };

        results.push(result);
    }

    Ok(Json(results))
}
