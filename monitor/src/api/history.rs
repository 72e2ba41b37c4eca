//! 履歴・チャートAPI
//!
//! GET /history, GET /chart-data - ストレージの読み取り専用エンドポイント。
//! 読み取り失敗はエラーレスポンスにせず空配列へ縮退する。

use axum::extract::State;
use axum::Json;
use tracing::error;
use urlmon_common::protocol::{ChartPoint, HistoryEntry};

use crate::AppState;

/// 履歴エンドポイントの取得件数
const HISTORY_LIMIT: i64 = 20;

/// チャートエンドポイントの取得件数
const CHART_LIMIT: i64 = 30;

/// GET /history
///
/// 直近20件を新しい順に返す
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<HistoryEntry>> {
    let entries = match state.storage.recent(HISTORY_LIMIT).await {
        Ok(records) => records.into_iter().map(HistoryEntry::from).collect(),
        Err(e) => {
            error!(error = %e, "Failed to load history");
            Vec::new()
        }
    };

    Json(entries)
}

/// GET /chart-data
///
/// 直近30件を時系列（昇順）に並べ替えてチャート用に変換する。
/// テーブル不在や読み取り失敗時は空配列を返す
pub async fn get_chart_data(State(state): State<AppState>) -> Json<Vec<ChartPoint>> {
    let points = match state.storage.recent(CHART_LIMIT).await {
        // recent()は新しい順なので反転して時系列にする
        Ok(records) => records.into_iter().rev().map(ChartPoint::from).collect(),
        Err(e) => {
            error!(error = %e, "Failed to load chart data");
            Vec::new()
        }
    };

    Json(points)
}
