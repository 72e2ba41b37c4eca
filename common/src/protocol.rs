//! 通信プロトコル定義
//!
//! クライアント↔モニター間のJSONメッセージ

use serde::{Deserialize, Serialize};

use crate::types::{CheckRecord, CheckStatus};

/// チェック実行リクエスト（POST /check）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckRequest {
    /// チェック対象の生URL文字列（正規化前）
    pub urls: Vec<String>,
}

/// 1 URL分のチェック結果（POST /checkレスポンス要素）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckResult {
    /// 正規化済みURL
    pub url: String,
    /// 判定結果
    pub status: CheckStatus,
    /// 応答時間（ミリ秒）
    pub response_time: f64,
}

/// 履歴エントリ（GET /historyレスポンス要素）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// 正規化済みURL
    pub url: String,
    /// 判定結果
    pub status: CheckStatus,
    /// 応答時間（ミリ秒）
    pub response_time: f64,
    /// 記録時刻
    pub checked_at: String,
}

impl From<CheckRecord> for HistoryEntry {
    fn from(record: CheckRecord) -> Self {
        Self {
            url: record.url,
            status: record.status,
            response_time: record.response_time,
            checked_at: record.checked_at,
        }
    }
}

/// 時系列チャートの1点（GET /chart-dataレスポンス要素）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    /// 記録時刻（ISO-8601、空白を'T'に置換）
    pub x: String,
    /// UP=1、それ以外=0
    pub y: u8,
    /// 応答時間（ミリ秒）
    pub response_time: f64,
}

impl From<CheckRecord> for ChartPoint {
    fn from(record: CheckRecord) -> Self {
        Self {
            x: record.checked_at.replace(' ', "T"),
            y: record.status.as_chart_value(),
            response_time: record.response_time,
        }
    }
}
