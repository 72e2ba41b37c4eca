//! 共通型定義
//!
//! CheckStatus, CheckRecord等のコアデータ型

use serde::{Deserialize, Serialize};

/// 到達性チェックの判定結果
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// HTTP 200が返った
    Up,
    /// 応答なし、または200以外のHTTPステータス
    Down,
    /// ネットワーク起因ではない予期しない失敗
    Error,
}

impl CheckStatus {
    /// DB格納用の文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Up => "UP",
            CheckStatus::Down => "DOWN",
            CheckStatus::Error => "ERROR",
        }
    }

    /// DB格納文字列からの復元（未知の値はNone）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "UP" => Some(CheckStatus::Up),
            "DOWN" => Some(CheckStatus::Down),
            "ERROR" => Some(CheckStatus::Error),
            _ => None,
        }
    }

    /// チャート表示用の数値（UP=1、それ以外=0）
    pub fn as_chart_value(&self) -> u8 {
        match self {
            CheckStatus::Up => 1,
            CheckStatus::Down | CheckStatus::Error => 0,
        }
    }
}

/// 1回のプローブ結果（永続化済みレコード）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckRecord {
    /// 一意識別子（DBの自動採番、単調増加）
    pub id: i64,
    /// プローブ対象の正規化済みURL
    pub url: String,
    /// 判定結果
    pub status: CheckStatus,
    /// 応答時間（ミリ秒）。応答が得られなかった場合は0
    pub response_time: f64,
    /// 記録時刻（DBが挿入時に採番、`YYYY-MM-DD HH:MM:SS`）
    pub checked_at: String,
}
