//! チェック履歴のストレージ層
//!
//! SQLiteベースでプローブ結果を永続化する。レコードは追記専用で、
//! `id`と`checked_at`は挿入時にDBが採番する。

use sqlx::SqlitePool;
use tracing::warn;
use urlmon_common::error::{MonitorError, MonitorResult};
use urlmon_common::types::{CheckRecord, CheckStatus};

/// チェック履歴ストレージ（SQLite版）
#[derive(Clone)]
pub struct CheckHistoryStorage {
    pool: SqlitePool,
}

impl CheckHistoryStorage {
    /// 新しいストレージインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// プローブ結果を1件追記する
    ///
    /// `id`と`checked_at`はDBが採番する。書き込み失敗は
    /// `MonitorError::Database`を返す（呼び出し側はバッチを中断せず、
    /// 当該URLの結果をERRORへ差し替えて続行する）。
    pub async fn append(
        &self,
        url: &str,
        status: CheckStatus,
        response_time_ms: f64,
    ) -> MonitorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO url_checks (url, status, response_time, checked_at)
            VALUES (?, ?, ?, datetime('now'))
            "#,
        )
        .bind(url)
        .bind(status.as_str())
        .bind(response_time_ms)
        .execute(&self.pool)
        .await
        .map_err(|e| MonitorError::Database(format!("Failed to save check record: {}", e)))?;

        Ok(())
    }

    /// 直近のレコードを新しい順に取得する
    ///
    /// `checked_at`降順、同時刻は挿入順（id）でタイブレーク。
    /// statusが解釈できない行は警告を出してスキップする。
    pub async fn recent(&self, limit: i64) -> MonitorResult<Vec<CheckRecord>> {
        let rows = sqlx::query_as::<_, UrlCheckRow>(
            r#"
            SELECT id, url, status, response_time, checked_at
            FROM url_checks
            ORDER BY checked_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MonitorError::Database(format!("Failed to load check records: {}", e)))?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let Some(status) = CheckStatus::parse(&row.status) else {
                    warn!(id = row.id, status = %row.status, "Skipping row with unknown status");
                    return None;
                };
                Some(CheckRecord {
                    id: row.id,
                    url: row.url,
                    status,
                    response_time: row.response_time,
                    checked_at: row.checked_at,
                })
            })
            .collect())
    }
}

/// SQLiteから取得した行データ
#[derive(sqlx::FromRow)]
struct UrlCheckRow {
    id: i64,
    url: String,
    status: String,
    response_time: f64,
    checked_at: String,
}
