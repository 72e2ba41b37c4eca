//! urlmon Server
//!
//! URL到達性チェックと履歴記録を行う監視サーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// URL正規化
pub mod normalizer;

/// 到達性プローブ
pub mod prober;

/// サーバー起動・シャットダウン
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// チェック履歴ストレージ
    pub storage: db::checks::CheckHistoryStorage,
    /// URLプローバー
    pub prober: prober::UrlProber,
}
