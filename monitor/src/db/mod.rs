//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// チェック履歴
pub mod checks;

/// データベースマイグレーション
pub mod migrations;
