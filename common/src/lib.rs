//! urlmon 共通ライブラリ
//!
//! モニターが使用する共通型・プロトコル・エラー定義

#![warn(missing_docs)]

/// エラー型定義
pub mod error;

/// 通信プロトコル定義
pub mod protocol;

/// 共通型定義
pub mod types;

pub use error::{MonitorError, MonitorResult};
