//! 到達性プローブ
//!
//! HTTPS優先・元スキームフォールバックの単発HTTP GETプローブ。
//! バッチ内のURLは厳密に逐次チェックする（並列化しない）。

use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, warn};
use urlmon_common::types::CheckStatus;

/// プローブのタイムアウト（秒）
const PROBE_TIMEOUT_SECS: u64 = 5;

/// 1回のプローブ結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeOutcome {
    /// 判定結果
    pub status: CheckStatus,
    /// 応答時間（ミリ秒、小数点以下2桁へ丸め）。応答なしは0
    pub response_time_ms: f64,
}

/// プローブ失敗の分類
#[derive(Debug)]
enum ProbeError {
    /// タイムアウト・接続失敗・TLSエラー等のネットワーク起因
    Network(String),
    /// リクエストを組み立てられない等、ネットワーク起因ではない失敗
    Unexpected(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ProbeError::Unexpected(err.to_string())
        } else {
            ProbeError::Network(err.to_string())
        }
    }
}

/// URLプローバー
///
/// まずHTTPS化したURLをTLS証明書検証なしでGETし、失敗時のみ
/// 元のURLを通常検証でGETする。HTTPS試行が応答を返した場合は
/// 200以外でもフォールバックしない（元実装の観測可能な挙動）。
#[derive(Clone)]
pub struct UrlProber {
    /// HTTPS試行用クライアント（証明書検証を無効化）
    insecure_client: Client,
    /// フォールバック用クライアント（通常の証明書検証）
    fallback_client: Client,
}

impl Default for UrlProber {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlProber {
    /// 新しいプローバーを作成
    pub fn new() -> Self {
        let timeout = std::time::Duration::from_secs(PROBE_TIMEOUT_SECS);

        // 証明書検証の無効化は元実装からの引き継ぎ。自己署名証明書の
        // サイトもUP扱いにするための意図的な挙動（DESIGN.md参照）
        let insecure_client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()
            .expect("Failed to create HTTP client");

        let fallback_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            insecure_client,
            fallback_client,
        }
    }

    /// 正規化済みURLを1件プローブする
    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        let https_url = https_variant(url);
        self.probe_sequence(&https_url, url).await
    }

    /// HTTPS試行→元URLフォールバックの2段階シーケンス
    ///
    /// フォールバックは1段目が*エラーを返した*場合のみ。1段目が
    /// 200以外の応答を返してもそのままDOWNとして確定する。
    async fn probe_sequence(&self, primary: &str, original: &str) -> ProbeOutcome {
        match self.attempt(&self.insecure_client, primary).await {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(
                    url = %primary,
                    error = ?err,
                    "HTTPS attempt failed, falling back to original scheme"
                );

                match self.attempt(&self.fallback_client, original).await {
                    Ok(outcome) => outcome,
                    Err(ProbeError::Network(e)) => {
                        warn!(url = %original, error = %e, "Probe failed");
                        ProbeOutcome {
                            status: CheckStatus::Down,
                            response_time_ms: 0.0,
                        }
                    }
                    Err(ProbeError::Unexpected(e)) => {
                        error!(url = %original, error = %e, "Unexpected probe failure");
                        ProbeOutcome {
                            status: CheckStatus::Error,
                            response_time_ms: 0.0,
                        }
                    }
                }
            }
        }
    }

    /// 単発GETを実行し、応答が得られれば判定する
    async fn attempt(&self, client: &Client, url: &str) -> Result<ProbeOutcome, ProbeError> {
        let start = Instant::now();
        let response = client.get(url).send().await?;
        let elapsed = start.elapsed();

        // 200ちょうどのみUP。3xx/4xx/5xxはすべてDOWN
        let status = if response.status().as_u16() == 200 {
            CheckStatus::Up
        } else {
            CheckStatus::Down
        };

        Ok(ProbeOutcome {
            status,
            response_time_ms: round_millis(elapsed.as_secs_f64() * 1000.0),
        })
    }
}

/// `http://` プレフィックスを `https://` に置換したURLを返す
///
/// すでに `https://` の場合は変更しない
fn https_variant(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    }
}

/// ミリ秒値を小数点以下2桁へ丸める
fn round_millis(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}
