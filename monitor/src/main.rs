//! urlmon Server Entry Point

use clap::Parser;
use urlmon::cli::Cli;
use urlmon::config::{env_or, env_parse};
use urlmon::db::checks::CheckHistoryStorage;
use urlmon::db::migrations::initialize_database;
use urlmon::prober::UrlProber;
use urlmon::{logging, server, AppState};

#[derive(Clone)]
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = env_or("URLMON_HOST", "0.0.0.0");
        let port = env_parse("URLMON_PORT", 8000);
        Self { host, port }
    }

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// データベースURLを決定する（未指定時はホームディレクトリ配下）
fn database_url() -> String {
    std::env::var("URLMON_DATABASE_URL").unwrap_or_else(|_| {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .expect("Failed to get home directory");
        format!("sqlite:{}/.urlmon/urlmon.db", home)
    })
}

#[tokio::main]
async fn main() {
    // Parse CLI (only -h/--help and -V/--version)
    let _cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    tracing::info!("urlmon v{}", env!("CARGO_PKG_VERSION"));

    let database_url = database_url();

    // SQLiteファイルはディレクトリが存在しないと作成できないため、先に作成しておく
    if let Some(path) = database_url.strip_prefix("sqlite:") {
        // `sqlite::memory:` のような特殊指定はスキップ
        if !path.starts_with(':') {
            let normalized = path.trim_start_matches("//");
            let path_without_params = normalized.split('?').next().unwrap_or(normalized);
            if let Some(parent) = std::path::Path::new(path_without_params).parent() {
                std::fs::create_dir_all(parent).unwrap_or_else(|err| {
                    panic!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        err
                    )
                });
            }
        }
    }

    // プールは起動時に1度だけ開き、各ハンドラーへ注入する
    let pool = initialize_database(&database_url)
        .await
        .expect("Failed to initialize database");

    let state = AppState {
        storage: CheckHistoryStorage::new(pool),
        prober: UrlProber::new(),
    };

    let config = ServerConfig::from_env();
    server::run(state, &config.bind_addr()).await;
}
