mod app;
mod handlers;
mod logfile;
mod logic;
mod models;
mod runtime;
mod state;

use crate::logfile::LogFile;
use crate::runtime::{bind_listener, env_or, init_tracing, shutdown_signal};
use crate::state::AppState;

#[tokio::main]
async fn main() {
    let _guards = init_tracing("ingest-service");

    let port = env_or("PORT", 5000u16);
    let log_path = env_or("LOG_PATH", "data_log.csv".to_string());

    let log = LogFile::new(log_path);
    match log.ensure_header() {
        Ok(true) => tracing::info!(path = %log.path().display(), "created log file"),
        Ok(false) => tracing::info!(path = %log.path().display(), "log file already exists"),
        Err(err) => {
            tracing::error!(error = %err, path = %log.path().display(), "log file init failed");
            std::process::exit(1);
        }
    }

    let state = AppState::new(log);
    let app = app::build_router(state);
    let listener = bind_listener(port).await;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("serve");
}
