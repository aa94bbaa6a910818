use std::sync::Arc;

use anyhow::Context;
use symptom_analyzer::{build_app, config::AppConfig, run_server, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();
    tracing::info!(
        program = %config.runner_program,
        timeout_ms = config.runner_timeout.as_millis() as u64,
        "using model runner"
    );

    let app = build_app(Arc::new(AppState {
        runner: config.runner(),
    }));

    run_server(app, config.port)
        .await
        .with_context(|| format!("server on port {} failed", config.port))
}
