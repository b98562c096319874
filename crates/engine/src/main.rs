//! Formação Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formacao_engine::demo;
use formacao_engine::infrastructure::console::StdoutOutput;
use formacao_engine::infrastructure::ports::OutputPort;
use formacao_engine::AppConfig;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    let config = AppConfig::from_env()?;

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(report_format = %config.report_format, "Starting Formação demo");

    let output: Arc<dyn OutputPort> = Arc::new(StdoutOutput::new());
    let programs = demo::run(&config, output)?;

    tracing::info!(programs = programs.len(), "Demo finished");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
