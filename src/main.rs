use anyhow::Context;
use quizdb::{config::AppConfig, console::TerminalConsole, shell::Shell, storage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    // Initialize tracing; stdout belongs to the menu
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(quizdb::config::DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Database connection, schema and reference data
    let pool = storage::open_store(&config)
        .await
        .with_context(|| format!("failed to prepare database {}", config.database_url))?;

    let mut shell = Shell::new(pool.clone());
    let mut console = TerminalConsole::new();
    let result = shell.run(&mut console).await;

    pool.close().await;
    result?;

    Ok(())
}
