use anyhow::Context;
use clap::Parser;
use qb_auth::PasswordHasher;
use qb_config::{ConfigError, QbConfig};
use qb_db::QbService;

mod check;
mod cli;

#[tokio::main]
async fn main() {
    let _cli = cli::Cli::parse();

    let config = QbConfig::load_with_dotenv();
    let log_level = config
        .as_ref()
        .map_or_else(|_| "info".to_string(), |c| c.general.log_level.clone());
    if let Err(error) = init_tracing(&log_level) {
        eprintln!("qbank-check: {error:#}");
    }

    report(execute(config).await);
}

async fn execute(config: Result<QbConfig, ConfigError>) -> anyhow::Result<()> {
    let config = config.context("failed to load configuration")?;
    run(&config).await
}

/// Log a failed check. The process exits 0 either way.
fn report(result: anyhow::Result<()>) {
    if let Err(error) = result {
        tracing::error!("Error checking database: {error:#}");
    }
}

async fn run(config: &QbConfig) -> anyhow::Result<()> {
    let hasher = PasswordHasher::new(config.auth.hash_config())
        .context("invalid password hashing configuration")?;
    let service = QbService::new_local(&config.database.path, hasher)
        .await
        .with_context(|| format!("failed to open database at '{}'", config.database.path))?;
    if let Some(summary) = check::check_database(service.db()).await {
        tracing::debug!(
            total = summary.total_questions,
            has_sample = summary.sample_question.is_some(),
            "database check complete"
        );
    }
    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("QBANK_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
