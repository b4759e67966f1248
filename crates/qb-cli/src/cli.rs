use clap::Parser;

/// Check that the question bank database is reachable and report its size.
///
/// Reads `.qbank/config.toml`, `~/.config/qbank/config.toml` and `QBANK_*`
/// environment variables. Always exits 0; failures are only logged.
#[derive(Debug, Parser)]
#[command(name = "qbank-check", version, about)]
pub struct Cli {}
