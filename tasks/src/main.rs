//! `tasklist` - interactive todo list on stdin/stdout.
//!
//! Reads one action per line (`add <name>`, `toggle <id>`, `delete <id>`,
//! or JSON objects with `TASKLIST_INPUT_FORMAT=json`) and prints the list
//! after every change. Logs go to stderr.

use anyhow::Context;
use tasklist::{host, Config, TaskEnvironment};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(input_format = ?config.input_format, "starting tasklist");

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    let list = host::run(&config, TaskEnvironment::production(), input, &mut output)
        .await
        .context("task list terminated")?;

    tracing::info!(
        tasks = list.len(),
        completed = list.completed_count(),
        "goodbye"
    );
    Ok(())
}
