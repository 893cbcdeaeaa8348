//! Pipe text through the translator:
//! echo "Hello world" | cargo run -p glot-worker --bin translate_demo -- id

use std::io::Read;

use anyhow::Result;
use glot_config::Config;
use glot_history::HistoryStore;
use glot_translator::{TranslationClient, language_name};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dest = std::env::args().nth(1).unwrap_or_else(|| "en".to_string());

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let config = Config::new();
    let client = TranslationClient::new(config.translator);
    let history = HistoryStore::new(config.history);

    let worker = glot_worker::spawn(client, Some(history));
    let outcome = worker.translate_large(text.trim_end(), "auto", &dest).await?;

    match outcome.error_message() {
        Some(message) => tracing::error!("translation failed: {message}"),
        None => {
            tracing::info!(
                "detected {} ({:.2})",
                language_name(outcome.detected_lang()),
                outcome.confidence()
            );
            println!("{}", outcome.text().unwrap_or_default());
        }
    }

    worker.shutdown();
    Ok(())
}
