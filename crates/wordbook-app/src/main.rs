use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordbook_config::Config;
use wordbook_lookup::{DatamuseClient, Lookup};

mod controller;
mod events;
mod render;
mod ui;

/// Synonym, autocomplete and definition lookup for the terminal.
#[derive(Parser)]
#[command(name = "wordbook", version)]
struct Args {
    /// Look up this word once and exit instead of starting the prompt
    word: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::new();

    let client = DatamuseClient::new(&config.network)?;
    let lookup = Lookup::spawn(client, config.lookup);

    match args.word {
        Some(word) => one_shot(&lookup, &word).await,
        None => controller::run(lookup).await,
    }
}

/// Print a single settled search and exit.
async fn one_shot(lookup: &Lookup, word: &str) -> anyhow::Result<()> {
    let mut rx = lookup.observe();
    lookup.request_synonyms(word).await;

    let settled = tokio::time::timeout(Duration::from_secs(15), async {
        loop {
            {
                let state = rx.borrow_and_update();
                if !state.network_available
                    || (!state.is_loading && state.current_definition.is_some())
                {
                    return state.clone();
                }
            }
            if rx.changed().await.is_err() {
                return rx.borrow().clone();
            }
        }
    })
    .await;

    match settled {
        Ok(state) => {
            render::print_results(&state);
            Ok(())
        }
        Err(_) => anyhow::bail!("lookup timed out"),
    }
}
