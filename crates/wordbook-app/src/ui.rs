use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use wordbook_lookup::LookupState;
use wordbook_types::AppEvent;

use crate::render;

/// Reads prompt lines from stdin and translates them into app events.
///
/// A bare word searches it. `?<text>` previews autocomplete for the text.
/// A bare number re-searches that entry of the last synonym listing.
/// An empty line dismisses suggestions. `:q` quits.
pub async fn ui_loop(
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("wordbook: type a word to search, ?<text> for suggestions, :q to quit");

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            // stdin closed
            return Ok(());
        };
        let line = line.trim();

        let event = if line == ":q" {
            AppEvent::Quit
        } else if let Some(rest) = line.strip_prefix('?') {
            AppEvent::InputChanged(rest.trim().to_string())
        } else if line.is_empty() {
            AppEvent::InputChanged(String::new())
        } else if let Ok(index) = line.parse::<usize>() {
            AppEvent::Select(index)
        } else {
            AppEvent::Submit(line.to_string())
        };

        let quitting = matches!(event, AppEvent::Quit);
        ui_to_app_tx.send(event).await?;
        if quitting {
            return Ok(());
        }
    }
}

/// Prints every published lookup state change.
pub async fn render_loop(
    mut state_rx: watch::Receiver<LookupState>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            changed = state_rx.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
            }
        }

        let state = state_rx.borrow_and_update().clone();
        if state.is_loading {
            println!("searching...");
            continue;
        }
        if !state.network_available {
            println!("network unavailable, please try again");
            continue;
        }
        if !state.suggestions.is_empty() {
            render::print_suggestions(&state.suggestions);
            continue;
        }
        if !state.primary_synonyms.is_empty() || state.current_definition.is_some() {
            render::print_results(&state);
        }
    }
}
