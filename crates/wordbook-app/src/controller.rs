use kanal::{AsyncReceiver, AsyncSender};
use tokio::signal;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordbook_lookup::Lookup;
use wordbook_types::AppEvent;

use crate::events::event_loop;
use crate::ui::{render_loop, ui_loop};

/// Centralized channel management
pub struct ChannelSet {
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

/// Spawns the interactive loops and runs until quit or Ctrl+C.
pub async fn run(lookup: Lookup) -> anyhow::Result<()> {
    let channels = ChannelSet::new();
    let cancel_token = CancellationToken::new();

    let mut tasks = JoinSet::new();
    tasks.spawn(ui_loop(
        channels.ui_to_app.0.clone(),
        cancel_token.child_token(),
    ));
    tasks.spawn(event_loop(
        lookup.clone(),
        channels.ui_to_app.1.clone(),
        cancel_token.child_token(),
    ));
    tasks.spawn(render_loop(lookup.observe(), cancel_token.child_token()));

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::debug!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    cancel_token.cancel();
    tasks.shutdown().await;
    Ok(())
}
