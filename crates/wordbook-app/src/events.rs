use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordbook_lookup::Lookup;
use wordbook_types::AppEvent;

/// App's main loop: applies UI events to the lookup service.
pub async fn event_loop(
    lookup: Lookup,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!("event: {:?}", std::mem::discriminant(&event));
        match event {
            AppEvent::Submit(query) => lookup.request_synonyms(query).await,
            AppEvent::InputChanged(text) => lookup.request_suggestions(text).await,
            AppEvent::Select(index) => {
                // 1-based index into the last synonym listing.
                let snapshot = lookup.snapshot();
                match snapshot.primary_synonyms.get(index.wrapping_sub(1)) {
                    Some(record) => lookup.request_synonyms(record.word.clone()).await,
                    None => println!("no entry [{index}] in the last results"),
                }
            }
            AppEvent::Quit => return Ok(()),
        }
    }
}
