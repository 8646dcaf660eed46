use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use wordbook_config::lookup::LookupConfig;
use wordbook_types::{Suggestion, WordRecord};

use crate::client::DatamuseClient;
use crate::error::LookupError;
use crate::rank;
use crate::state::{LookupState, NO_DEFINITION};

/// Messages processed by the service loop. Public operations and network
/// completions both arrive here, so every state mutation happens on one task.
enum LookupEvent {
    Synonyms(String),
    Input(String),
    SynonymsLoaded {
        epoch: u64,
        result: Result<Vec<WordRecord>, LookupError>,
    },
    DefinitionLoaded {
        epoch: u64,
        result: Result<Vec<WordRecord>, LookupError>,
    },
    SuggestionsLoaded {
        generation: u64,
        result: Result<Vec<Suggestion>, LookupError>,
    },
}

/// Handle to a spawned lookup service.
#[derive(Clone)]
pub struct Lookup {
    events: AsyncSender<LookupEvent>,
    state: watch::Receiver<LookupState>,
}

impl Lookup {
    pub fn spawn(client: DatamuseClient, config: LookupConfig) -> Self {
        let (events_tx, events_rx) = kanal::bounded_async(64);
        let (state_tx, state_rx) = watch::channel(LookupState::default());

        let service = LookupService {
            client,
            debounce_delay: Duration::from_millis(config.debounce_ms),
            events_tx: events_tx.clone(),
            state_tx,
            state: LookupState::default(),
            epoch: 0,
            suggestion_generation: 0,
            debounce: None,
        };
        tokio::spawn(service.run(events_rx));

        Self {
            events: events_tx,
            state: state_rx,
        }
    }

    /// Kick off a synonym search plus a definition fetch for a submitted
    /// query. Returns immediately; results land in the observed state.
    pub async fn request_synonyms(&self, query: impl Into<String>) {
        self.send(LookupEvent::Synonyms(query.into())).await;
    }

    /// Feed the current text of the search prompt; drives debounced
    /// autocomplete. An empty string clears the suggestion list.
    pub async fn request_suggestions(&self, input: impl Into<String>) {
        self.send(LookupEvent::Input(input.into())).await;
    }

    /// Read-only observation of published state changes.
    pub fn observe(&self) -> watch::Receiver<LookupState> {
        self.state.clone()
    }

    /// Latest published state.
    pub fn snapshot(&self) -> LookupState {
        self.state.borrow().clone()
    }

    async fn send(&self, event: LookupEvent) {
        if self.events.send(event).await.is_err() {
            tracing::warn!("lookup service is gone, dropping request");
        }
    }
}

struct LookupService {
    client: DatamuseClient,
    debounce_delay: Duration,
    events_tx: AsyncSender<LookupEvent>,
    state_tx: watch::Sender<LookupState>,
    state: LookupState,
    /// Bumped per synonym query; completions from older epochs are dropped.
    epoch: u64,
    /// Same guard for autocomplete, bumped on every input change.
    suggestion_generation: u64,
    debounce: Option<CancellationToken>,
}

impl LookupService {
    async fn run(mut self, events: AsyncReceiver<LookupEvent>) {
        while let Ok(event) = events.recv().await {
            self.handle(event);
        }
        tracing::debug!("lookup event channel closed, service stopping");
    }

    fn handle(&mut self, event: LookupEvent) {
        match event {
            LookupEvent::Synonyms(query) => self.start_synonym_query(&query),
            LookupEvent::Input(input) => self.schedule_suggestions(input),
            LookupEvent::SynonymsLoaded { epoch, result } => self.finish_synonyms(epoch, result),
            LookupEvent::DefinitionLoaded { epoch, result } => {
                self.finish_definition(epoch, result);
            }
            LookupEvent::SuggestionsLoaded { generation, result } => {
                self.finish_suggestions(generation, result);
            }
        }
    }

    fn start_synonym_query(&mut self, query: &str) {
        // Submission dismisses any pending or in-flight autocomplete.
        self.cancel_debounce();
        self.suggestion_generation += 1;

        let synonym_url = self.client.synonym_url(query);
        let definition_url = self.client.definition_url(query);
        let (synonym_url, definition_url) = match (synonym_url, definition_url) {
            (Ok(synonym_url), Ok(definition_url)) => (synonym_url, definition_url),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("failed to build request url for {query:?}: {e}");
                self.state.network_available = false;
                self.publish();
                return;
            }
        };

        self.epoch += 1;
        let epoch = self.epoch;

        self.state.network_available = true;
        self.state.is_loading = true;
        self.state.clear_results();
        self.state.suggestions.clear();
        self.publish();

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.words(synonym_url).await;
            let _ = tx.send(LookupEvent::SynonymsLoaded { epoch, result }).await;
        });

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.words(definition_url).await;
            let _ = tx
                .send(LookupEvent::DefinitionLoaded { epoch, result })
                .await;
        });
    }

    fn finish_synonyms(&mut self, epoch: u64, result: Result<Vec<WordRecord>, LookupError>) {
        if epoch != self.epoch {
            tracing::debug!("dropping stale synonym response (epoch {epoch} != {})", self.epoch);
            return;
        }

        match result {
            Ok(records) => {
                self.state.lyrical_synonyms = rank::rank_lyrical(&records);
                self.state.pretentious_synonyms = rank::rank_pretentious(&records);
                self.state.primary_synonyms = records;
                self.state.is_loading = false;
            }
            Err(e) => {
                tracing::warn!("synonym request failed: {e}");
                self.state.is_loading = false;
                self.state.network_available = false;
            }
        }
        self.publish();
    }

    fn finish_definition(&mut self, epoch: u64, result: Result<Vec<WordRecord>, LookupError>) {
        if epoch != self.epoch {
            tracing::debug!("dropping stale definition response (epoch {epoch} != {})", self.epoch);
            return;
        }

        let gloss = match result {
            Ok(records) => records
                .first()
                .and_then(|record| record.first_gloss())
                .map(str::to_string),
            Err(e) => {
                tracing::debug!("definition request failed: {e}");
                None
            }
        };
        // Definition outcomes never touch is_loading or network_available.
        self.state.current_definition = Some(gloss.unwrap_or_else(|| NO_DEFINITION.to_string()));
        self.publish();
    }

    fn schedule_suggestions(&mut self, input: String) {
        self.cancel_debounce();
        self.suggestion_generation += 1;

        if input.is_empty() {
            self.state.suggestions.clear();
            self.publish();
            return;
        }

        let generation = self.suggestion_generation;
        let token = CancellationToken::new();
        self.debounce = Some(token.clone());

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let delay = self.debounce_delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let url = match client.suggestion_url(&input) {
                        Ok(url) => url,
                        Err(e) => {
                            tracing::debug!("skipping suggestion fetch for {input:?}: {e}");
                            return;
                        }
                    };
                    let result = client.suggestions(url).await;
                    let _ = tx
                        .send(LookupEvent::SuggestionsLoaded { generation, result })
                        .await;
                }
            }
        });
    }

    fn finish_suggestions(
        &mut self,
        generation: u64,
        result: Result<Vec<Suggestion>, LookupError>,
    ) {
        if generation != self.suggestion_generation {
            tracing::debug!("dropping stale suggestion response");
            return;
        }

        match result {
            Ok(entries) => {
                self.state.suggestions = entries.into_iter().map(|entry| entry.word).collect();
            }
            Err(e) => {
                // Previous suggestions stay visible on failure.
                tracing::warn!("suggestion request failed: {e}");
                self.state.network_available = false;
            }
        }
        self.publish();
    }

    fn cancel_debounce(&mut self) {
        if let Some(token) = self.debounce.take() {
            token.cancel();
        }
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state.clone());
    }
}
