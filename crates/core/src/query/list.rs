//! Hero list query: fetches the catalogue and serves a debounced search over it.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::detail::HeroDetailQuery;
use super::search::{filter_heroes, Debouncer};
use super::{LoadState, RequestSequence};
use crate::client::HeroSource;
use crate::config::SearchConfig;
use crate::presentation::HeroListItem;

/// Snapshot of the hero list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeroListState {
    pub status: LoadState,
    /// Full catalogue in API order. Kept across failed reloads.
    pub heroes: Vec<HeroListItem>,
    /// `heroes` narrowed by `applied_query`.
    pub filtered: Vec<HeroListItem>,
    /// Latest text typed into the search box.
    pub search_text: String,
    /// Query the current `filtered` list was computed with.
    pub applied_query: String,
}

impl HeroListState {
    /// Rows to render. Retained rows are hidden while loading or errored.
    pub fn visible_heroes(&self) -> &[HeroListItem] {
        if self.status.is_loaded() {
            &self.filtered
        } else {
            &[]
        }
    }
}

#[derive(Debug)]
enum SearchInput {
    Text(String),
    Cleared,
}

/// View-model for the hero list.
///
/// Dropping the query stops its search task.
pub struct HeroListQuery {
    source: Arc<dyn HeroSource>,
    state: Arc<watch::Sender<HeroListState>>,
    requests: RequestSequence,
    search_tx: mpsc::UnboundedSender<SearchInput>,
}

impl HeroListQuery {
    /// Create an idle list query and start its search task.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn new(source: Arc<dyn HeroSource>, search: &SearchConfig) -> Self {
        let (state_tx, _) = watch::channel(HeroListState::default());
        let state = Arc::new(state_tx);
        let (search_tx, search_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_search(
            Arc::clone(&state),
            search_rx,
            Duration::from_millis(search.debounce_ms),
        ));

        Self {
            source,
            state,
            requests: RequestSequence::default(),
            search_tx,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> HeroListState {
        self.state.borrow().clone()
    }

    /// Receive a notification on every state change.
    pub fn subscribe(&self) -> watch::Receiver<HeroListState> {
        self.state.subscribe()
    }

    /// Load the catalogue.
    ///
    /// Only the most recently issued fetch may write its result; a response
    /// that completes after a newer fetch was started is discarded.
    pub async fn fetch(&self) {
        let seq = self.requests.begin();
        self.state.send_modify(|s| s.status = LoadState::Loading);
        info!("Fetching hero list (request {})", seq);

        let result = self.source.fetch_all().await;

        self.state.send_if_modified(|s| {
            if !self.requests.is_current(seq) {
                debug!("Dropping stale hero list response (request {})", seq);
                return false;
            }

            match result {
                Ok(records) => {
                    s.heroes = records.iter().map(HeroListItem::from).collect();
                    s.filtered = filter_heroes(&s.heroes, &s.search_text);
                    s.applied_query = s.search_text.clone();
                    s.status = LoadState::Loaded;
                    info!("Hero list loaded: {} heroes", s.heroes.len());
                }
                Err(e) => {
                    warn!("Hero list fetch failed: {}", e);
                    s.status = LoadState::Errored(e.to_string());
                }
            }
            true
        });
    }

    /// User-initiated "Try Again".
    pub async fn retry(&self) {
        debug!("Retrying hero list fetch");
        self.fetch().await;
    }

    /// Update the search box text.
    ///
    /// Non-empty text is applied once it has been stable for the debounce
    /// window. Empty text restores the full list immediately.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();

        let input = if text.is_empty() {
            self.state.send_modify(|s| {
                s.search_text.clear();
                s.applied_query.clear();
                s.filtered = s.heroes.clone();
            });
            SearchInput::Cleared
        } else {
            self.state.send_modify(|s| s.search_text = text.clone());
            SearchInput::Text(text)
        };

        if self.search_tx.send(input).is_err() {
            warn!("Search task is gone; search input ignored");
        }
    }

    /// Detail query for a hero picked from the list, sharing this source.
    pub fn detail_query(&self, hero_id: u32) -> HeroDetailQuery {
        HeroDetailQuery::new(Arc::clone(&self.source), hero_id)
    }
}

/// Coalesce search inputs and apply each settled query to the list.
async fn run_search(
    state: Arc<watch::Sender<HeroListState>>,
    mut inputs: mpsc::UnboundedReceiver<SearchInput>,
    window: Duration,
) {
    let mut debouncer = Debouncer::with_applied(window, String::new());

    loop {
        let input = match debouncer.deadline() {
            Some(deadline) => tokio::select! {
                input = inputs.recv() => input,
                _ = tokio::time::sleep_until(deadline) => {
                    if let Some(query) = debouncer.poll(Instant::now()) {
                        if let Err(applied) = apply_query(&state, query) {
                            debouncer.mark_applied(applied);
                        }
                    }
                    continue;
                }
            },
            None => inputs.recv().await,
        };

        match input {
            Some(SearchInput::Text(text)) => debouncer.push(text, Instant::now()),
            Some(SearchInput::Cleared) => debouncer.apply_now(String::new()),
            None => break,
        }
    }

    debug!("Search task stopped");
}

/// Filter the list with `query` if it is still what the user has typed.
///
/// On a superseded query, returns the query the list is actually filtered
/// with.
fn apply_query(state: &watch::Sender<HeroListState>, query: String) -> Result<(), String> {
    let mut outcome = Ok(());

    state.send_if_modified(|s| {
        if s.search_text != query {
            debug!("Search '{}' superseded by '{}'", query, s.search_text);
            outcome = Err(s.applied_query.clone());
            return false;
        }

        s.filtered = filter_heroes(&s.heroes, &query);
        debug!("Search '{}' matched {} heroes", query, s.filtered.len());
        s.applied_query = query;
        true
    });

    outcome
}
