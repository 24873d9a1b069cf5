//! Hero detail query: one hero, fixed at construction.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{LoadState, RequestSequence};
use crate::client::HeroSource;
use crate::presentation::HeroDetailItem;

/// Snapshot of the hero detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeroDetailState {
    pub status: LoadState,
    /// Last successfully loaded hero. Kept across failed reloads.
    pub hero: Option<HeroDetailItem>,
}

impl HeroDetailState {
    /// The hero to render. A retained hero is hidden while loading or
    /// errored.
    pub fn visible_hero(&self) -> Option<&HeroDetailItem> {
        if self.status.is_loaded() {
            self.hero.as_ref()
        } else {
            None
        }
    }
}

/// View-model for the hero detail screen.
pub struct HeroDetailQuery {
    source: Arc<dyn HeroSource>,
    hero_id: u32,
    state: watch::Sender<HeroDetailState>,
    requests: RequestSequence,
}

impl HeroDetailQuery {
    pub fn new(source: Arc<dyn HeroSource>, hero_id: u32) -> Self {
        let (state, _) = watch::channel(HeroDetailState::default());
        Self {
            source,
            hero_id,
            state,
            requests: RequestSequence::default(),
        }
    }

    pub fn hero_id(&self) -> u32 {
        self.hero_id
    }

    /// Current snapshot.
    pub fn state(&self) -> HeroDetailState {
        self.state.borrow().clone()
    }

    /// Receive a notification on every state change.
    pub fn subscribe(&self) -> watch::Receiver<HeroDetailState> {
        self.state.subscribe()
    }

    /// Load the hero. Responses to superseded fetches are discarded.
    pub async fn fetch(&self) {
        let seq = self.requests.begin();
        self.state.send_modify(|s| s.status = LoadState::Loading);
        info!("Fetching hero {} (request {})", self.hero_id, seq);

        let result = self.source.fetch_by_id(self.hero_id).await;

        self.state.send_if_modified(|s| {
            if !self.requests.is_current(seq) {
                debug!(
                    "Dropping stale response for hero {} (request {})",
                    self.hero_id, seq
                );
                return false;
            }

            match result {
                Ok(record) => {
                    if record.id != self.hero_id {
                        warn!(
                            "Requested hero {} but API returned hero {}",
                            self.hero_id, record.id
                        );
                    }
                    s.hero = Some(HeroDetailItem::from(&record));
                    s.status = LoadState::Loaded;
                    info!("Hero {} loaded", self.hero_id);
                }
                Err(e) => {
                    warn!("Hero {} fetch failed: {}", self.hero_id, e);
                    s.status = LoadState::Errored(e.to_string());
                }
            }
            true
        });
    }

    /// User-initiated "Try Again".
    pub async fn retry(&self) {
        debug!("Retrying hero {} fetch", self.hero_id);
        self.fetch().await;
    }
}
