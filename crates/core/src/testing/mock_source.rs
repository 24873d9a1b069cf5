//! Mock hero source for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::client::{FetchError, HeroSource};
use crate::hero::HeroRecord;

/// A recorded fetch for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedFetch {
    All,
    ById(u32),
}

/// One scripted answer, returned after `delay`.
#[derive(Debug)]
struct Scripted<T> {
    result: Result<T, FetchError>,
    delay: Duration,
}

/// Mock implementation of the HeroSource trait.
///
/// Provides controllable behavior for testing:
/// - Serve a configurable hero catalogue
/// - Script per-call results and delays (to reorder completions)
/// - Track fetches for assertions
/// - Simulate failures
///
/// Scripted answers take precedence over the catalogue; once the script for
/// an operation is exhausted, the catalogue is served again.
#[derive(Debug, Clone)]
pub struct MockHeroSource {
    /// Catalogue served by default, in API order.
    heroes: Arc<RwLock<Vec<HeroRecord>>>,
    /// Scripted answers for `fetch_all`.
    scripted_all: Arc<RwLock<VecDeque<Scripted<Vec<HeroRecord>>>>>,
    /// Scripted answers for `fetch_by_id`.
    scripted_by_id: Arc<RwLock<VecDeque<Scripted<HeroRecord>>>>,
    /// Recorded fetches.
    fetches: Arc<RwLock<Vec<RecordedFetch>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<FetchError>>>,
}

impl Default for MockHeroSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHeroSource {
    /// Create a new mock with an empty catalogue.
    pub fn new() -> Self {
        Self {
            heroes: Arc::new(RwLock::new(Vec::new())),
            scripted_all: Arc::new(RwLock::new(VecDeque::new())),
            scripted_by_id: Arc::new(RwLock::new(VecDeque::new())),
            fetches: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a mock serving the given catalogue.
    pub async fn with_heroes(heroes: Vec<HeroRecord>) -> Self {
        let source = Self::new();
        source.set_heroes(heroes).await;
        source
    }

    // =========================================================================
    // Catalogue
    // =========================================================================

    /// Replace the catalogue.
    pub async fn set_heroes(&self, heroes: Vec<HeroRecord>) {
        *self.heroes.write().await = heroes;
    }

    /// Append a hero to the catalogue.
    pub async fn add_hero(&self, hero: HeroRecord) {
        self.heroes.write().await.push(hero);
    }

    // =========================================================================
    // Scripting
    // =========================================================================

    /// Queue an answer for the next unscripted `fetch_all` call.
    pub async fn script_all(&self, result: Result<Vec<HeroRecord>, FetchError>, delay: Duration) {
        self.scripted_all
            .write()
            .await
            .push_back(Scripted { result, delay });
    }

    /// Queue an answer for the next unscripted `fetch_by_id` call.
    pub async fn script_by_id(&self, result: Result<HeroRecord, FetchError>, delay: Duration) {
        self.scripted_by_id
            .write()
            .await
            .push_back(Scripted { result, delay });
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: FetchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Clear any pending error.
    pub async fn clear_next_error(&self) {
        *self.next_error.write().await = None;
    }

    async fn take_error(&self) -> Option<FetchError> {
        self.next_error.write().await.take()
    }

    // =========================================================================
    // Recording
    // =========================================================================

    /// Get all recorded fetches.
    pub async fn recorded_fetches(&self) -> Vec<RecordedFetch> {
        self.fetches.read().await.clone()
    }

    /// Get the number of fetches performed.
    pub async fn fetch_count(&self) -> usize {
        self.fetches.read().await.len()
    }

    async fn record(&self, fetch: RecordedFetch) {
        self.fetches.write().await.push(fetch);
    }
}

#[async_trait]
impl HeroSource for MockHeroSource {
    async fn fetch_all(&self) -> Result<Vec<HeroRecord>, FetchError> {
        self.record(RecordedFetch::All).await;

        let scripted = self.scripted_all.write().await.pop_front();
        if let Some(Scripted { result, delay }) = scripted {
            tokio::time::sleep(delay).await;
            return result;
        }

        if let Some(error) = self.take_error().await {
            return Err(error);
        }

        Ok(self.heroes.read().await.clone())
    }

    async fn fetch_by_id(&self, id: u32) -> Result<HeroRecord, FetchError> {
        self.record(RecordedFetch::ById(id)).await;

        let scripted = self.scripted_by_id.write().await.pop_front();
        if let Some(Scripted { result, delay }) = scripted {
            tokio::time::sleep(delay).await;
            return result;
        }

        if let Some(error) = self.take_error().await {
            return Err(error);
        }

        self.heroes
            .read()
            .await
            .iter()
            .find(|hero| hero.id == id)
            .cloned()
            // The CDN answers unknown ids with a plain 404.
            .ok_or(FetchError::ServerError(404))
    }
}
