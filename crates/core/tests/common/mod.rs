//! Common test utilities: an in-process fake of the superhero API.
//!
//! The fake serves `/api/all.json` and `/api/id/{id}.json` from a fixed
//! catalogue and can be told to fail the next catalogue request.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use hero_browser_core::testing::fixtures;
use hero_browser_core::{ApiConfig, HeroRecord};

/// Re-export fixtures for test convenience
pub use hero_browser_core::testing::fixtures::{hero_record, hero_record_with};

#[derive(Clone)]
struct FakeApiState {
    heroes: Arc<Vec<HeroRecord>>,
    fail_next_list: Arc<AtomicBool>,
}

/// Handle to a running fake API.
pub struct FakeApi {
    /// API root, ending with `/api/`.
    pub base_url: String,
    fail_next_list: Arc<AtomicBool>,
}

impl FakeApi {
    /// Serve `heroes` on a random local port.
    pub async fn start(heroes: Vec<HeroRecord>) -> Self {
        let fail_next_list = Arc::new(AtomicBool::new(false));
        let state = FakeApiState {
            heroes: Arc::new(heroes),
            fail_next_list: Arc::clone(&fail_next_list),
        };

        let router = Router::new()
            .route("/api/all.json", get(all_heroes))
            .route("/api/id/{file}", get(hero_by_id))
            .with_state(state);

        let base_url = serve(router).await;
        Self {
            base_url,
            fail_next_list,
        }
    }

    /// Make the next `all.json` request answer 500.
    pub fn fail_next_list(&self) {
        self.fail_next_list.store(true, Ordering::SeqCst);
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
        }
    }
}

/// Serve `router` on 127.0.0.1 with a random port and return the API root.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Fake API server error");
    });

    format!("http://{}/api/", addr)
}

/// Serve a fixed status and body for every `all.json` and by-id request.
pub async fn serve_static(status: StatusCode, body: &'static str) -> String {
    let router = Router::new()
        .route("/api/all.json", get(move || async move { (status, body) }))
        .route("/api/id/{file}", get(move || async move { (status, body) }));
    serve(router).await
}

/// An API root nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{}/api/", addr)
}

async fn all_heroes(State(state): State<FakeApiState>) -> Response {
    if state.fail_next_list.swap(false, Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }

    let body: Vec<Value> = state.heroes.iter().map(fixtures::hero_json).collect();
    Json(body).into_response()
}

async fn hero_by_id(State(state): State<FakeApiState>, Path(file): Path<String>) -> Response {
    let id = file
        .strip_suffix(".json")
        .and_then(|id| id.parse::<u32>().ok());

    match id.and_then(|id| state.heroes.iter().find(|h| h.id == id)) {
        Some(hero) => Json(fixtures::hero_json(hero)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
