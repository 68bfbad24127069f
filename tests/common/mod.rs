#![allow(dead_code)]

use axum::Router;
use axum::routing::{get, post};
use axum_test::TestServer;
use shortly::api::handlers::{health_handler, shorten_handler, user_urls_handler};
use shortly::application::services::{CodeAllocator, UrlService};
use shortly::domain::repositories::RecordStore;
use shortly::infrastructure::persistence::MemoryRecordStore;
use shortly::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:8000/";

pub fn create_test_state() -> (AppState, Arc<MemoryRecordStore>) {
    let store = Arc::new(MemoryRecordStore::new());
    let url_service = UrlService::new(
        store.clone() as Arc<dyn RecordStore>,
        CodeAllocator::default(),
        BASE_URL,
        "30 days",
    );

    (AppState::new(Arc::new(url_service)), store)
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/urls/{user_id}", get(user_urls_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn test_server() -> (TestServer, Arc<MemoryRecordStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(api_router(state)).unwrap();
    (server, store)
}
