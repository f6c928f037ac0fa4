use crate::modules::activities::adapters::outbound::registry_in_memory::InMemoryRegistryStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::registry::chess_club_registry;
use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::in_memory(Arc::new(InMemoryRegistryStore::seeded(chess_club_registry())))
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryRegistryStore::seeded(chess_club_registry());
    store.toggle_offline();
    AppState::in_memory(Arc::new(store))
}

pub fn post(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
