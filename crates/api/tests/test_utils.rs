#![allow(dead_code)]

use std::sync::Arc;

use agence_api::ApiState;
use agence_db::mock::repositories::MockContactRepo;
use axum_test::TestServer;
use serde_json::{Value, json};

pub struct TestContext {
    pub contacts: MockContactRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            contacts: MockContactRepo::new(),
        }
    }

    // Build state around the mock repository
    pub fn build_state(self) -> Arc<ApiState> {
        Arc::new(ApiState::new(Arc::new(self.contacts)))
    }

    pub fn server(self) -> TestServer {
        TestServer::new(agence_api::app(self.build_state())).expect("Failed to build test server")
    }
}

/// The reference submission: one callback request with one slot.
pub fn example_payload() -> Value {
    json!({
        "civilite": "M",
        "nom": "Dupont",
        "prenom": "Jean",
        "email": "jean@x.com",
        "motif_contact": "etre_rappele",
        "disponibilites": ["2025-01-06 09:00:00"]
    })
}
