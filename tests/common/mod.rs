// ogni binario di test usa solo una parte degli helper
#![allow(dead_code)]

use axum_test::TestServer;
use item_server::core::AppState;
use item_server::dtos::CreateItemDTO;
use item_server::repositories::{ItemStore, MemoryCredentialStore, MemoryItemStore};
use item_server::session::MemorySessionCache;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// bcrypt cost minimo, per tenere veloci i test
pub const TEST_BCRYPT_COST: u32 = 4;

/// Server di test con backend in memoria e accesso diretto agli store
pub struct TestContext {
    pub state: Arc<AppState>,
    pub users: Arc<MemoryCredentialStore>,
    pub items: Arc<MemoryItemStore>,
    pub sessions: Arc<MemorySessionCache>,
    pub server: TestServer,
}

/// Crea un AppState + TestServer per i test
pub fn create_test_context() -> TestContext {
    let users = Arc::new(MemoryCredentialStore::new());
    let items = Arc::new(MemoryItemStore::new());
    let sessions = Arc::new(MemorySessionCache::new());

    let state = Arc::new(AppState::new(
        users.clone(),
        items.clone(),
        sessions.clone(),
        TEST_JWT_SECRET.to_string(),
        TEST_BCRYPT_COST,
    ));
    let server = TestServer::new(item_server::create_router(state.clone()))
        .expect("Failed to create test server");

    TestContext {
        state,
        users,
        items,
        sessions,
        server,
    }
}

/// Inserisce un oggetto direttamente nello store
pub async fn seed_item(ctx: &TestContext, name: &str, owner: &str, item_type: &str) {
    ctx.items
        .create(&CreateItemDTO {
            item_name: name.to_string(),
            category: "misc".to_string(),
            username: owner.to_string(),
            item_type: item_type.to_string(),
        })
        .await
        .expect("Failed to seed item");
}
