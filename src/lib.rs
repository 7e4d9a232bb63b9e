//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod session;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, auth, config};
pub use services::root;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione
///
/// Un metodo non previsto su un path esistente riceve 405 senza che il body venga letto.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/v1", configure_v1_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configura le routes della API v1 (item, register, login)
fn configure_v1_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/item", get(list_items).post(create_item))
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}
