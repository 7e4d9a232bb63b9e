//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione, password e JWT
//! - Configurazione
//! - Gestione errori
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{AuthError, AuthService, Claims, LoginOutcome, decode_jwt, encode_jwt};
pub use config::{Config, ConfigError};
pub use error::{AppError, StartupError};
pub use state::AppState;
