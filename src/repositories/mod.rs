//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query MySQL sono scritte a mano con parametri bindati (`sqlx::query`,
//! `sqlx::QueryBuilder`): nessun controllo a compile-time, quindi niente
//! DATABASE_URL necessario per compilare.

pub mod item;
pub mod memory;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{CredentialStore, ItemStore, StoreError};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use item::ItemRepository;
pub use memory::{MemoryCredentialStore, MemoryItemStore};
pub use user::UserRepository;
