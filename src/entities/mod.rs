//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database.

pub mod item;
pub mod user;

// Re-exports per facilitare l'import
pub use item::{Item, ItemSummary};
pub use user::User;
