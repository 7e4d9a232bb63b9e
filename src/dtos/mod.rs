//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod item;
pub mod query;
pub mod response;
pub mod user;

// Re-exports per facilitare l'import
pub use item::{CreateItemDTO, ItemListResponse};
pub use query::{ItemFilter, ItemQuery};
pub use response::{ResponseStatus, StatusResponse};
pub use user::{CredentialsForm, LoginResponse, NewUser};
