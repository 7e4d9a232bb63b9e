use crate::core::auth::AuthError;
use crate::core::config::ConfigError;
use crate::dtos::ResponseStatus;
use crate::repositories::StoreError;
use crate::session::CacheError;
use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::{Json, http::StatusCode, response::IntoResponse};
use bcrypt::BcryptError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Serialize)]
struct ErrorResponse {
    status: ResponseStatus,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Errore restituito dagli handler HTTP: status code + messaggio per il client
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername => Self::conflict("Username already exists"),
            StoreError::Validation(e) => {
                Self::bad_request("Missing required fields").with_details(e.to_string())
            }
            StoreError::Hash(BcryptError::Truncation(len)) => {
                Self::bad_request("Password too long")
                    .with_details(format!("{} bytes, bcrypt accepts at most 71", len - 1))
            }
            StoreError::Hash(_) | StoreError::Task(_) => {
                error!("Password hashing failed: {err}");
                Self::internal_server_error("Failed to hash password")
            }
            StoreError::Persistence(ref e) => {
                error!("Database error: {e}");
                Self::internal_server_error("Database error")
            }
        }
    }
}

impl From<CacheError> for AppError {
    fn from(err: CacheError) -> Self {
        error!("Session cache error: {err}");
        Self::internal_server_error("Session cache error")
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Store(e) => e.into(),
            AuthError::Cache(e) => e.into(),
            AuthError::Token(e) => {
                error!("Token signing failed: {e}");
                Self::internal_server_error("Failed to issue token")
            }
            AuthError::Hash(_) | AuthError::Task(_) => {
                error!("Password verification failed: {err}");
                Self::internal_server_error("Failed to verify password")
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request("Missing required fields").with_details(err.to_string())
    }
}

// Body malformati -> 400, prima di qualsiasi accesso allo store
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        Self::bad_request("Unable to parse request body").with_details(err.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(err: FormRejection) -> Self {
        Self::bad_request("Unable to parse form").with_details(err.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        Self::bad_request("Invalid query string").with_details(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            status: ResponseStatus::Failed,
            description: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}

/// Errori fatali all'avvio: il processo termina prima di servire richieste
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database unreachable: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("redis unreachable: {0}")]
    Cache(#[from] CacheError),
    #[error("cannot bind listener: {0}")]
    Io(#[from] std::io::Error),
}
