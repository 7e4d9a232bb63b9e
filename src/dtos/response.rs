//! Response DTOs - Envelope comune delle risposte JSON

use serde::{Deserialize, Serialize};

/// Value of the `status` field carried by every JSON body.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// `{status, description}` body used by register and item creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: ResponseStatus,
    pub description: String,
}

impl StatusResponse {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            description: description.into(),
        }
    }
}
