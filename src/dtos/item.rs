//! Item DTOs - Data Transfer Objects per gli oggetti

use super::ResponseStatus;
use crate::entities::ItemSummary;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// JSON body of `POST /v1/item`.
///
/// Every field defaults to an empty string so that a missing field is reported
/// as a validation error rather than a decoding one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct CreateItemDTO {
    #[serde(default)]
    #[validate(length(min = 1, message = "item_name is required"))]
    pub item_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "item_type is required"))]
    pub item_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ItemListResponse {
    pub status: ResponseStatus,
    pub items: Vec<ItemSummary>,
}

impl ItemListResponse {
    pub fn new(items: Vec<ItemSummary>) -> Self {
        Self {
            status: ResponseStatus::Success,
            items,
        }
    }
}
