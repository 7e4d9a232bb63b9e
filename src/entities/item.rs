//! Item entity - Oggetti registrati dagli utenti

use serde::{Deserialize, Serialize};

/// Full row of the `items` table.
///
/// `username` references an owner by name only, there is no foreign key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Item {
    pub itemid: i32,
    pub item_name: String,
    pub category: String,
    pub username: String,
    pub item_type: String,
}

/// Projection returned by the listing endpoint (no owner, no type).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ItemSummary {
    pub itemid: i32,
    pub item_name: String,
    pub category: String,
}

impl From<&Item> for ItemSummary {
    fn from(value: &Item) -> Self {
        Self {
            itemid: value.itemid,
            item_name: value.item_name.clone(),
            category: value.category.clone(),
        }
    }
}
