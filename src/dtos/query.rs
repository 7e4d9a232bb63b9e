//! Query DTOs - Data Transfer Objects per query di ricerca

use serde::{Deserialize, Serialize};

/// Query parameters of `GET /v1/item?username=..&item=..`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ItemQuery {
    #[serde(default)]
    pub username: Option<String>,
    /// Item type filter
    #[serde(default)]
    pub item: Option<String>,
}

/// Equality filters applied when listing items. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub owner: Option<String>,
    pub item_type: Option<String>,
}

impl ItemFilter {
    /// Whether an item with the given owner and type passes every set filter.
    pub fn matches(&self, owner: &str, item_type: &str) -> bool {
        self.owner.as_deref().is_none_or(|o| o == owner)
            && self.item_type.as_deref().is_none_or(|t| t == item_type)
    }
}

impl From<ItemQuery> for ItemFilter {
    fn from(query: ItemQuery) -> Self {
        // empty parameters (`?username=`) behave like absent ones
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            owner: non_empty(query.username),
            item_type: non_empty(query.item),
        }
    }
}
