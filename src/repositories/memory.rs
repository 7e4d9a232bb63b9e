//! In-memory stores - stessi contratti dei repository MySQL, senza database

use super::{CredentialStore, ItemStore, StoreError};
use crate::dtos::{CreateItemDTO, ItemFilter, NewUser};
use crate::entities::{Item, ItemSummary, User};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI32, Ordering};

/// Users keyed by username; the map entry enforces uniqueness.
#[derive(Default)]
pub struct MemoryCredentialStore {
    users: DashMap<String, User>,
    last_id: AtomicI32,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn insert(&self, data: &NewUser) -> Result<User, StoreError> {
        match self.users.entry(data.username.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateUsername),
            Entry::Vacant(slot) => {
                let user = User {
                    id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
                    username: data.username.clone(),
                    password_hash: data.password_hash.clone(),
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(username).map(|user| user.value().clone()))
    }
}

#[derive(Default)]
pub struct MemoryItemStore {
    items: DashMap<i32, Item>,
    last_id: AtomicI32,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, data: &CreateItemDTO) -> Result<Item, StoreError> {
        let item = Item {
            itemid: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            item_name: data.item_name.clone(),
            category: data.category.clone(),
            username: data.username.clone(),
            item_type: data.item_type.clone(),
        };
        self.items.insert(item.itemid, item.clone());
        Ok(item)
    }

    async fn list(&self, filter: &ItemFilter) -> Result<Vec<ItemSummary>, StoreError> {
        let mut items: Vec<ItemSummary> = self
            .items
            .iter()
            .filter(|item| filter.matches(&item.username, &item.item_type))
            .map(|item| ItemSummary::from(item.value()))
            .collect();
        items.sort_by_key(|item| item.itemid);
        Ok(items)
    }
}
