//! ItemRepository - Repository MySQL per gli oggetti

use super::{ItemStore, StoreError};
use crate::dtos::{CreateItemDTO, ItemFilter};
use crate::entities::{Item, ItemSummary};
use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

pub struct ItemRepository {
    connection_pool: MySqlPool,
}

impl ItemRepository {
    pub fn new(connection_pool: MySqlPool) -> ItemRepository {
        Self { connection_pool }
    }
}

/// Builds the listing statement; every filter value is a bound parameter.
fn list_query(filter: &ItemFilter) -> QueryBuilder<'_, MySql> {
    let mut query = QueryBuilder::new("SELECT itemid, item_name, category FROM items");
    let mut separator = " WHERE ";

    if let Some(owner) = filter.owner.as_deref() {
        query.push(separator).push("username = ").push_bind(owner);
        separator = " AND ";
    }
    if let Some(item_type) = filter.item_type.as_deref() {
        query.push(separator).push("item_type = ").push_bind(item_type);
    }

    query.push(" ORDER BY itemid");
    query
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn insert(&self, data: &CreateItemDTO) -> Result<Item, StoreError> {
        let result = sqlx::query(
            "INSERT INTO items (item_name, category, username, item_type) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.item_name)
        .bind(&data.category)
        .bind(&data.username)
        .bind(&data.item_type)
        .execute(&self.connection_pool)
        .await?;

        Ok(Item {
            itemid: result.last_insert_id() as i32,
            item_name: data.item_name.clone(),
            category: data.category.clone(),
            username: data.username.clone(),
            item_type: data.item_type.clone(),
        })
    }

    async fn list(&self, filter: &ItemFilter) -> Result<Vec<ItemSummary>, StoreError> {
        let items = list_query(filter)
            .build_query_as::<ItemSummary>()
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(items)
    }
}
