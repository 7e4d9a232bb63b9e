//! Item services - Elenco e creazione degli oggetti

use crate::core::{AppError, AppState};
use crate::dtos::{CreateItemDTO, ItemFilter, ItemListResponse, ItemQuery, StatusResponse};
use axum::{
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[instrument(skip_all)]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ItemQuery>, QueryRejection>, // /v1/item?username=..&item=..
) -> Result<Json<ItemListResponse>, AppError> {
    let Query(params) = query?;
    let filter = ItemFilter::from(params);
    debug!(?filter, "Listing items");

    let items = state.items.list(&filter).await?;
    info!("Found {} items", items.len());

    Ok(Json(ItemListResponse::new(items)))
}

#[instrument(skip_all)]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateItemDTO>, JsonRejection>, // JSON body
) -> Result<Json<StatusResponse>, AppError> {
    let Json(body) = body?;

    // validazione dei campi obbligatori dentro lo store, prima della scrittura
    let item = state.items.create(&body).await?;
    info!(itemid = item.itemid, owner = %item.username, "Item created");

    Ok(Json(StatusResponse::success("item created")))
}
