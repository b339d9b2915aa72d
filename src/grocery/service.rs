//! Read-modify-write driver over a [`Store`].
//!
//! Every operation loads the whole document, applies its change in memory and,
//! when something changed, saves the whole document back. Nothing is cached
//! between calls and concurrent mutations are not serialized: the last save
//! wins.

use super::error::GroceryError;
use super::items::{add_item, delete_item, list_items, toggle_item};
use super::lists::{create_list, find_list, find_list_mut, list_summaries};
use super::reorder::reorder;
use crate::store::{GroceryList, Item, ListSummary, Store};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct GroceryService {
    store: Arc<dyn Store>,
}

impl GroceryService {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list_summaries(&self) -> Result<Vec<ListSummary>, GroceryError> {
        let doc = self.store.load().await?;
        Ok(list_summaries(&doc))
    }

    pub async fn create_list(&self, name: &str) -> Result<GroceryList, GroceryError> {
        let mut doc = self.store.load().await?;
        let list = create_list(&mut doc, name)?;
        self.store.save(&doc).await?;
        info!(list.id = list.id, "Created list: {}", list.name);
        Ok(list)
    }

    pub async fn get_list(&self, list_id: u64) -> Result<GroceryList, GroceryError> {
        let doc = self.store.load().await?;
        Ok(find_list(&doc, list_id)?.clone())
    }

    pub async fn get_items(&self, list_id: u64) -> Result<Vec<Item>, GroceryError> {
        let doc = self.store.load().await?;
        Ok(list_items(find_list(&doc, list_id)?))
    }

    pub async fn add_item(&self, list_id: u64, name: &str) -> Result<Item, GroceryError> {
        let mut doc = self.store.load().await?;
        let item = add_item(find_list_mut(&mut doc, list_id)?, name)?;
        self.store.save(&doc).await?;
        info!(list.id = list_id, item.id = item.id, "Added item: {}", item.name);
        Ok(item)
    }

    pub async fn reorder_items(
        &self,
        list_id: u64,
        ordered_ids: &[i64],
    ) -> Result<(), GroceryError> {
        let mut doc = self.store.load().await?;
        reorder(find_list_mut(&mut doc, list_id)?, ordered_ids);
        self.store.save(&doc).await?;
        info!(list.id = list_id, count = ordered_ids.len(), "Reordered items");
        Ok(())
    }

    pub async fn toggle_item(&self, list_id: u64, item_id: u64) -> Result<Item, GroceryError> {
        let mut doc = self.store.load().await?;
        let item = toggle_item(find_list_mut(&mut doc, list_id)?, item_id)?;
        self.store.save(&doc).await?;
        info!(
            list.id = list_id,
            item.id = item_id,
            checked = item.checked,
            "Toggled item"
        );
        Ok(item)
    }

    pub async fn delete_item(&self, list_id: u64, item_id: u64) -> Result<(), GroceryError> {
        let mut doc = self.store.load().await?;
        delete_item(find_list_mut(&mut doc, list_id)?, item_id)?;
        self.store.save(&doc).await?;
        info!(list.id = list_id, item.id = item_id, "Deleted item");
        Ok(())
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
