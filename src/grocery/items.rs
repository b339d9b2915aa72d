//! Operations over the items of one list.
use super::error::{validate_name, GroceryError};
use super::lists::next_id;
use crate::store::{GroceryList, Item};

/// Items in display order: ascending `position`, ties kept in stored order.
#[must_use]
pub fn list_items(list: &GroceryList) -> Vec<Item> {
    let mut items = list.items.clone();
    // sort_by_key is stable
    items.sort_by_key(|item| item.position);
    items
}

pub fn find_item(list: &GroceryList, item_id: u64) -> Result<&Item, GroceryError> {
    list.items
        .iter()
        .find(|i| i.id == item_id)
        .ok_or(GroceryError::ItemNotFound {
            list_id: list.id,
            item_id,
        })
}

/// Append an unchecked item at the end of the display order.
pub fn add_item(list: &mut GroceryList, name: &str) -> Result<Item, GroceryError> {
    let name = validate_name(name, "Item")?;
    let item = Item {
        id: next_id(list.items.iter().map(|i| i.id)),
        name: name.to_string(),
        checked: false,
        position: list
            .items
            .iter()
            .map(|i| i.position)
            .max()
            .map_or(0, |max| max.saturating_add(1)),
    };
    list.items.push(item.clone());
    Ok(item)
}

/// Flip `checked` and return the updated item.
pub fn toggle_item(list: &mut GroceryList, item_id: u64) -> Result<Item, GroceryError> {
    let list_id = list.id;
    let item = list
        .items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or(GroceryError::ItemNotFound { list_id, item_id })?;
    item.checked = !item.checked;
    Ok(item.clone())
}

pub fn delete_item(list: &mut GroceryList, item_id: u64) -> Result<(), GroceryError> {
    let idx = list
        .items
        .iter()
        .position(|i| i.id == item_id)
        .ok_or(GroceryError::ItemNotFound {
            list_id: list.id,
            item_id,
        })?;
    list.items.remove(idx);
    Ok(())
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod items_tests;
