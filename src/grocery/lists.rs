//! Operations over the set of lists in a document.
use super::error::{validate_name, GroceryError};
use crate::store::{Document, GroceryList, ListSummary};

/// Id and name of every list, in stored order.
#[must_use]
pub fn list_summaries(doc: &Document) -> Vec<ListSummary> {
    doc.lists.iter().map(ListSummary::from).collect()
}

pub fn find_list(doc: &Document, list_id: u64) -> Result<&GroceryList, GroceryError> {
    doc.lists
        .iter()
        .find(|l| l.id == list_id)
        .ok_or(GroceryError::ListNotFound(list_id))
}

pub fn find_list_mut(doc: &mut Document, list_id: u64) -> Result<&mut GroceryList, GroceryError> {
    doc.lists
        .iter_mut()
        .find(|l| l.id == list_id)
        .ok_or(GroceryError::ListNotFound(list_id))
}

/// Append a new empty list. The document is left untouched on error.
pub fn create_list(doc: &mut Document, name: &str) -> Result<GroceryList, GroceryError> {
    let name = validate_name(name, "List")?;
    let id = next_id(doc.lists.iter().map(|l| l.id));
    let list = GroceryList::new(id, name);
    doc.lists.push(list.clone());
    Ok(list)
}

/// `max + 1` over the given ids, or 1 when there are none.
pub(crate) fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max.saturating_add(1))
}
