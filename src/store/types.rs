use serde::{Deserialize, Serialize};

/// Name given to the list created when the store is first initialized.
pub const DEFAULT_LIST_NAME: &str = "Groceries";

/// The whole persisted state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub lists: Vec<GroceryList>,
}

impl Document {
    /// Document written on first access when no backing file exists yet.
    #[must_use]
    pub fn with_default_list() -> Self {
        Self {
            lists: vec![GroceryList::new(1, DEFAULT_LIST_NAME)],
        }
    }
}

/// A named list of grocery items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroceryList {
    pub id: u64,
    pub name: String,
    pub items: Vec<Item>,
}

impl GroceryList {
    #[must_use]
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            items: Vec::new(),
        }
    }
}

/// A single entry in a grocery list.
///
/// `position` orders items for display (ascending). It is not required to be
/// unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub checked: bool,
    pub position: u64,
}

/// List metadata without its items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub id: u64,
    pub name: String,
}

impl From<&GroceryList> for ListSummary {
    fn from(list: &GroceryList) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
        }
    }
}
