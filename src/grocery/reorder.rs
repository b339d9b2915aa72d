//! Position reassignment for a caller-chosen ordering of items.
//!
//! Each id in `ordered_ids` gets its index as the new `position`. Ids that
//! match no item, negative ones included, are skipped but still use up their
//! index, so a matched id
//! always lands on its index in the input. Items that are not mentioned keep
//! their old `position`, which may now equal or interleave with the newly
//! assigned ones. Positions are not compacted.

use crate::store::{GroceryList, Item};
use std::collections::HashMap;

pub fn reorder(list: &mut GroceryList, ordered_ids: &[i64]) {
    let mut by_id: HashMap<u64, &mut Item> =
        list.items.iter_mut().map(|item| (item.id, item)).collect();

    for (position, &id) in (0u64..).zip(ordered_ids) {
        let Ok(id) = u64::try_from(id) else {
            continue;
        };
        if let Some(item) = by_id.get_mut(&id) {
            item.position = position;
        }
    }
}
