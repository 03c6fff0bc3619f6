//! Inventory storage and aggregate stats.

use super::item::{Item, ItemId};

/// Items a player has accepted, in pickup order.
///
/// Totals are recomputed from the contents on every call; nothing is cached.
/// There is no removal: once stored, an item stays.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<Item>,
    carrying_capacity: u32,
}

impl Inventory {
    pub fn new(carrying_capacity: u32) -> Self {
        Self {
            items: Vec::new(),
            carrying_capacity,
        }
    }

    /// Capacity fixed at construction. The player's own (settable) capacity
    /// is what pickups are checked against.
    pub fn carrying_capacity(&self) -> u32 {
        self.carrying_capacity
    }

    /// Appends unconditionally. Callers are expected to have run their own
    /// eligibility checks first.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// True if any stored item shares `item`'s identity.
    pub fn contains_item_with_id(&self, item: &Item) -> bool {
        self.contains_id(item.id())
    }

    pub fn contains_id(&self, id: ItemId) -> bool {
        self.items.iter().any(|stored| stored.id() == id)
    }

    pub fn total_armour_bonus(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, item| sum.saturating_add(item.armour_bonus()))
    }

    /// Widened so the sum of `u32` weights cannot overflow.
    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.weight())).sum()
    }

    /// Read-only view of the contents. Clone it to keep an owned copy.
    pub fn list_items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(crate::config::PlayerConfig::MAXIMUM_CARRYING_CAPACITY)
    }
}
