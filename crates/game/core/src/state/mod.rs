//! Player-owned data: item values and the inventory that stores them.
//!
//! Items are plain values. The inventory keeps clones of whatever the player
//! accepted; it performs no checks of its own. Eligibility lives in
//! [`crate::player::Player`].
mod inventory;
mod item;

pub use inventory::Inventory;
pub use item::{Item, ItemBuilder, ItemId};
