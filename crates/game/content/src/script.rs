//! Scripted sequences of player operations.
//!
//! A script names items by id; the runtime resolves them against the loaded
//! catalog before replaying.

use rpg_core::ItemId;

/// One player operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Attempt to pick up the catalog item.
    Pickup(ItemId),
    /// Apply the catalog item's healing.
    Heal(ItemId),
    /// Use the catalog item on the surroundings.
    Use(ItemId),
    /// Refresh the armour snapshot.
    RecalculateArmour,
    /// Take an incoming hit.
    TakeDamage(u32),
    /// Change the player's carrying capacity.
    SetCarryingCapacity(u32),
}

/// Ordered list of commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionScript {
    pub commands: Vec<Command>,
}

impl SessionScript {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Pick up then heal with each item, in order.
    ///
    /// Useful as a default when no script file is given: equipment is stored,
    /// consumables are healed in.
    pub fn collect_all(items: impl IntoIterator<Item = ItemId>) -> Self {
        let commands = items
            .into_iter()
            .flat_map(|id| [Command::Pickup(id), Command::Heal(id)])
            .chain([Command::RecalculateArmour])
            .collect();
        Self { commands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_all_pairs_pickup_and_heal() {
        let script = SessionScript::collect_all([ItemId(1), ItemId(2)]);
        assert_eq!(
            script.commands,
            vec![
                Command::Pickup(ItemId(1)),
                Command::Heal(ItemId(1)),
                Command::Pickup(ItemId(2)),
                Command::Heal(ItemId(2)),
                Command::RecalculateArmour,
            ]
        );
    }
}
