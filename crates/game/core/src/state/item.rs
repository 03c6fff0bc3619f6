//! Item values and their identity key.

/// Identity of a pickup. Two items with the same id are the same item for
/// uniqueness purposes, whatever their other fields say.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A pickup-able game object.
///
/// Immutable once built; construct through [`Item::builder`].
///
/// `PartialEq` compares every field. Ownership checks for unique items must
/// go through [`Item::id`] / [`Item::same_identity`] instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: ItemId,
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    weight: u32,
    #[cfg_attr(feature = "serde", serde(default, alias = "armour"))]
    armour_bonus: u32,
    #[cfg_attr(feature = "serde", serde(default, alias = "heal"))]
    heal_amount: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    rare: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    unique: bool,
}

impl Item {
    /// Create a builder with neutral defaults.
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn armour_bonus(&self) -> u32 {
        self.armour_bonus
    }

    pub fn heal_amount(&self) -> u32 {
        self.heal_amount
    }

    pub fn is_rare(&self) -> bool {
        self.rare
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Items that heal are consumed on pickup and never stored.
    pub fn is_consumable(&self) -> bool {
        self.heal_amount > 0
    }

    /// Identity comparison used for unique-item checks.
    pub fn same_identity(&self, other: &Item) -> bool {
        self.id == other.id
    }
}

/// Builder for [`Item`].
///
/// Defaults: id 0, name "Item", all numbers 0, not rare, not unique.
#[derive(Clone, Debug)]
pub struct ItemBuilder {
    id: ItemId,
    name: String,
    weight: u32,
    armour_bonus: u32,
    heal_amount: u32,
    rare: bool,
    unique: bool,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            name: String::from("Item"),
            weight: 0,
            armour_bonus: 0,
            heal_amount: 0,
            rare: false,
            unique: false,
        }
    }
}

impl ItemBuilder {
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = ItemId(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_armour(mut self, armour_bonus: u32) -> Self {
        self.armour_bonus = armour_bonus;
        self
    }

    pub fn with_heal(mut self, heal_amount: u32) -> Self {
        self.heal_amount = heal_amount;
        self
    }

    pub fn rare(mut self, rare: bool) -> Self {
        self.rare = rare;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn build(self) -> Item {
        Item {
            id: self.id,
            name: self.name,
            weight: self.weight,
            armour_bonus: self.armour_bonus,
            heal_amount: self.heal_amount,
            rare: self.rare,
            unique: self.unique,
        }
    }
}

impl From<ItemBuilder> for Item {
    fn from(builder: ItemBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_other_fields() {
        let sword = Item::builder().with_id(7).with_name("Sword").with_weight(10).build();
        let renamed = Item::builder().with_id(7).with_name("Rusty Sword").build();

        assert!(sword.same_identity(&renamed));
        assert_ne!(sword, renamed);
    }

    #[test]
    fn consumable_only_when_heal_is_positive() {
        assert!(!Item::builder().build().is_consumable());
        assert!(Item::builder().with_heal(1).build().is_consumable());
    }

    #[test]
    fn builder_defaults() {
        let item = Item::builder().build();
        assert_eq!(item.id(), ItemId(0));
        assert_eq!(item.name(), "Item");
        assert_eq!(item.weight(), 0);
        assert!(!item.is_rare());
        assert!(!item.is_unique());
    }
}
