//! Equippable item value object.

/// An equippable item and the flat bonuses it grants while equipped.
///
/// Items are immutable once built. Names are not unique and `item_type` is a
/// free-form tag; neither is checked against any catalogue. Bonuses are
/// expected to be non-negative but are not validated, so a cursed item with a
/// negative bonus is representable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    name: String,
    item_type: String,
    attack_bonus: i32,
    defense_bonus: i32,
}

impl InventoryItem {
    /// Creates an item with no bonuses.
    pub fn new(name: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_type: item_type.into(),
            attack_bonus: 0,
            defense_bonus: 0,
        }
    }

    #[must_use]
    pub fn with_attack_bonus(mut self, attack_bonus: i32) -> Self {
        self.attack_bonus = attack_bonus;
        self
    }

    #[must_use]
    pub fn with_defense_bonus(mut self, defense_bonus: i32) -> Self {
        self.defense_bonus = defense_bonus;
        self
    }

    #[must_use]
    pub fn with_bonuses(self, attack_bonus: i32, defense_bonus: i32) -> Self {
        self.with_attack_bonus(attack_bonus)
            .with_defense_bonus(defense_bonus)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    pub fn attack_bonus(&self) -> i32 {
        self.attack_bonus
    }

    pub fn defense_bonus(&self) -> i32 {
        self.defense_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonuses_default_to_zero() {
        let item = InventoryItem::new("Cloak", "armor");
        assert_eq!(item.attack_bonus(), 0);
        assert_eq!(item.defense_bonus(), 0);
        assert_eq!(item.item_type(), "armor");
    }

    #[test]
    fn negative_bonuses_are_kept() {
        let item = InventoryItem::new("Cursed Blade", "weapon").with_bonuses(-2, 1);
        assert_eq!(item.attack_bonus(), -2);
        assert_eq!(item.defense_bonus(), 1);
    }
}
