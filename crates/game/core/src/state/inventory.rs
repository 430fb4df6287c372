//! Equipped-item collection owned by a single character.

use crate::error::InventoryError;

use super::InventoryItem;

/// Ordered list of equipped items.
///
/// Insertion order is equip order. Duplicates are allowed and there are no
/// slot or type restrictions. Bonus totals are recomputed on every call and
/// never cached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item unconditionally.
    pub fn equip(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Removes the first item equal to `item` and returns it.
    pub fn unequip(&mut self, item: &InventoryItem) -> Result<InventoryItem, InventoryError> {
        let position = self
            .items
            .iter()
            .position(|held| held == item)
            .ok_or_else(|| InventoryError::NotEquipped {
                item: item.name().to_owned(),
            })?;
        Ok(self.items.remove(position))
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of attack bonuses, saturating at the `i32` bounds.
    pub fn total_attack_bonus(&self) -> i32 {
        saturating_total(self.items.iter().map(InventoryItem::attack_bonus))
    }

    /// Sum of defense bonuses, saturating at the `i32` bounds.
    pub fn total_defense_bonus(&self) -> i32 {
        saturating_total(self.items.iter().map(InventoryItem::defense_bonus))
    }
}

fn saturating_total(bonuses: impl Iterator<Item = i32>) -> i32 {
    let total: i64 = bonuses.map(i64::from).sum();
    total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a InventoryItem;
    type IntoIter = std::slice::Iter<'a, InventoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> InventoryItem {
        InventoryItem::new("Sword", "weapon").with_attack_bonus(3)
    }

    fn axe() -> InventoryItem {
        InventoryItem::new("Axe", "weapon").with_attack_bonus(7)
    }

    #[test]
    fn totals_follow_equip_and_unequip() {
        let mut inventory = Inventory::new();
        inventory.equip(sword());
        inventory.equip(axe());
        assert_eq!(inventory.total_attack_bonus(), 10);

        inventory.unequip(&sword()).unwrap();
        assert_eq!(inventory.total_attack_bonus(), 7);
        assert_eq!(inventory.items(), &[axe()]);
    }

    #[test]
    fn defense_total_sums_all_items() {
        let mut inventory = Inventory::new();
        inventory.equip(InventoryItem::new("Shield", "armor").with_defense_bonus(4));
        inventory.equip(InventoryItem::new("Helm", "armor").with_defense_bonus(2));
        assert_eq!(inventory.total_defense_bonus(), 6);
        assert_eq!(inventory.total_attack_bonus(), 0);
    }

    #[test]
    fn duplicates_are_removed_one_at_a_time() {
        let mut inventory = Inventory::new();
        inventory.equip(sword());
        inventory.equip(axe());
        inventory.equip(sword());

        inventory.unequip(&sword()).unwrap();
        assert_eq!(inventory.items(), &[axe(), sword()]);
        assert_eq!(inventory.total_attack_bonus(), 10);
    }

    #[test]
    fn unequip_missing_item_fails_without_change() {
        let mut inventory = Inventory::new();
        inventory.equip(axe());

        let err = inventory.unequip(&sword()).unwrap_err();
        assert_eq!(
            err,
            InventoryError::NotEquipped {
                item: "Sword".into()
            }
        );
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.total_attack_bonus(), 7);
    }

    #[test]
    fn empty_inventory_has_zero_totals() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.total_attack_bonus(), 0);
        assert_eq!(inventory.total_defense_bonus(), 0);
    }

    #[test]
    fn extreme_bonuses_saturate() {
        let mut inventory = Inventory::new();
        inventory.equip(InventoryItem::new("Godslayer", "weapon").with_bonuses(i32::MAX, i32::MIN));
        inventory.equip(InventoryItem::new("Pin", "weapon").with_bonuses(1, -1));
        assert_eq!(inventory.total_attack_bonus(), i32::MAX);
        assert_eq!(inventory.total_defense_bonus(), i32::MIN);

        // totals are exact whenever the true sum fits
        inventory.equip(InventoryItem::new("Anchor", "curse").with_bonuses(-10, 10));
        assert_eq!(inventory.total_attack_bonus(), i32::MAX - 9);
        assert_eq!(inventory.total_defense_bonus(), i32::MIN + 9);
    }
}
