//! Character state and the two ways of building one.
//!
//! - [`Character::new`] / [`Character::with_preset`] is the gameplay path:
//!   default stat line plus the preset's offsets, empty inventory.
//! - [`Character::restore`] is the load path: it accepts already-resolved
//!   totals from a save and rebuilds a plain character around them.

use core::fmt;

use crate::combat::{self, AttackResult};
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::{InventoryError, RestoreError};

use super::{Inventory, InventoryItem, Preset};

/// A combatant with base stats, progress counters and equipped items.
///
/// # Invariants
///
/// - `attack() == base_attack + inventory.total_attack_bonus()`, saturating
/// - `defense() == base_defense + inventory.total_defense_bonus()`, saturating
/// - `level` never changes during play.
/// - `health` only decreases, and may drop below zero on the killing blow.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    preset: Preset,
    level: u32,
    health: f64,
    base_attack: i32,
    base_defense: i32,
    experience: u32,
    crit_chance: f64,
    crit_damage: f64,
    inventory: Inventory,
}

/// Already-resolved values read back from a save.
///
/// `attack` and `defense` are the flattened totals, items included.
#[derive(Clone, Debug, PartialEq)]
pub struct RestoredCharacter {
    pub name: String,
    pub level: u32,
    pub health: f64,
    pub attack: i32,
    pub defense: i32,
    pub experience: u32,
    pub items: Vec<InventoryItem>,
}

impl Character {
    /// Creates a plain character with the default stat line.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_preset(name, Preset::Adventurer)
    }

    /// Creates a character and applies the preset's offsets.
    pub fn with_preset(name: impl Into<String>, preset: Preset) -> Self {
        let offsets = preset.offsets();
        Self {
            name: name.into(),
            preset,
            level: GameConfig::BASE_LEVEL,
            health: GameConfig::BASE_HEALTH,
            base_attack: GameConfig::BASE_ATTACK + offsets.attack,
            base_defense: GameConfig::BASE_DEFENSE + offsets.defense,
            experience: 0,
            crit_chance: GameConfig::CRIT_CHANCE,
            crit_damage: GameConfig::CRIT_DAMAGE,
            inventory: Inventory::new(),
        }
    }

    pub fn warrior(name: impl Into<String>) -> Self {
        Self::with_preset(name, Preset::Warrior)
    }

    pub fn mage(name: impl Into<String>) -> Self {
        Self::with_preset(name, Preset::Mage)
    }

    pub fn rogue(name: impl Into<String>) -> Self {
        Self::with_preset(name, Preset::Rogue)
    }

    pub fn paladin(name: impl Into<String>) -> Self {
        Self::with_preset(name, Preset::Paladin)
    }

    /// Rebuilds a character from saved totals.
    ///
    /// This path is lossy: the preset is not recorded in saves, so the result
    /// is always an [`Preset::Adventurer`]. Items are re-equipped in saved
    /// order and the base stats are derived as `saved total - item bonuses`,
    /// so `attack()` and `defense()` come back equal to the saved values. This
    /// differs from a naive re-equip on top of the saved totals, which would
    /// count every bonus twice.
    ///
    /// # Errors
    ///
    /// [`RestoreError::StatOutOfRange`] if a saved total minus the item
    /// bonuses does not fit in an `i32`.
    pub fn restore(restored: RestoredCharacter) -> Result<Self, RestoreError> {
        let mut character = Self::new(restored.name);
        character.level = restored.level;
        character.health = restored.health;
        character.experience = restored.experience;
        for item in restored.items {
            character.inventory.equip(item);
        }

        let out_of_range = |name: &str, stat| RestoreError::StatOutOfRange {
            name: name.to_owned(),
            stat,
        };
        character.base_attack = restored
            .attack
            .checked_sub(character.inventory.total_attack_bonus())
            .ok_or_else(|| out_of_range(&character.name, "attack"))?;
        character.base_defense = restored
            .defense
            .checked_sub(character.inventory.total_defense_bonus())
            .ok_or_else(|| out_of_range(&character.name, "defense"))?;
        Ok(character)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn base_attack(&self) -> i32 {
        self.base_attack
    }

    pub fn base_defense(&self) -> i32 {
        self.base_defense
    }

    /// Base attack plus equipped item bonuses.
    pub fn attack(&self) -> i32 {
        self.base_attack
            .saturating_add(self.inventory.total_attack_bonus())
    }

    /// Base defense plus equipped item bonuses.
    pub fn defense(&self) -> i32 {
        self.base_defense
            .saturating_add(self.inventory.total_defense_bonus())
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn crit_chance(&self) -> f64 {
        self.crit_chance
    }

    pub fn crit_damage(&self) -> f64 {
        self.crit_damage
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_defeated(&self) -> bool {
        !self.is_alive()
    }

    pub fn equip_item(&mut self, item: InventoryItem) {
        self.inventory.equip(item);
    }

    pub fn unequip_item(&mut self, item: &InventoryItem) -> Result<InventoryItem, InventoryError> {
        self.inventory.unequip(item)
    }

    /// Attacks `target` once, drawing the crit flag and multiplier from `rng`.
    ///
    /// Mutates the target's health on a hit and this character's experience
    /// when the hit defeats the target.
    pub fn attack_enemy(
        &mut self,
        target: &mut Character,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> AttackResult {
        combat::resolve_attack(self, target, rng)
    }

    pub(crate) fn take_damage(&mut self, damage: f64) {
        self.health = combat::apply_damage(self.health, damage);
    }

    pub(crate) fn gain_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Level: {}, Health: {}, Attack: {}, Defense: {}, Experience: {}",
            self.name,
            self.level,
            self.health,
            self.attack(),
            self.defense(),
            self.experience
        )
    }
}
