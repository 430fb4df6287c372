//! Command-line notation for combatants and equipment.
//!
//! - Combatant: `<preset>:<name>`, e.g. `warrior:Conan`. A bare name is a
//!   plain adventurer.
//! - Item: `<owner>:<name>:<type>[:<attack>[:<defense>]]`, e.g.
//!   `Conan:Sword:weapon:3:0`. Missing bonuses default to 0.

use std::str::FromStr;

use game_core::{Character, InventoryItem, Preset};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown preset `{0}` (expected adventurer, warrior, mage, rogue or paladin)")]
    UnknownPreset(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("item `{0}` needs at least <owner>:<name>:<type>")]
    IncompleteItem(String),

    #[error("bonus `{0}` is not an integer")]
    InvalidBonus(String),

    #[error("both combatants are named `{0}`")]
    DuplicateName(String),
}

/// A combatant requested on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantSpec {
    pub preset: Preset,
    pub name: String,
}

impl CombatantSpec {
    pub fn build(&self) -> Character {
        Character::with_preset(self.name.clone(), self.preset)
    }
}

impl FromStr for CombatantSpec {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (preset, name) = match s.split_once(':') {
            Some((preset, name)) => {
                let preset = preset
                    .parse::<Preset>()
                    .map_err(|_| NotationError::UnknownPreset(preset.to_owned()))?;
                (preset, name)
            }
            None => (Preset::Adventurer, s),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(NotationError::EmptyName);
        }
        Ok(Self {
            preset,
            name: name.to_owned(),
        })
    }
}

/// Combatants must have distinct names so `--item` owners are unambiguous.
pub fn ensure_distinct(first: &CombatantSpec, second: &CombatantSpec) -> Result<(), NotationError> {
    if first.name == second.name {
        return Err(NotationError::DuplicateName(first.name.clone()));
    }
    Ok(())
}

/// An item to equip on a named combatant before the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub owner: String,
    pub item: InventoryItem,
}

impl FromStr for ItemSpec {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [owner, name, item_type, bonuses @ ..] = parts.as_slice() else {
            return Err(NotationError::IncompleteItem(s.to_owned()));
        };
        if owner.is_empty() || name.is_empty() {
            return Err(NotationError::EmptyName);
        }
        if bonuses.len() > 2 {
            return Err(NotationError::IncompleteItem(s.to_owned()));
        }

        let bonus = |index: usize| -> Result<i32, NotationError> {
            bonuses.get(index).map_or(Ok(0), |raw| {
                raw.parse()
                    .map_err(|_| NotationError::InvalidBonus((*raw).to_owned()))
            })
        };

        Ok(Self {
            owner: (*owner).to_owned(),
            item: InventoryItem::new(*name, *item_type).with_bonuses(bonus(0)?, bonus(1)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_preset_and_name() {
        let spec: CombatantSpec = "warrior:Conan".parse().unwrap();
        assert_eq!(spec.preset, Preset::Warrior);
        assert_eq!(spec.name, "Conan");
        assert_eq!(spec.build().attack(), 15);
    }

    #[test]
    fn bare_name_is_adventurer() {
        let spec: CombatantSpec = "Bob".parse().unwrap();
        assert_eq!(spec.preset, Preset::Adventurer);
    }

    #[test]
    fn rejects_bad_combatants() {
        assert_eq!(
            "bard:Ed".parse::<CombatantSpec>(),
            Err(NotationError::UnknownPreset("bard".into()))
        );
        assert_eq!(
            "mage:".parse::<CombatantSpec>(),
            Err(NotationError::EmptyName)
        );
    }

    #[test]
    fn shared_names_are_rejected() {
        let conan: CombatantSpec = "warrior:Conan".parse().unwrap();
        let twin: CombatantSpec = "mage:Conan".parse().unwrap();
        let merlin: CombatantSpec = "mage:Merlin".parse().unwrap();

        assert_eq!(
            ensure_distinct(&conan, &twin),
            Err(NotationError::DuplicateName("Conan".into()))
        );
        assert_eq!(ensure_distinct(&conan, &merlin), Ok(()));
    }

    #[test]
    fn parses_items_with_optional_bonuses() {
        let full: ItemSpec = "Conan:Sword:weapon:3:1".parse().unwrap();
        assert_eq!(full.owner, "Conan");
        assert_eq!(full.item.attack_bonus(), 3);
        assert_eq!(full.item.defense_bonus(), 1);

        let bare: ItemSpec = "Merlin:Hat:armor".parse().unwrap();
        assert_eq!(bare.item.attack_bonus(), 0);
        assert_eq!(bare.item.defense_bonus(), 0);
    }

    #[test]
    fn rejects_bad_items() {
        assert!(matches!(
            "Conan:Sword".parse::<ItemSpec>(),
            Err(NotationError::IncompleteItem(_))
        ));
        assert_eq!(
            "Conan:Sword:weapon:lots".parse::<ItemSpec>(),
            Err(NotationError::InvalidBonus("lots".into()))
        );
        assert!(matches!(
            "Conan:Sword:weapon:1:2:3".parse::<ItemSpec>(),
            Err(NotationError::IncompleteItem(_))
        ));
    }
}
