//! Persisted save format.
//!
//! ```json
//! {
//!   "characters": [
//!     {
//!       "name": "Conan", "level": 1, "health": 100.0,
//!       "attack": 18, "defense": 7, "experience": 0,
//!       "inventory": [
//!         { "name": "Sword", "type": "weapon", "attack_bonus": 3, "defense_bonus": 0 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `attack` and `defense` are the flattened totals at save time. There is no
//! version field and the character preset is not recorded.

use game_core::{Character, Game, InventoryItem, RestoreError, RestoredCharacter};
use serde::{Deserialize, Serialize};

/// Top-level save record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
    pub characters: Vec<CharacterRecord>,
}

/// One character as written to disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub level: u32,
    pub health: f64,
    pub attack: i32,
    pub defense: i32,
    pub experience: u32,
    pub inventory: Vec<ItemRecord>,
}

/// One equipped item as written to disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub attack_bonus: i32,
    pub defense_bonus: i32,
}

impl SaveFile {
    /// Snapshot the whole roster.
    pub fn from_game(game: &Game) -> Self {
        Self {
            characters: game.characters().iter().map(CharacterRecord::from).collect(),
        }
    }

    /// Rebuild characters through the lossy restore path.
    ///
    /// Fails on the first record whose totals cannot be decomposed.
    pub fn into_characters(self) -> Result<Vec<Character>, RestoreError> {
        self.characters
            .into_iter()
            .map(Character::try_from)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl From<&Character> for CharacterRecord {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name().to_owned(),
            level: character.level(),
            health: character.health(),
            attack: character.attack(),
            defense: character.defense(),
            experience: character.experience(),
            inventory: character.inventory().iter().map(ItemRecord::from).collect(),
        }
    }
}

impl TryFrom<CharacterRecord> for Character {
    type Error = RestoreError;

    fn try_from(record: CharacterRecord) -> Result<Self, Self::Error> {
        Character::restore(RestoredCharacter {
            name: record.name,
            level: record.level,
            health: record.health,
            attack: record.attack,
            defense: record.defense,
            experience: record.experience,
            items: record.inventory.into_iter().map(InventoryItem::from).collect(),
        })
    }
}

impl From<&InventoryItem> for ItemRecord {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: item.name().to_owned(),
            item_type: item.item_type().to_owned(),
            attack_bonus: item.attack_bonus(),
            defense_bonus: item.defense_bonus(),
        }
    }
}

impl From<ItemRecord> for InventoryItem {
    fn from(record: ItemRecord) -> Self {
        InventoryItem::new(record.name, record.item_type)
            .with_bonuses(record.attack_bonus, record.defense_bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Preset;

    fn armed_warrior() -> Character {
        let mut conan = Character::warrior("Conan");
        conan.equip_item(InventoryItem::new("Sword", "weapon").with_attack_bonus(3));
        conan
    }

    #[test]
    fn record_flattens_derived_stats() {
        let record = CharacterRecord::from(&armed_warrior());
        assert_eq!(record.attack, 18);
        assert_eq!(record.defense, 7);
        assert_eq!(record.inventory.len(), 1);
        assert_eq!(record.inventory[0].item_type, "weapon");
    }

    #[test]
    fn json_uses_documented_keys() {
        let mut game = Game::new();
        game.add_character(armed_warrior());

        let value = serde_json::to_value(SaveFile::from_game(&game)).unwrap();
        let character = &value["characters"][0];

        for key in [
            "name",
            "level",
            "health",
            "attack",
            "defense",
            "experience",
            "inventory",
        ] {
            assert!(character.get(key).is_some(), "missing {key}");
        }
        let item = &character["inventory"][0];
        assert_eq!(item["type"], "weapon");
        assert_eq!(item["attack_bonus"], 3);
        assert_eq!(item["defense_bonus"], 0);
        assert!(item.get("item_type").is_none());
    }

    #[test]
    fn restore_is_plain_and_keeps_totals() {
        let record = CharacterRecord::from(&armed_warrior());
        let restored = Character::try_from(record.clone()).unwrap();

        assert_eq!(restored.preset(), Preset::Adventurer);
        assert_eq!(restored.attack(), record.attack);
        assert_eq!(restored.defense(), record.defense);
        assert_eq!(CharacterRecord::from(&restored), record);
    }

    #[test]
    fn integer_health_is_accepted() {
        let json = r#"{"characters":[{"name":"Old","level":2,"health":100,
            "attack":10,"defense":5,"experience":30,"inventory":[]}]}"#;
        let save: SaveFile = serde_json::from_str(json).unwrap();
        let characters = save.into_characters().unwrap();
        assert_eq!(characters[0].health(), 100.0);
        assert_eq!(characters[0].level(), 2);
        assert_eq!(characters[0].experience(), 30);
    }

    #[test]
    fn out_of_range_totals_are_rejected() {
        let json = r#"{"characters":[{"name":"Broken","level":1,"health":100.0,
            "attack":-2147483648,"defense":5,"experience":0,
            "inventory":[{"name":"Pin","type":"weapon","attack_bonus":1,"defense_bonus":0}]}]}"#;
        let save: SaveFile = serde_json::from_str(json).unwrap();

        assert_eq!(
            save.into_characters(),
            Err(RestoreError::StatOutOfRange {
                name: "Broken".into(),
                stat: "attack",
            })
        );
    }
}
