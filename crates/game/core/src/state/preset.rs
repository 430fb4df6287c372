//! Stat presets selecting a character's starting offsets.

/// Additive offsets applied to base attack and defense at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatOffsets {
    pub attack: i32,
    pub defense: i32,
}

impl StatOffsets {
    pub const fn new(attack: i32, defense: i32) -> Self {
        Self { attack, defense }
    }
}

/// Character class preset.
///
/// Presets only pick initial values; they carry no behavior of their own.
/// Restored characters always report [`Preset::Adventurer`] because saves
/// do not record the class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Preset {
    /// Plain character with the default stat line.
    #[default]
    Adventurer,
    /// +5 attack, +2 defense
    Warrior,
    /// +2 attack, +1 defense
    Mage,
    /// +3 attack, +1 defense
    Rogue,
    /// +4 attack, +3 defense
    Paladin,
}

impl Preset {
    pub const fn offsets(self) -> StatOffsets {
        match self {
            Self::Adventurer => StatOffsets::new(0, 0),
            Self::Warrior => StatOffsets::new(5, 2),
            Self::Mage => StatOffsets::new(2, 1),
            Self::Rogue => StatOffsets::new(3, 1),
            Self::Paladin => StatOffsets::new(4, 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("warrior".parse::<Preset>().unwrap(), Preset::Warrior);
        assert_eq!("PALADIN".parse::<Preset>().unwrap(), Preset::Paladin);
        assert!("necromancer".parse::<Preset>().is_err());
    }

    #[test]
    fn only_adventurer_has_no_offsets() {
        for preset in Preset::iter() {
            let offsets = preset.offsets();
            let is_plain = offsets == StatOffsets::default();
            assert_eq!(is_plain, preset == Preset::Adventurer, "{preset}");
        }
    }
}
