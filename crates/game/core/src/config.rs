/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Upper bound on exchanges in a single battle before it is declared a
    /// stalemate.
    pub max_battle_rounds: u32,
}

impl GameConfig {
    // ===== character defaults =====
    pub const BASE_LEVEL: u32 = 1;
    pub const BASE_HEALTH: f64 = 100.0;
    pub const BASE_ATTACK: i32 = 10;
    pub const BASE_DEFENSE: i32 = 5;
    pub const CRIT_CHANCE: f64 = 0.1;
    pub const CRIT_DAMAGE: f64 = 1.5;

    // ===== combat tables =====
    /// Inclusive range of the damage multiplier rolled on every attack.
    pub const DAMAGE_ROLL_MIN: u32 = 1;
    pub const DAMAGE_ROLL_MAX: u32 = 10;
    /// Experience awarded for defeating an opponent.
    pub const DEFEAT_EXPERIENCE: u32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_BATTLE_ROUNDS: u32 = 10_000;

    pub fn new() -> Self {
        Self {
            max_battle_rounds: Self::DEFAULT_MAX_BATTLE_ROUNDS,
        }
    }

    pub fn with_max_battle_rounds(max_battle_rounds: u32) -> Self {
        Self { max_battle_rounds }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
