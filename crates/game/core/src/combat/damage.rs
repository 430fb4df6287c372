//! Damage calculation and application.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::Character;

/// Roll the critical-hit check for one attack.
pub fn roll_critical(crit_chance: f64, rng: &mut (impl RngOracle + ?Sized)) -> bool {
    rng.chance(crit_chance)
}

/// Roll the damage multiplier for one attack.
pub fn roll_multiplier(rng: &mut (impl RngOracle + ?Sized)) -> u32 {
    rng.range(GameConfig::DAMAGE_ROLL_MIN, GameConfig::DAMAGE_ROLL_MAX)
}

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// raw = multiplier × attack × (crit_damage if critical else 1)
/// damage = raw - defense
/// ```
///
/// A result `<= 0` means the attack misses. No minimum is applied.
pub fn calculate_damage(
    multiplier: u32,
    attack: i32,
    crit_damage: f64,
    is_critical: bool,
    defense: i32,
) -> f64 {
    let scale = if is_critical { crit_damage } else { 1.0 };
    f64::from(multiplier) * f64::from(attack) * scale - f64::from(defense)
}

/// Apply damage to current HP.
///
/// Health is not clamped, so a killing blow can leave it negative.
pub fn apply_damage(current_hp: f64, damage: f64) -> f64 {
    current_hp - damage
}

/// Returns true if some combination of rolls lets `attacker` hurt `target`.
///
/// Used to detect battles that could never end.
pub fn can_deal_damage(attacker: &Character, target: &Character) -> bool {
    let crit_damage = if attacker.crit_chance() > 0.0 {
        attacker.crit_damage()
    } else {
        1.0
    };
    [GameConfig::DAMAGE_ROLL_MIN, GameConfig::DAMAGE_ROLL_MAX]
        .into_iter()
        .flat_map(|multiplier| {
            [false, true].map(|critical| {
                calculate_damage(
                    multiplier,
                    attacker.attack(),
                    crit_damage,
                    critical,
                    target.defense(),
                )
            })
        })
        .any(|damage| damage > 0.0)
}
