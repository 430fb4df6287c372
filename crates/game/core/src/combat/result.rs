//! Combat result types and attack resolution.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::Character;

use super::damage::{calculate_damage, roll_critical, roll_multiplier};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Damage did not exceed the target's defense.
    Miss,
    /// Attack hit the target.
    Hit,
    /// Attack hit with the critical multiplier applied.
    Critical,
}

impl AttackOutcome {
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit | Self::Critical)
    }

    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }
}

/// Result of a single attack.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Whether the attack hit, missed, or was critical.
    pub outcome: AttackOutcome,

    /// Damage multiplier rolled for this attack.
    pub multiplier: u32,

    /// Damage dealt (None if miss).
    pub damage: Option<f64>,

    /// Target health after the attack.
    pub target_health: f64,

    /// True if this attack took the target from alive to defeated.
    pub defeated: bool,

    /// Experience awarded to the attacker.
    pub experience_gained: u32,
}

/// Resolve one attack from `attacker` against `target`.
///
/// Order of draws: critical check first, then the multiplier. The defeat
/// bonus is only awarded on the alive → defeated transition, so striking an
/// already defeated target never pays out twice.
pub fn resolve_attack(
    attacker: &mut Character,
    target: &mut Character,
    rng: &mut (impl RngOracle + ?Sized),
) -> AttackResult {
    let is_critical = roll_critical(attacker.crit_chance(), rng);
    let multiplier = roll_multiplier(rng);

    let damage = calculate_damage(
        multiplier,
        attacker.attack(),
        attacker.crit_damage(),
        is_critical,
        target.defense(),
    );

    if damage <= 0.0 {
        return AttackResult {
            outcome: AttackOutcome::Miss,
            multiplier,
            damage: None,
            target_health: target.health(),
            defeated: false,
            experience_gained: 0,
        };
    }

    let was_alive = target.is_alive();
    target.take_damage(damage);

    let defeated = was_alive && target.is_defeated();
    let experience_gained = if defeated {
        attacker.gain_experience(GameConfig::DEFEAT_EXPERIENCE);
        GameConfig::DEFEAT_EXPERIENCE
    } else {
        0
    };

    AttackResult {
        outcome: if is_critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        multiplier,
        damage: Some(damage),
        target_health: target.health(),
        defeated,
        experience_gained,
    }
}
