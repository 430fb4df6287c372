//! Character roster and battle orchestration.
//!
//! [`Game`] owns every character in registration order. Battles address
//! combatants by roster index; [`run_battle`] is the same loop for callers
//! that hold two characters directly.

use crate::combat::{self, AttackResult};
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::BattleError;
use crate::state::Character;

/// Which combatant of a battle an entry refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The combatant that strikes first every round.
    First,
    /// The combatant that counter-attacks.
    Second,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// One attack inside a battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAttack {
    pub round: u32,
    pub attacker: Side,
    pub result: AttackResult,
}

/// Summary of a finished battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub winner: Side,
    pub rounds: u32,
    pub attacks: Vec<BattleAttack>,
}

/// Ordered roster of characters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Game {
    characters: Vec<Character>,
    config: GameConfig,
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            characters: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Appends a character and returns its roster index.
    pub fn add_character(&mut self, character: Character) -> usize {
        self.characters.push(character);
        self.characters.len() - 1
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    pub fn character_mut(&mut self, index: usize) -> Option<&mut Character> {
        self.characters.get_mut(index)
    }

    /// First character registered under `name`.
    pub fn find(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name() == name)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Replaces the whole roster, returning the previous one.
    pub fn replace_roster(&mut self, characters: Vec<Character>) -> Vec<Character> {
        std::mem::replace(&mut self.characters, characters)
    }

    /// Battles two roster entries until one is defeated.
    pub fn battle(
        &mut self,
        first: usize,
        second: usize,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Result<BattleReport, BattleError> {
        let max_rounds = self.config.max_battle_rounds;
        let (a, b) = self.pair_mut(first, second)?;
        run_battle(a, b, max_rounds, rng)
    }

    /// Single attack between two roster entries, outside of a battle.
    pub fn attack(
        &mut self,
        attacker: usize,
        target: usize,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Result<AttackResult, BattleError> {
        let (attacker, target) = self.pair_mut(attacker, target)?;
        Ok(attacker.attack_enemy(target, rng))
    }

    fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<(&mut Character, &mut Character), BattleError> {
        let len = self.characters.len();
        for index in [first, second] {
            if index >= len {
                return Err(BattleError::UnknownCombatant { index });
            }
        }
        if first == second {
            return Err(BattleError::SameCombatant { index: first });
        }

        if first < second {
            let (head, tail) = self.characters.split_at_mut(second);
            Ok((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.characters.split_at_mut(first);
            Ok((&mut tail[0], &mut head[second]))
        }
    }
}

/// Alternating-turn battle loop.
///
/// Each round `first` attacks `second`; if `second` is still standing it
/// counter-attacks. The loop stops as soon as either side is defeated.
///
/// The winner is `first` if its health is positive when the loop ends and
/// `second` otherwise. When either side starts defeated no round is fought,
/// so two defeated combatants report `second` as the winner.
///
/// # Errors
///
/// - [`BattleError::Stalemate`] with `rounds: 0` if neither side can ever deal
///   damage, or with the number of rounds fought once `max_rounds` is reached.
pub fn run_battle(
    first: &mut Character,
    second: &mut Character,
    max_rounds: u32,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<BattleReport, BattleError> {
    let fighting = first.is_alive() && second.is_alive();
    if fighting
        && !combat::can_deal_damage(first, second)
        && !combat::can_deal_damage(second, first)
    {
        return Err(BattleError::Stalemate { rounds: 0 });
    }

    let mut rounds = 0;
    let mut attacks = Vec::new();

    while first.is_alive() && second.is_alive() {
        if rounds >= max_rounds {
            return Err(BattleError::Stalemate { rounds });
        }
        rounds += 1;

        let result = first.attack_enemy(second, rng);
        attacks.push(BattleAttack {
            round: rounds,
            attacker: Side::First,
            result,
        });

        if second.is_alive() {
            let result = second.attack_enemy(first, rng);
            attacks.push(BattleAttack {
                round: rounds,
                attacker: Side::Second,
                result,
            });
        }
    }

    let winner = if first.is_alive() {
        Side::First
    } else {
        Side::Second
    };

    Ok(BattleReport {
        winner,
        rounds,
        attacks,
    })
}
