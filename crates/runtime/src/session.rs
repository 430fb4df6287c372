//! Game session: the roster, its RNG, and narration of everything that happens.
//!
//! [`GameSession`] is the entry point clients use. It forwards each request to
//! `game-core`, narrates the typed result through `tracing`, and owns the
//! save/load round trip.

use std::path::Path;

use game_core::{
    AttackOutcome, AttackResult, BattleReport, Character, Game, InventoryItem, RngOracle, Side,
};

use crate::api::{Result, RuntimeError};
use crate::repository::{FileSaveRepository, RepositoryError, SaveFile, SaveRepository};

/// A roster together with the random source its battles draw from.
pub struct GameSession<R> {
    game: Game,
    rng: R,
}

impl<R: RngOracle> GameSession<R> {
    pub fn new(game: Game, rng: R) -> Self {
        Self { game, rng }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn character(&self, index: usize) -> Result<&Character> {
        self.game
            .character(index)
            .ok_or(RuntimeError::UnknownCharacter { index })
    }

    /// Registers a character and returns its roster index.
    pub fn add_character(&mut self, character: Character) -> usize {
        tracing::info!(
            "{} ({}) joined the roster",
            character.name(),
            character.preset()
        );
        self.game.add_character(character)
    }

    pub fn equip(&mut self, index: usize, item: InventoryItem) -> Result<()> {
        let character = self
            .game
            .character_mut(index)
            .ok_or(RuntimeError::UnknownCharacter { index })?;
        tracing::info!("{} equipped {}", character.name(), item.name());
        character.equip_item(item);
        Ok(())
    }

    pub fn unequip(&mut self, index: usize, item: &InventoryItem) -> Result<InventoryItem> {
        let character = self
            .game
            .character_mut(index)
            .ok_or(RuntimeError::UnknownCharacter { index })?;
        match character.unequip_item(item) {
            Ok(removed) => {
                tracing::info!("{} unequipped {}", character.name(), removed.name());
                Ok(removed)
            }
            Err(err) => {
                tracing::warn!("{} could not unequip: {}", character.name(), err);
                Err(err.into())
            }
        }
    }

    /// One attack outside of a battle.
    pub fn attack(&mut self, attacker: usize, target: usize) -> Result<AttackResult> {
        let result = self.game.attack(attacker, target, &mut self.rng)?;
        narrate_attack(
            self.character(attacker)?.name(),
            self.character(target)?.name(),
            &result,
        );
        Ok(result)
    }

    /// Battles two roster entries and narrates every blow.
    pub fn battle(&mut self, first: usize, second: usize) -> Result<BattleReport> {
        let report = match self.game.battle(first, second, &mut self.rng) {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!("Battle aborted: {}", err);
                return Err(err.into());
            }
        };

        let first_name = self.character(first)?.name();
        let second_name = self.character(second)?.name();
        let name_of = |side: Side| match side {
            Side::First => first_name,
            Side::Second => second_name,
        };

        for attack in &report.attacks {
            narrate_attack(
                name_of(attack.attacker),
                name_of(attack.attacker.opponent()),
                &attack.result,
            );
        }
        tracing::info!("{} wins!", name_of(report.winner));
        tracing::debug!("Battle lasted {} rounds", report.rounds);

        Ok(report)
    }

    /// Writes the whole roster to `repo`.
    pub fn save(&self, repo: &(impl SaveRepository + ?Sized)) -> Result<()> {
        repo.save(&SaveFile::from_game(&self.game))?;
        Ok(())
    }

    /// Replaces the roster with the one stored in `repo`.
    ///
    /// Loaded characters are plain (no preset) and keep their saved totals.
    /// The previous roster is only dropped once every record was restored.
    pub fn load(&mut self, repo: &(impl SaveRepository + ?Sized)) -> Result<usize> {
        let save = repo.load()?;
        let characters = save.into_characters().map_err(RepositoryError::from)?;
        self.game.replace_roster(characters);
        Ok(self.game.len())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.save(&FileSaveRepository::new(path))?;
        tracing::info!("Game saved to {}", path.display());
        Ok(())
    }

    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let count = self.load(&FileSaveRepository::new(path))?;
        tracing::info!("Game loaded from {}", path.display());
        Ok(count)
    }
}

fn narrate_attack(attacker: &str, target: &str, result: &AttackResult) {
    match (result.outcome, result.damage) {
        (AttackOutcome::Miss, _) | (_, None) => {
            tracing::info!("{} missed the attack!", attacker);
        }
        (outcome, Some(damage)) => {
            let crit = if outcome.is_critical() {
                " (critical hit!)"
            } else {
                ""
            };
            tracing::info!(
                "{} attacked {} for {:.2} damage{}!",
                attacker,
                target,
                damage,
                crit
            );
        }
    }
    if result.defeated {
        tracing::info!("{} has been defeated!", target);
    }
}
