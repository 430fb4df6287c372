//! Battle two characters from an existing save.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Game, PcgRng};
use runtime::GameSession;

use crate::config::ArenaConfig;

/// Load a save and battle two of its characters
#[derive(Parser)]
pub struct Rematch {
    /// Save file to load
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Roster index of the combatant that strikes first
    #[arg(value_name = "FIRST")]
    first: usize,

    /// Roster index of the combatant that counter-attacks
    #[arg(value_name = "SECOND")]
    second: usize,

    /// RNG seed (overrides ARENA_SEED)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Round cap before the battle is a stalemate (overrides ARENA_MAX_ROUNDS)
    #[arg(long, value_name = "ROUNDS")]
    max_rounds: Option<u32>,

    /// Where to save the roster afterwards (overrides ARENA_SAVE_PATH)
    #[arg(short, long, value_name = "PATH")]
    save: Option<PathBuf>,
}

impl Rematch {
    pub fn execute(self, mut config: ArenaConfig) -> Result<()> {
        config.seed = self.seed.or(config.seed);
        config.max_battle_rounds = self.max_rounds.or(config.max_battle_rounds);
        let save_path = self.save.or(config.save_path.take());

        let seed = config.seed_or_random();
        tracing::info!("Battle seed: {}", seed);

        let mut session =
            GameSession::new(Game::with_config(config.game_config()), PcgRng::seeded(seed));
        session
            .load_from(&self.path)
            .with_context(|| format!("Failed to load game from {}", self.path.display()))?;

        let report = session
            .battle(self.first, self.second)
            .context("battle did not produce a winner")?;

        super::print_outcome(
            &report,
            (self.first, session.character(self.first)?),
            (self.second, session.character(self.second)?),
        );

        if let Some(path) = save_path {
            session
                .save_to(&path)
                .with_context(|| format!("Failed to save game to {}", path.display()))?;
        }

        Ok(())
    }
}
