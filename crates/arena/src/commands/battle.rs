//! Fight a fresh battle between two combatants given on the command line.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use game_core::{Game, PcgRng};
use runtime::GameSession;

use crate::config::ArenaConfig;
use crate::roster::{self, CombatantSpec, ItemSpec};

/// Fight a battle between two new characters
#[derive(Parser)]
pub struct Battle {
    /// Combatant that strikes first each round (e.g., warrior:Conan)
    #[arg(value_name = "FIRST")]
    first: CombatantSpec,

    /// Combatant that counter-attacks (e.g., mage:Merlin)
    #[arg(value_name = "SECOND")]
    second: CombatantSpec,

    /// Equip an item before the battle: <owner>:<name>:<type>[:<attack>[:<defense>]]
    #[arg(short, long = "item", value_name = "ITEM")]
    items: Vec<ItemSpec>,

    /// RNG seed (overrides ARENA_SEED)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Round cap before the battle is a stalemate (overrides ARENA_MAX_ROUNDS)
    #[arg(long, value_name = "ROUNDS")]
    max_rounds: Option<u32>,

    /// Save the roster after the battle (overrides ARENA_SAVE_PATH)
    #[arg(short, long, value_name = "PATH")]
    save: Option<PathBuf>,
}

impl Battle {
    pub fn execute(self, mut config: ArenaConfig) -> Result<()> {
        roster::ensure_distinct(&self.first, &self.second)?;

        config.seed = self.seed.or(config.seed);
        config.max_battle_rounds = self.max_rounds.or(config.max_battle_rounds);
        let save_path = self.save.or(config.save_path.take());

        let seed = config.seed_or_random();
        tracing::info!("Battle seed: {}", seed);

        let mut session =
            GameSession::new(Game::with_config(config.game_config()), PcgRng::seeded(seed));
        let first = session.add_character(self.first.build());
        let second = session.add_character(self.second.build());

        for spec in self.items {
            let owner = if spec.owner == self.first.name {
                first
            } else if spec.owner == self.second.name {
                second
            } else {
                bail!(
                    "item `{}` belongs to `{}`, who is not in this battle",
                    spec.item.name(),
                    spec.owner
                );
            };
            session.equip(owner, spec.item)?;
        }

        let report = session
            .battle(first, second)
            .context("battle did not produce a winner")?;

        super::print_outcome(
            &report,
            (first, session.character(first)?),
            (second, session.character(second)?),
        );

        if let Some(path) = save_path {
            session
                .save_to(&path)
                .with_context(|| format!("Failed to save game to {}", path.display()))?;
        }

        Ok(())
    }
}
