//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Configuration for one `arena` invocation.
///
/// Command-line flags override every field after loading.
#[derive(Clone, Debug, Default)]
pub struct ArenaConfig {
    pub seed: Option<u64>,
    pub max_battle_rounds: Option<u32>,
    pub save_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl ArenaConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - RNG seed for battles (default: random)
    /// - `ARENA_MAX_ROUNDS` - Round cap before a battle is a stalemate (default: 10000)
    /// - `ARENA_SAVE_PATH` - Save file used when `--save` is omitted (default: none)
    /// - `ARENA_LOG_DIR` - Directory for `arena.log` (default: stderr only)
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("ARENA_SEED"),
            max_battle_rounds: read_env::<u32>("ARENA_MAX_ROUNDS").map(|rounds| rounds.max(1)),
            save_path: env::var("ARENA_SAVE_PATH").ok().map(PathBuf::from),
            log_dir: env::var("ARENA_LOG_DIR").ok().map(PathBuf::from),
        }
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn game_config(&self) -> GameConfig {
        self.max_battle_rounds
            .map(GameConfig::with_max_battle_rounds)
            .unwrap_or_default()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
