//! Deterministic combat rules and data types shared across clients.
//!
//! `game-core` defines the canonical rules (characters, equipment, attack
//! resolution, battles) and exposes pure APIs that the runtime and the command
//! line reuse. Randomness is always injected through [`RngOracle`]; nothing in
//! this crate performs I/O or logging.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod game;
pub mod state;

pub use combat::{AttackOutcome, AttackResult, resolve_attack};
pub use config::GameConfig;
pub use env::{PcgRng, RngOracle, ScriptedRng};
pub use error::{BattleError, ErrorSeverity, GameError, InventoryError, RestoreError};
pub use game::{BattleAttack, BattleReport, Game, Side, run_battle};
pub use state::{Character, Inventory, InventoryItem, Preset, RestoredCharacter, StatOffsets};
