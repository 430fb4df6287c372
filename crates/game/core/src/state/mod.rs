//! Game state types.
//!
//! Ownership is a strict tree: a [`Character`] owns its [`Inventory`], which
//! owns its [`InventoryItem`]s. The roster that owns characters lives in
//! [`crate::game`].

mod character;
mod inventory;
mod item;
mod preset;

pub use character::{Character, RestoredCharacter};
pub use inventory::Inventory;
pub use item::InventoryItem;
pub use preset::{Preset, StatOffsets};
