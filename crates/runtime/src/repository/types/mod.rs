//! Shared types for repository layer.

mod save;

pub use save::{CharacterRecord, ItemRecord, SaveFile};
