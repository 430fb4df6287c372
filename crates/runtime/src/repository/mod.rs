//! Repository layer for persisted game data.
//!
//! Repositories move the whole roster in and out of a [`SaveFile`]; the
//! conversion to and from live characters lives with the record types.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepo;
pub use traits::SaveRepository;
pub use types::{CharacterRecord, ItemRecord, SaveFile};
