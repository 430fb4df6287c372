//! Runtime orchestration for the combat simulator.
//!
//! This crate wires the pure rules from `game-core` to the outside world:
//! narration through `tracing` and persistence through repositories.
//! Consumers embed [`GameSession`] to manage a roster, run battles, and save
//! or restore the whole game.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session type and its narration
//! - [`api`] exposes the error types downstream clients interact with
//! - [`repository`] provides the save format and storage adapters
pub mod api;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use repository::{
    CharacterRecord, FileSaveRepository, InMemorySaveRepo, ItemRecord, RepositoryError,
    SaveFile, SaveRepository,
};
pub use session::GameSession;
