//! Combat resolution system.
//!
//! This module provides the functions that turn two characters and a handful
//! of random draws into damage, defeat and experience.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (crit + multiplier + damage)
//! - `roll_critical`: Critical-hit check against the attacker's crit chance
//! - `calculate_damage`: Raw damage minus the target's defense
//! - `apply_damage`: HP reduction (not clamped; may go negative)
//! - `can_deal_damage`: Whether any roll could ever land a hit

pub mod damage;
pub mod result;

pub use damage::{apply_damage, calculate_damage, can_deal_damage, roll_critical, roll_multiplier};
pub use result::{AttackOutcome, AttackResult, resolve_attack};
