//! Command implementations for `arena`
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod battle;
mod rematch;
mod show;

pub use battle::Battle;
pub use rematch::Rematch;
pub use show::Show;

use console::style;
use game_core::{BattleReport, Character, Side};

/// Print a character's summary line followed by its equipped items.
fn print_character(index: usize, character: &Character) {
    println!("{} {}", style(format!("[{index}]")).dim(), character);
    for item in character.inventory() {
        println!(
            "      - {} ({}) atk {:+} def {:+}",
            item.name(),
            item.item_type(),
            item.attack_bonus(),
            item.defense_bonus()
        );
    }
}

/// Print the outcome of a battle between two roster entries.
fn print_outcome(
    report: &BattleReport,
    (first_index, first): (usize, &Character),
    (second_index, second): (usize, &Character),
) {
    let winner = match report.winner {
        Side::First => first,
        Side::Second => second,
    };
    println!();
    println!(
        "{} {} after {} rounds",
        style("Winner:").bold().green(),
        style(winner.name()).bold(),
        report.rounds
    );
    let crits = report
        .attacks
        .iter()
        .filter(|attack| attack.result.outcome.is_critical())
        .count();
    let misses = report
        .attacks
        .iter()
        .filter(|attack| !attack.result.outcome.is_hit())
        .count();
    println!(
        "{} {} attacks, {} critical, {} missed",
        style("Blows:").bold().cyan(),
        report.attacks.len(),
        crits,
        misses
    );
    println!();
    println!("{}", style("Combatants:").bold().yellow());
    print_character(first_index, first);
    print_character(second_index, second);
}
