//! Read and inspect a save file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use runtime::{FileSaveRepository, SaveRepository};

/// Print every character stored in a save file
#[derive(Parser)]
pub struct Show {
    /// Save file to read
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One summary line per character plus its items
    Summary,
    /// The raw save record as JSON
    Json,
}

impl Show {
    pub fn execute(self) -> Result<()> {
        let save = FileSaveRepository::new(&self.path)
            .load()
            .with_context(|| format!("Failed to read save file: {}", self.path.display()))?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&save)?);
            }
            OutputFormat::Summary => {
                let characters = save
                    .into_characters()
                    .with_context(|| format!("Invalid save file: {}", self.path.display()))?;
                println!(
                    "{} {}",
                    style("Save File:").bold().cyan(),
                    self.path.display()
                );
                println!(
                    "{} {}",
                    style("Characters:").bold().cyan(),
                    characters.len()
                );
                println!();
                for (index, character) in characters.iter().enumerate() {
                    super::print_character(index, character);
                }
            }
        }

        Ok(())
    }
}
