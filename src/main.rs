//! Karta CLI - Command-line tool for character-card PNG files.
//!
//! This is the main entry point for the Karta command-line application.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use karta::prelude::*;

/// Karta - embed and extract character cards in PNG avatars
#[derive(Parser)]
#[command(name = "karta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the embedded character document from a PNG
    Extract {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Embed a character document into a PNG
    Embed {
        /// Input PNG file (the avatar image)
        #[arg(short, long)]
        input: PathBuf,

        /// Card document JSON file
        #[arg(short, long)]
        card: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the chunk stream of a PNG file
    Info {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, output, pretty } => {
            cmd_extract(&input, output.as_deref(), pretty)?;
        }
        Commands::Embed { input, card, output } => {
            cmd_embed(&input, &card, &output)?;
        }
        Commands::Info { input } => {
            cmd_info(&input)?;
        }
    }

    Ok(())
}

fn cmd_extract(input: &PathBuf, output: Option<&std::path::Path>, pretty: bool) -> Result<()> {
    let png = fs::read(input).context("Failed to read input file")?;
    let json = karta::png::parse(&png).context("Failed to extract character document")?;

    let text = if pretty {
        let value: serde_json::Value = serde_json::from_str(&json)?;
        serde_json::to_string_pretty(&value)?
    } else {
        json
    };

    match output {
        Some(path) => {
            fs::write(path, text).context("Failed to write output file")?;
            println!("Document written to {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn cmd_embed(input: &PathBuf, card: &PathBuf, output: &PathBuf) -> Result<()> {
    let png = fs::read(input).context("Failed to read input PNG")?;
    let json = fs::read_to_string(card).context("Failed to read card file")?;

    // Validate the document against the card schema before embedding.
    let card = CharacterCard::from_json(&json).context("Card file is not a valid document")?;

    let bytes = karta::png::generate(&png, &json).context("Failed to embed document")?;
    fs::write(output, bytes).context("Failed to write output file")?;

    println!("Embedded \"{}\" into {}", card.name, output.display());

    Ok(())
}

fn cmd_info(input: &PathBuf) -> Result<()> {
    let png = fs::read(input).context("Failed to read input file")?;
    let chunks = read_chunks(&png).context("Failed to parse PNG")?;

    for chunk in &chunks {
        println!("{} {:>10} {:#010x}", chunk.tag, chunk.len(), chunk.crc());
    }

    let has_card = chunks.iter().any(karta::png::is_character_chunk);
    println!(
        "\n{} chunks, character document: {}",
        chunks.len(),
        if has_card { "present" } else { "absent" }
    );

    Ok(())
}
