//! Karta - character-card PNG tooling library.
//!
//! This crate provides a unified interface to the Karta library ecosystem
//! for authoring and distributing character cards as PNG avatars.
//!
//! # Crates
//!
//! - [`karta_common`] - Common utilities (binary reading, CRC-32)
//! - [`karta_png`] - PNG character-card codec (`chara` tEXt chunk)
//! - [`karta_card`] - Character document model (V2 schema)
//!
//! # Example
//!
//! ```no_run
//! use karta::prelude::*;
//!
//! let png = std::fs::read("avatar.png")?;
//!
//! // Pull the embedded document out and interpret it.
//! let json = karta::png::parse(&png)?;
//! let card = CharacterCard::from_json(&json)?;
//! println!("Name: {}", card.name);
//!
//! // Write a modified card back into the same image.
//! let updated = karta::png::generate(&png, &card.to_v2_json()?)?;
//! std::fs::write("avatar.png", updated)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use karta_card as card;
pub use karta_common as common;
pub use karta_png as png;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use karta_card::CharacterCard;
    pub use karta_common::{crc, BinaryReader};
    pub use karta_png::{read_chunks, write_chunks, Chunk, ChunkTag};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
