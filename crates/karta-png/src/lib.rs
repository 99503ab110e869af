//! PNG character-card codec.
//!
//! Character cards are JSON persona documents distributed inside a single
//! PNG avatar: the document rides in an ancillary `tEXt` chunk with the
//! keyword `chara`, base64-encoded. This crate reads an arbitrary PNG byte
//! stream to recover that document and writes a new, valid PNG that embeds
//! (or replaces) it while leaving the image untouched.
//!
//! # Wire format
//!
//! - 8-byte PNG signature, then a sequence of chunks.
//! - Chunk: `length:u32(BE)` + `type:4 ASCII bytes` + data + `crc:u32(BE)`,
//!   where the CRC-32 (IEEE polynomial) covers type and data.
//! - Character chunk: `type = tEXt`,
//!   `data = "chara" + 0x00 + base64(utf8(json))`, no line wrapping,
//!   inserted immediately before `IEND`.
//!
//! The codec is a pure transform: no I/O, no caching, no shared state.
//! Pixel-bearing chunks (`IHDR`, `PLTE`, `IDAT`, ...) are copied through
//! byte-identical and in their original order; this is never a
//! general-purpose PNG encoder.
//!
//! # Example
//!
//! ```no_run
//! let png = std::fs::read("avatar.png")?;
//!
//! // Embed a document, then read it back.
//! let card = karta_png::generate(&png, r#"{"name":"Alice"}"#)?;
//! let json = karta_png::parse(&card)?;
//! assert_eq!(json, r#"{"name":"Alice"}"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod chara;
mod chunk;
mod error;
mod read;
mod write;

pub use chara::{build_chunk, extract, is_character_chunk, replace, CHARA_KEYWORD};
pub use chunk::{Chunk, ChunkTag};
pub use error::{DecodeError, Error, PayloadError, Result};
pub use read::{read_chunks, PNG_SIGNATURE};
pub use write::write_chunks;

/// Recover the embedded character document from PNG bytes.
///
/// Walks the chunk stream (validating structure and CRCs), then decodes the
/// first `chara` `tEXt` chunk. Returns the raw JSON text.
pub fn parse(png_bytes: &[u8]) -> Result<String> {
    let chunks = read_chunks(png_bytes)?;
    extract(&chunks)
}

/// Produce new PNG bytes embedding (or replacing) a character document.
///
/// The input image must itself be a well-formed PNG; format and decode
/// errors propagate exactly as they would from [`parse`], never yielding a
/// corrupt output from a corrupt input.
pub fn generate(png_bytes: &[u8], json_text: &str) -> Result<Vec<u8>> {
    let chunks = read_chunks(png_bytes)?;
    let chunks = replace(chunks, json_text);
    Ok(write_chunks(&chunks))
}
