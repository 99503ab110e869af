//! The `chara` character chunk codec.
//!
//! Character documents travel in a `tEXt` chunk whose keyword is `chara`
//! and whose text field is the base64 of the UTF-8 JSON document, with no
//! line wrapping. This module finds, decodes, builds and replaces that
//! chunk within an in-memory chunk stream.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use memchr::memchr;

use crate::chunk::{Chunk, ChunkTag};
use crate::error::{Error, PayloadError, Result};

/// Keyword identifying the character chunk inside a `tEXt` record.
pub const CHARA_KEYWORD: &[u8] = b"chara";

/// Split a `tEXt` chunk's data into keyword and text at the first null.
fn text_fields(chunk: &Chunk) -> Option<(&[u8], &[u8])> {
    if chunk.tag != ChunkTag::TEXT {
        return None;
    }
    let nul = memchr(0, &chunk.data)?;
    Some((&chunk.data[..nul], &chunk.data[nul + 1..]))
}

/// The base64 text field of a character chunk, if this is one.
fn character_payload(chunk: &Chunk) -> Option<&[u8]> {
    text_fields(chunk)
        .filter(|(keyword, _)| *keyword == CHARA_KEYWORD)
        .map(|(_, text)| text)
}

/// Whether a chunk is a `tEXt` chunk carrying the `chara` keyword.
pub fn is_character_chunk(chunk: &Chunk) -> bool {
    character_payload(chunk).is_some()
}

/// Extract the embedded character document from a chunk stream.
///
/// The first matching chunk is the payload of record. The text field is
/// base64-decoded, interpreted as UTF-8 and syntax-checked as JSON; the raw
/// JSON text is returned, interpreting the document schema is the caller's
/// job.
///
/// Fails with [`Error::MissingCharacter`] when no character chunk exists
/// and [`Error::InvalidCharacter`] when its payload cannot be decoded.
pub fn extract(chunks: &[Chunk]) -> Result<String> {
    let payload = chunks
        .iter()
        .find_map(character_payload)
        .ok_or(Error::MissingCharacter)?;

    let decoded = BASE64.decode(payload).map_err(PayloadError::from)?;
    let text = String::from_utf8(decoded).map_err(PayloadError::from)?;
    serde_json::from_str::<serde_json::Value>(&text).map_err(PayloadError::from)?;

    Ok(text)
}

/// Build the `tEXt` chunk carrying a character document.
pub fn build_chunk(json_text: &str) -> Chunk {
    let encoded = BASE64.encode(json_text.as_bytes());

    let mut data = Vec::with_capacity(CHARA_KEYWORD.len() + 1 + encoded.len());
    data.extend_from_slice(CHARA_KEYWORD);
    data.push(0);
    data.extend_from_slice(encoded.as_bytes());

    Chunk::new(ChunkTag::TEXT, data)
}

/// Replace the character document in a chunk stream.
///
/// Removes every existing character chunk, then inserts one freshly built
/// chunk immediately before `IEND`. All other chunks keep their bytes and
/// relative order.
pub fn replace(mut chunks: Vec<Chunk>, json_text: &str) -> Vec<Chunk> {
    chunks.retain(|chunk| !is_character_chunk(chunk));

    let at = chunks
        .iter()
        .position(|chunk| chunk.tag == ChunkTag::IEND)
        .unwrap_or(chunks.len());
    chunks.insert(at, build_chunk(json_text));

    chunks
}
