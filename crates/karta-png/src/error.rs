//! Error types for the PNG character-card codec.

use thiserror::Error;

use crate::chunk::ChunkTag;

/// Errors produced by the codec.
///
/// A closed set of four kinds so callers can match exhaustively on the
/// failure class; structural and payload detail lives in the nested
/// [`DecodeError`] and [`PayloadError`] enums.
#[derive(Debug, Error)]
pub enum Error {
    /// The input does not begin with the 8-byte PNG signature.
    #[error("not a PNG file: invalid signature {actual:02x?}")]
    Format { actual: Vec<u8> },

    /// The chunk stream is structurally invalid.
    #[error("malformed PNG chunk stream: {0}")]
    Decode(#[from] DecodeError),

    /// The stream is a well-formed PNG but carries no character chunk.
    #[error("no `tEXt` chunk with keyword `chara` present")]
    MissingCharacter,

    /// A character chunk exists but its payload cannot be decoded.
    #[error("invalid character payload: {0}")]
    InvalidCharacter(#[from] PayloadError),
}

/// Structural failures while walking a chunk stream.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Chunk header, data or CRC cut off by the end of the buffer.
    #[error("{0}")]
    Truncated(#[from] karta_common::Error),

    /// Declared data length reads past the end of the buffer.
    #[error("declared length {length} of `{tag}` chunk overruns the buffer ({available} bytes left)")]
    LengthOverrun {
        tag: ChunkTag,
        length: u32,
        available: usize,
    },

    /// Stored CRC does not match the CRC computed over tag and data.
    #[error("CRC-32 mismatch in `{tag}` chunk: stored {stored:#010x}, computed {computed:#010x}")]
    CrcMismatch {
        tag: ChunkTag,
        stored: u32,
        computed: u32,
    },
}

/// Failures while decoding a character chunk payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Payload after the keyword separator is not valid base64.
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not valid UTF-8.
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Decoded text is not well-formed JSON.
    #[error("payload is not well-formed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
