//! PNG chunk model.

use std::fmt;

use karta_common::crc;

/// A 4-byte ASCII chunk type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkTag(pub [u8; 4]);

impl ChunkTag {
    /// Image header, always the first chunk.
    pub const IHDR: Self = Self(*b"IHDR");
    /// Palette.
    pub const PLTE: Self = Self(*b"PLTE");
    /// Image data.
    pub const IDAT: Self = Self(*b"IDAT");
    /// Image trailer, always the last chunk.
    pub const IEND: Self = Self(*b"IEND");
    /// Uncompressed keyword/text pair.
    pub const TEXT: Self = Self(*b"tEXt");

    /// Get the raw tag bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Whether the chunk is ancillary (lowercase first letter) rather than
    /// critical to decoding the image.
    #[inline]
    pub const fn is_ancillary(&self) -> bool {
        self.0[0] & 0x20 != 0
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// A single PNG chunk.
///
/// Length and CRC are derived from the tag and data on demand rather than
/// stored; order among chunks in a stream is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk type tag.
    pub tag: ChunkTag,
    /// The chunk payload, excluding length, tag and CRC.
    pub data: Vec<u8>,
}

impl Chunk {
    /// Create a new chunk from a tag and payload.
    pub fn new(tag: ChunkTag, data: Vec<u8>) -> Self {
        Self { tag, data }
    }

    /// Length of the chunk payload in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the chunk payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// CRC-32 over the tag and payload, as stored on the wire.
    #[inline]
    pub fn crc(&self) -> u32 {
        crc::chunk_crc(self.tag.as_bytes(), &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_display() {
        assert_eq!(ChunkTag::IHDR.to_string(), "IHDR");
        assert_eq!(ChunkTag::TEXT.to_string(), "tEXt");
        assert_eq!(ChunkTag([0x00, b'A', b'B', 0xFF]).to_string(), "\\x00AB\\xff");
    }

    #[test]
    fn test_ancillary_bit() {
        assert!(!ChunkTag::IHDR.is_ancillary());
        assert!(!ChunkTag::IDAT.is_ancillary());
        assert!(ChunkTag::TEXT.is_ancillary());
    }

    #[test]
    fn test_iend_crc() {
        let chunk = Chunk::new(ChunkTag::IEND, Vec::new());
        assert_eq!(chunk.crc(), 0xAE42_6082);
    }
}
