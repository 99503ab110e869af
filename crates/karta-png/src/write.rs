//! Chunk stream writing.

use crate::chunk::Chunk;
use crate::read::PNG_SIGNATURE;

/// Serialize an ordered chunk sequence into a PNG byte stream.
///
/// Emits the 8-byte signature, then each chunk in order: big-endian data
/// length, type tag, data, and a freshly computed big-endian CRC-32 over
/// tag and data. This is a total function over any chunk list; semantic
/// chunk ordering is the caller's responsibility.
pub fn write_chunks(chunks: &[Chunk]) -> Vec<u8> {
    let body: usize = chunks.iter().map(|c| 12 + c.len()).sum();
    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + body);

    out.extend_from_slice(&PNG_SIGNATURE);
    for chunk in chunks {
        out.extend_from_slice(&(chunk.len() as u32).to_be_bytes());
        out.extend_from_slice(chunk.tag.as_bytes());
        out.extend_from_slice(&chunk.data);
        out.extend_from_slice(&chunk.crc().to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChunkTag;
    use crate::read::read_chunks;

    #[test]
    fn test_write_iend_exact_bytes() {
        let bytes = write_chunks(&[Chunk::new(ChunkTag::IEND, Vec::new())]);

        let mut expected = PNG_SIGNATURE.to_vec();
        expected.extend_from_slice(&[0, 0, 0, 0]);
        expected.extend_from_slice(b"IEND");
        expected.extend_from_slice(&[0xAE, 0x42, 0x60, 0x82]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_empty_stream_is_signature_only() {
        assert_eq!(write_chunks(&[]), PNG_SIGNATURE.to_vec());
    }

    #[test]
    fn test_write_read_round_trip() {
        let chunks = vec![
            Chunk::new(ChunkTag::IHDR, vec![0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0]),
            Chunk::new(ChunkTag::TEXT, b"comment\0hello".to_vec()),
            Chunk::new(ChunkTag::IDAT, vec![1, 2, 3, 4]),
            Chunk::new(ChunkTag::IEND, Vec::new()),
        ];

        let bytes = write_chunks(&chunks);
        assert_eq!(read_chunks(&bytes).unwrap(), chunks);
    }
}
