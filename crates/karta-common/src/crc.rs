//! PNG CRC-32 hashing utilities.
//!
//! PNG chunks carry a CRC-32 using the IEEE/zlib polynomial (reflected),
//! computed over the chunk type tag followed by the chunk data.

/// Compute the CRC-32 (IEEE) of a byte slice.
#[inline]
pub fn hash_bytes(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Compute the CRC-32 of a PNG chunk: the 4-byte type tag followed by the
/// chunk data, without concatenating the two buffers.
#[inline]
pub fn chunk_crc(tag: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(data);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash() {
        assert_eq!(hash_bytes(&[]), 0);
    }

    #[test]
    fn test_known_chunk_crc() {
        // The CRC of an empty IEND chunk is a well-known constant; every
        // valid PNG ends with these four bytes.
        assert_eq!(chunk_crc(b"IEND", &[]), 0xAE42_6082);
    }

    #[test]
    fn test_chunk_crc_matches_concatenation() {
        let tag = b"tEXt";
        let data = b"chara\0eyJuYW1lIjoiQSJ9";

        let mut concat = tag.to_vec();
        concat.extend_from_slice(data);

        assert_eq!(chunk_crc(tag, data), hash_bytes(&concat));
    }
}
