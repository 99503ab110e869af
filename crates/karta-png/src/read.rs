//! Chunk stream reading.

use karta_common::{crc, BinaryReader};

use crate::chunk::{Chunk, ChunkTag};
use crate::error::{DecodeError, Error, Result};

/// The 8-byte signature that opens every PNG file.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Parse a PNG byte stream into its ordered chunk sequence.
///
/// Validates the signature, then reads chunks one by one, recomputing each
/// chunk's CRC-32 over its tag and data and comparing against the stored
/// value. Reading stops once `IEND` has been consumed; any trailing bytes
/// are ignored.
///
/// Fails with [`Error::Format`] when the buffer does not start with the PNG
/// signature, and with [`Error::Decode`] on truncation, a declared length
/// overrunning the buffer, or a CRC mismatch.
pub fn read_chunks(bytes: &[u8]) -> Result<Vec<Chunk>> {
    if bytes.len() < PNG_SIGNATURE.len() || bytes[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        return Err(Error::Format {
            actual: bytes[..bytes.len().min(PNG_SIGNATURE.len())].to_vec(),
        });
    }

    let mut reader = BinaryReader::new_at(bytes, PNG_SIGNATURE.len());
    let mut chunks = Vec::new();

    loop {
        let length = reader.read_u32().map_err(DecodeError::from)?;
        let tag = ChunkTag(reader.read_array::<4>().map_err(DecodeError::from)?);

        // Data plus the trailing 4-byte CRC must fit in what remains.
        let needed = (length as usize).checked_add(4);
        if needed.map_or(true, |n| n > reader.remaining()) {
            return Err(DecodeError::LengthOverrun {
                tag,
                length,
                available: reader.remaining(),
            }
            .into());
        }

        let data = reader.read_bytes(length as usize).map_err(DecodeError::from)?;
        let stored = reader.read_u32().map_err(DecodeError::from)?;

        let computed = crc::chunk_crc(tag.as_bytes(), data);
        if stored != computed {
            return Err(DecodeError::CrcMismatch {
                tag,
                stored,
                computed,
            }
            .into());
        }

        chunks.push(Chunk::new(tag, data.to_vec()));

        if tag == ChunkTag::IEND {
            return Ok(chunks);
        }
    }
}
