use crate::chunk::ChunkTag;
use crate::error::Error;

/// Little endian cursor over a byte slice, used by the decoder.
///
/// Every read is fixed length and fails with [`Error::TruncatedInput`]
/// when the slice runs out, so the decoder never has to bounds check by
/// hand.
pub(crate) struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let available = self.bytes.len() - self.pos;

        if available < len {
            return Err(Error::TruncatedInput {
                needed: len,
                available,
            });
        }

        let bytes = &self.bytes[self.pos..self.pos + len];
        self.pos += len;

        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.take(len).map(|_| ())
    }

    pub fn u16_le(&mut self) -> Result<u16, Error> {
        self.take(2).map(|b| u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn u32_le(&mut self) -> Result<u32, Error> {
        self.take(4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read 4 bytes and require them to match the given chunk tag.
    pub fn tag(&mut self, expected: ChunkTag) -> Result<(), Error> {
        let bytes = self.take(4)?;

        if bytes != expected.to_bytes() {
            return Err(Error::MalformedContainer {
                expected,
                found: [bytes[0], bytes[1], bytes[2], bytes[3]],
            });
        }

        Ok(())
    }
}
