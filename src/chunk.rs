use core::fmt;

/// RIFF chunks are tagged with 4 byte identifiers.
///
/// Only the four tags that make up a canonical PCM file are recognized,
/// anything else fails the decode outright.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChunkTag {
    /// Root level chunk
    Riff,
    /// File identifier, located right after the RIFF tag and chunk size
    Wave,
    /// Mandatory chunk, contains the sample rate, bit depth, and number of channels
    Fmt,
    /// Mandatory chunk, contains the (interleaved) samples
    Data,
}

impl ChunkTag {
    pub(crate) fn to_bytes(self) -> [u8; 4] {
        match self {
            ChunkTag::Riff => [b'R', b'I', b'F', b'F'],
            ChunkTag::Wave => [b'W', b'A', b'V', b'E'],
            ChunkTag::Fmt => [b'f', b'm', b't', b' '],
            ChunkTag::Data => [b'd', b'a', b't', b'a'],
        }
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            ChunkTag::Riff => "RIFF",
            ChunkTag::Wave => "WAVE",
            ChunkTag::Fmt => "fmt ",
            ChunkTag::Data => "data",
        };

        write!(f, "{}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_bytes_match_ascii() {
        assert_eq!(&ChunkTag::Riff.to_bytes(), b"RIFF");
        assert_eq!(&ChunkTag::Wave.to_bytes(), b"WAVE");
        assert_eq!(&ChunkTag::Fmt.to_bytes(), b"fmt ");
        assert_eq!(&ChunkTag::Data.to_bytes(), b"data");
    }

    #[test]
    fn display_matches_tag_bytes() {
        assert_eq!(ChunkTag::Fmt.to_string(), "fmt ");
        assert_eq!(ChunkTag::Data.to_string(), "data");
    }
}
