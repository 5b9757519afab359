use crate::chunk::ChunkTag;
use thiserror::Error;

/// Error type for the different validation failures
///
/// Every failure is fatal to the operation that raised it, nothing is
/// downgraded to a default value and no partially decoded buffer is ever
/// returned.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A fixed container tag (`RIFF`, `WAVE`, `fmt `, `data`) did not match
    #[error("malformed container: expected `{expected}` tag, found {found:?}")]
    MalformedContainer {
        /// the tag the decoder was looking for
        expected: ChunkTag,
        /// the four bytes found instead
        found: [u8; 4],
    },
    /// Audio format code other than uncompressed PCM
    #[error("unsupported audio format code {0}, only PCM (1) is supported")]
    UnsupportedFormat(u16),
    /// Extended or otherwise non-canonical `fmt ` chunk
    #[error("non-canonical fmt chunk of {0} bytes, expected 16")]
    NonCanonicalFmt(u32),
    /// Bit depth other than 8 or 16
    #[error("unsupported bit depth {0}")]
    UnsupportedBitDepth(u16),
    /// A declared size or count is outside the supported range
    #[error("{field} value {value} is out of bounds")]
    SizeOutOfBounds {
        /// header field that failed validation
        field: &'static str,
        /// the offending value
        value: u32,
    },
    /// Accessor called outside the bounds of the sample buffer
    #[error("sample {sample} channel {channel} is out of range")]
    IndexOutOfRange {
        /// requested sample number
        sample: u32,
        /// requested channel
        channel: u16,
    },
    /// Sample value outside the normalized range
    #[error("sample value {0} is outside -1.0..=1.0")]
    ValueOutOfRange(f32),
    /// Fewer bytes available than a field or the payload requires
    #[error("truncated input: needed {needed} bytes, {available} available")]
    TruncatedInput {
        /// bytes needed to make progress
        needed: usize,
        /// bytes actually left in the input
        available: usize,
    },
}
