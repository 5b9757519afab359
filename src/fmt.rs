use crate::chunk::ChunkTag;
use crate::error::Error;
use crate::parsing::Reader;

/// Audio format code for uncompressed PCM, the only format supported.
pub const FORMAT_PCM: u16 = 1;

/// Canonical size of the PCM `fmt ` chunk body in bytes.
pub(crate) const FMT_CHUNK_SIZE: u32 = 16;

/// Struct representing the `fmt ` section of a WAV file
///
/// for more information see [`here`]
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fmt {
    audio_format: u16,
    num_channels: u16,
    sample_rate: u32,
    bit_depth: u16,
}

impl Fmt {
    /// Validate the format parameters and build a [`Fmt`].
    ///
    /// Only uncompressed PCM with a bit depth of 8 or 16 and at least one
    /// channel is accepted.
    pub(crate) fn new(
        audio_format: u16,
        num_channels: u16,
        sample_rate: u32,
        bit_depth: u16,
    ) -> Result<Self, Error> {
        if audio_format != FORMAT_PCM {
            return Err(Error::UnsupportedFormat(audio_format));
        }

        if bit_depth != 8 && bit_depth != 16 {
            return Err(Error::UnsupportedBitDepth(bit_depth));
        }

        // block align must fit its 2 byte wire field, which also keeps
        // the decode and index arithmetic in range
        let block_align = num_channels as u32 * (bit_depth / 8) as u32;

        if num_channels == 0 || block_align > u16::MAX as u32 {
            return Err(Error::SizeOutOfBounds {
                field: "channel count",
                value: num_channels as u32,
            });
        }

        Ok(Fmt {
            audio_format,
            num_channels,
            sample_rate,
            bit_depth,
        })
    }

    /// Parse a complete `fmt ` chunk, tag and size included.
    pub(crate) fn from_reader(reader: &mut Reader) -> Result<Self, Error> {
        reader.tag(ChunkTag::Fmt)?;

        let chunk_size = reader.u32_le()?;

        if chunk_size != FMT_CHUNK_SIZE {
            return Err(Error::NonCanonicalFmt(chunk_size));
        }

        let audio_format = reader.u16_le()?;
        let num_channels = reader.u16_le()?;
        let sample_rate = reader.u32_le()?;

        // byte rate (4 bytes) and block align (2 bytes) are derivable
        // from the other fields, skip them
        reader.skip(6)?;

        let bit_depth = reader.u16_le()?;

        Fmt::new(audio_format, num_channels, sample_rate, bit_depth)
    }

    /// Emit the 16 byte `fmt ` chunk body, deriving byte rate and block
    /// align from the stored fields.
    pub(crate) fn to_bytes(&self) -> [u8; 16] {
        let af = self.audio_format.to_le_bytes();
        let nc = self.num_channels.to_le_bytes();
        let sr = self.sample_rate.to_le_bytes();
        let br = self.byte_rate().to_le_bytes();
        let ba = self.block_align().to_le_bytes();
        let bd = self.bit_depth.to_le_bytes();

        [
            af[0], af[1], // audio format
            nc[0], nc[1], // num channels
            sr[0], sr[1], sr[2], sr[3], // sample rate
            br[0], br[1], br[2], br[3], // byte rate
            ba[0], ba[1], // block align
            bd[0], bd[1], // bits per sample
        ]
    }

    /// Audio format code, always `1` (uncompressed PCM).
    pub fn audio_format(&self) -> u16 {
        self.audio_format
    }

    /// Number of audio channels in the sample data, channels are interleaved.
    pub fn num_channels(&self) -> u16 {
        self.num_channels
    }

    /// Sample rate, typical values are `44_100`, `48_000` or `96_000`.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bit depth for each sample, either `8` or `16`.
    pub fn bit_depth(&self) -> u16 {
        self.bit_depth
    }

    /// Bytes per sample for a single channel.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bit_depth / 8
    }

    /// Bytes per frame, one sample for every channel.
    pub fn block_align(&self) -> u16 {
        self.num_channels * self.bytes_per_sample()
    }

    /// Bytes per second of audio.
    ///
    /// The sample rate is stored as decoded without validation, so the
    /// product wraps like its 4 byte wire field rather than overflowing.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.wrapping_mul(self.block_align() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader_over(bytes: &[u8]) -> Reader {
        Reader::new(bytes)
    }

    #[test]
    fn should_parse_canonical_pcm_chunk() {
        let bytes = [
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x10, 0x00, 0x00, 0x00, // chunk size
            0x01, 0x00, // audio format
            0x02, 0x00, // num channels
            0x22, 0x56, 0x00, 0x00, // sample rate
            0x88, 0x58, 0x01, 0x00, // byte rate
            0x04, 0x00, // block align
            0x10, 0x00, // bits per sample
        ];

        let fmt = Fmt::from_reader(&mut reader_over(&bytes)).unwrap();

        assert_eq!(fmt.sample_rate(), 22_050);
        assert_eq!(fmt.num_channels(), 2);
        assert_eq!(fmt.bit_depth(), 16);
        assert_eq!(fmt.bytes_per_sample(), 2);
        assert_eq!(fmt.block_align(), 4);
        assert_eq!(fmt.byte_rate(), 88_200);
    }

    #[test]
    fn should_reject_non_pcm_format() {
        let bytes = [
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x10, 0x00, 0x00, 0x00, // chunk size
            0x03, 0x00, // audio format (IEEE float)
            0x01, 0x00, // num channels
            0x44, 0xac, 0x00, 0x00, // sample rate
            0x88, 0x58, 0x01, 0x00, // byte rate
            0x02, 0x00, // block align
            0x10, 0x00, // bits per sample
        ];

        assert_eq!(
            Fmt::from_reader(&mut reader_over(&bytes)),
            Err(Error::UnsupportedFormat(3))
        );
    }

    #[test]
    fn should_reject_extended_fmt_chunk() {
        let bytes = [
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x12, 0x00, 0x00, 0x00, // chunk size (18, extended)
        ];

        assert_eq!(
            Fmt::from_reader(&mut reader_over(&bytes)),
            Err(Error::NonCanonicalFmt(18))
        );
    }

    #[test]
    fn should_reject_unsupported_bit_depth() {
        assert_eq!(
            Fmt::new(FORMAT_PCM, 1, 44_100, 24),
            Err(Error::UnsupportedBitDepth(24))
        );
    }

    #[test]
    fn should_reject_zero_channels() {
        assert_eq!(
            Fmt::new(FORMAT_PCM, 0, 44_100, 16),
            Err(Error::SizeOutOfBounds {
                field: "channel count",
                value: 0,
            })
        );
    }

    #[test]
    fn should_reject_block_align_past_the_wire_field() {
        // 32768 channels of 16 bit audio need a block align of 65536,
        // one past what the 2 byte field can carry
        assert_eq!(
            Fmt::new(FORMAT_PCM, 32_768, 44_100, 16),
            Err(Error::SizeOutOfBounds {
                field: "channel count",
                value: 32_768,
            })
        );

        // the same channel count fits for 1 byte samples
        assert!(Fmt::new(FORMAT_PCM, 32_768, 44_100, 8).is_ok());
    }

    #[test]
    fn byte_rate_wraps_like_the_wire_field() {
        let fmt = Fmt::new(FORMAT_PCM, 1, 0x8000_0000, 16).unwrap();

        assert_eq!(fmt.block_align(), 2);
        assert_eq!(fmt.byte_rate(), 0);
    }

    #[test]
    fn should_derive_fields_on_emit() {
        let fmt = Fmt::new(FORMAT_PCM, 2, 48_000, 16).unwrap();

        let bytes = fmt.to_bytes();

        assert_eq!(
            bytes,
            [
                0x01, 0x00, // audio format
                0x02, 0x00, // num channels
                0x80, 0xbb, 0x00, 0x00, // sample rate
                0x00, 0xee, 0x02, 0x00, // byte rate
                0x04, 0x00, // block align
                0x10, 0x00, // bits per sample
            ]
        );
    }
}
