use crate::chunk::ChunkTag;
use crate::error::Error;
use crate::fmt::{Fmt, FMT_CHUNK_SIZE};
use crate::parsing::Reader;

/// Floor for the declared riff chunk size, matching the 44 byte fixed
/// header of a canonical PCM file.
const MIN_RIFF_SIZE: u32 = 44;

/// Byte overhead of everything that follows the riff size field besides
/// the payload: the `WAVE` tag, the complete fmt chunk, and the data
/// chunk header.
const RIFF_OVERHEAD: u32 = 4 + (8 + FMT_CHUNK_SIZE) + 8;

/// In-memory PCM audio buffer plus its format metadata.
///
/// Sample bytes are kept in the container's native encoding: offset-binary
/// for 8 bit audio, little endian two's complement for 16 bit audio, with
/// channels interleaved per frame. Format metadata is immutable after
/// construction, the only mutation path is [`set_sample`].
///
/// [`set_sample`]: WaveBuffer::set_sample
#[derive(Debug, PartialEq)]
pub struct WaveBuffer {
    fmt: Fmt,
    /// number of samples per channel
    sample_count: u32,
    /// interleaved raw sample bytes
    samples: Vec<u8>,
}

impl WaveBuffer {
    /// Create a silent [`WaveBuffer`] from format parameters.
    ///
    /// Every sample byte is zeroed, which is digital silence in both
    /// supported encodings. Note that a zeroed 8 bit sample decodes to
    /// `-1.0` after the offset-binary shift while a zeroed 16 bit sample
    /// decodes to `0.0`, the asymmetry comes with the container format.
    ///
    /// ```
    /// use wavbuf::{WaveBuffer, FORMAT_PCM};
    ///
    /// let wave = WaveBuffer::new_silent(FORMAT_PCM, 2, 44_100, 16, 1024).unwrap();
    ///
    /// assert_eq!(wave.sample_count(), 1024);
    /// assert_eq!(wave.num_channels(), 2);
    /// assert_eq!(wave.get_sample_as_float(0, 0), Ok(0.0));
    /// ```
    pub fn new_silent(
        audio_format: u16,
        num_channels: u16,
        sample_rate: u32,
        bit_depth: u16,
        sample_count: u32,
    ) -> Result<Self, Error> {
        let fmt = Fmt::new(audio_format, num_channels, sample_rate, bit_depth)?;
        let len = sample_count as usize * fmt.block_align() as usize;

        Ok(WaveBuffer {
            fmt,
            sample_count,
            samples: vec![0; len],
        })
    }

    /// Decode a [`WaveBuffer`] from a slice of bytes.
    ///
    /// The input must be a canonical PCM file: the fixed 44 byte header
    /// (`RIFF` size `WAVE`, a 16 byte `fmt ` chunk, the `data` chunk
    /// header) followed by the payload. Exactly `44 + data_size` bytes are
    /// consumed, trailing chunks are not looked at. Any tag mismatch,
    /// unsupported format code or bit depth, out of bounds size, or short
    /// read fails the whole decode, no partial buffer is returned.
    ///
    /// Payload bytes short of a whole frame are dropped from the logical
    /// sample count.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = Reader::new(bytes);

        reader.tag(ChunkTag::Riff)?;

        let riff_size = reader.u32_le()?;

        if riff_size < MIN_RIFF_SIZE {
            return Err(Error::SizeOutOfBounds {
                field: "riff chunk size",
                value: riff_size,
            });
        }

        reader.tag(ChunkTag::Wave)?;

        let fmt = Fmt::from_reader(&mut reader)?;

        reader.tag(ChunkTag::Data)?;

        let data_size = reader.u32_le()?;
        let payload = reader.take(data_size as usize)?;

        let block_align = fmt.block_align() as u32;
        let sample_count = data_size / block_align;

        // the length invariant admits no partial frames, trailing bytes
        // are consumed but not stored
        let whole_frames = (sample_count * block_align) as usize;
        let samples = payload[..whole_frames].to_vec();

        Ok(WaveBuffer {
            fmt,
            sample_count,
            samples,
        })
    }

    /// Encode the buffer into a canonical PCM wav byte vector.
    ///
    /// The riff size is re-derived from the buffer state rather than
    /// remembered from decode, so a decode followed by an encode is byte
    /// identical for inputs whose payload is a whole number of frames.
    ///
    /// ```
    /// use wavbuf::{WaveBuffer, FORMAT_PCM};
    ///
    /// let wave = WaveBuffer::new_silent(FORMAT_PCM, 1, 44_100, 16, 10).unwrap();
    /// let bytes = wave.to_bytes();
    ///
    /// assert_eq!(bytes.len(), 64);
    /// assert_eq!(&bytes[0..4], b"RIFF");
    /// assert_eq!(&bytes[40..44], &20u32.to_le_bytes());
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let data_size = self.samples.len() as u32;
        let riff_size = RIFF_OVERHEAD + data_size;

        let mut bytes = Vec::with_capacity(8 + riff_size as usize);

        bytes.extend_from_slice(&ChunkTag::Riff.to_bytes());
        bytes.extend_from_slice(&riff_size.to_le_bytes());
        bytes.extend_from_slice(&ChunkTag::Wave.to_bytes());

        bytes.extend_from_slice(&ChunkTag::Fmt.to_bytes());
        bytes.extend_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        bytes.extend_from_slice(&self.fmt.to_bytes());

        bytes.extend_from_slice(&ChunkTag::Data.to_bytes());
        bytes.extend_from_slice(&data_size.to_le_bytes());
        bytes.extend_from_slice(&self.samples);

        bytes
    }

    /// Read a sample as a normalized float.
    ///
    /// 8 bit samples are offset-binary and decode to an asymmetric
    /// `-1.0..1.0` range (the maximum positive value is `127.0 / 128.0`),
    /// 16 bit samples decode to `value / 32768.0`.
    pub fn get_sample_as_float(&self, sample: u32, channel: u16) -> Result<f32, Error> {
        self.check_index(sample, channel)?;

        let base = self.byte_offset(sample, channel);

        let value = match self.fmt.bytes_per_sample() {
            1 => (self.samples[base] as i32 - 128) as f32 / 128.0,
            _ => {
                let sample = i16::from_le_bytes([self.samples[base], self.samples[base + 1]]);
                sample as f32 / 32768.0
            }
        };

        Ok(value)
    }

    /// Write a sample from a normalized float in `-1.0..=1.0`.
    ///
    /// The inverse of [`get_sample_as_float`]: 8 bit samples store
    /// `round(value * 128) + 127` as a single byte, 16 bit samples store
    /// `value * 32768` saturated into an `i16` and written little endian.
    ///
    /// [`get_sample_as_float`]: WaveBuffer::get_sample_as_float
    pub fn set_sample(&mut self, sample: u32, channel: u16, value: f32) -> Result<(), Error> {
        self.check_index(sample, channel)?;

        if !(-1.0..=1.0).contains(&value) {
            return Err(Error::ValueOutOfRange(value));
        }

        let base = self.byte_offset(sample, channel);

        match self.fmt.bytes_per_sample() {
            1 => {
                self.samples[base] = ((value * 128.0).round() as i32 + 127) as u8;
            }
            _ => {
                // float to int casts saturate, so +1.0 lands on i16::MAX
                let quantized = (value * 32768.0) as i16;
                let le = quantized.to_le_bytes();
                self.samples[base] = le[0];
                self.samples[base + 1] = le[1];
            }
        }

        Ok(())
    }

    /// The format metadata decoded from or used to build this buffer.
    pub fn fmt(&self) -> &Fmt {
        &self.fmt
    }

    /// Number of samples in one channel.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Number of interleaved channels.
    pub fn num_channels(&self) -> u16 {
        self.fmt.num_channels()
    }

    /// Sample rate in samples per second per channel.
    pub fn sample_rate(&self) -> u32 {
        self.fmt.sample_rate()
    }

    /// Bit depth for each sample, either `8` or `16`.
    pub fn bit_depth(&self) -> u16 {
        self.fmt.bit_depth()
    }

    /// Duration of the audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.sample_count as f64 / self.fmt.sample_rate() as f64
    }

    fn check_index(&self, sample: u32, channel: u16) -> Result<(), Error> {
        if sample >= self.sample_count || channel >= self.fmt.num_channels() {
            return Err(Error::IndexOutOfRange { sample, channel });
        }

        Ok(())
    }

    fn byte_offset(&self, sample: u32, channel: u16) -> usize {
        (sample as usize * self.fmt.num_channels() as usize + channel as usize)
            * self.fmt.bytes_per_sample() as usize
    }
}
