//! Minimal codec for uncompressed PCM audio in the RIFF/WAVE container.
//!
//! Parses a byte stream into an in-memory [`WaveBuffer`], exposes the
//! samples as normalized floats, and serializes the buffer back into a
//! well-formed wav byte stream. Only canonical PCM files are handled: a
//! 16 byte `fmt ` chunk, bit depths of 8 or 16, and no extended chunks
//! such as `LIST` or `fact`.
//!
//! ```rust
//! use wavbuf::{WaveBuffer, FORMAT_PCM};
//!
//! // half a second of silence, mono, 16 bit, 44.1kHz
//! let mut wave = WaveBuffer::new_silent(FORMAT_PCM, 1, 44_100, 16, 22_050).unwrap();
//!
//! wave.set_sample(0, 0, 0.5).unwrap();
//!
//! let bytes = wave.to_bytes();
//! let decoded = WaveBuffer::from_bytes(&bytes).unwrap();
//!
//! assert_eq!(decoded.sample_count(), 22_050);
//! assert!((decoded.get_sample_as_float(0, 0).unwrap() - 0.5).abs() < 1.0 / 32_768.0);
//! ```
//!
//! Decoding materializes the full payload in memory, there is no
//! streaming path. Every validation failure is surfaced as an [`Error`]
//! and aborts the operation as a whole.

#![warn(missing_docs)]

mod chunk;
mod error;
mod fmt;
mod parsing;
mod wave;

pub use chunk::ChunkTag;
pub use error::Error;
pub use fmt::{Fmt, FORMAT_PCM};
pub use wave::WaveBuffer;
