//! Decoder for the third generation compressed raw codec used by Samsung
//! SRW files (NX1 and related bodies), stored with TIFF compression tag
//! 32773.
//!
//! The surrounding container handling is left to the caller: this crate
//! consumes the raw file bytes, the payload offset taken from the
//! STRIPOFFSETS tag and the BITSPERSAMPLE value, and fills a caller-owned
//! 16 bit per pixel Bayer raster.
//!
//! # Example
//! ```rust,no_run
//! use srwler::PixU16;
//!
//! let file = std::fs::read("sample.srw").unwrap();
//! // Offset and dimensions come from the TIFF IFD of the file.
//! let mut image = PixU16::new(6496, 4336);
//! srwler::decompress(&file, 0x8000, 14, &mut image).unwrap();
//! ```

use thiserror::Error;

pub mod bits;
pub mod decompressors;
pub mod pixarray;
pub mod pumps;

pub use decompressors::srw3::decompress;
pub use decompressors::srw3::Srw3Header;
pub use pixarray::PixU16;

/// Error variants for the decoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
  /// A read ran past the end of the compressed stream
  #[error("Compressed stream ends prematurely")]
  Truncated,

  /// Dimensions are zero, not block aligned or outside the sensor envelope
  #[error("Unexpected image dimensions found: ({width}; {height})")]
  BadDimensions { width: u32, height: u32 },

  /// The stream violates an invariant of the format
  #[error("File corrupted: {}", _0)]
  Corrupt(&'static str),

  /// Bits per sample other than the 12 or 14 the cameras produce
  #[error("Unsupported bits per sample: {}", _0)]
  UnsupportedBits(u32),
}

/// Result type for decoder results
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
pub(crate) fn init_test_logger() {
  let _ = env_logger::builder().is_test(true).try_init();
}
