// SPDX-License-Identifier: LGPL-2.1

//! Decompressor for third generation compressed SRW files (NX1).
//!
//! Each line is encoded as a set of differences against pixels of another
//! line and starts on a 16 byte boundary of the payload. Pixels are grouped
//! in blocks of 16 (8 green, 8 red or blue). A block carries three
//! sections: 1 or 4 bits selecting the reference pixels, a section giving
//! the number of difference bits per pixel quarter, and the difference
//! bits themselves. A ternary scale code every fourth block quantizes the
//! differences.

mod decoder;
mod header;

pub use header::Srw3Header;

use crate::pixarray::PixU16;
use crate::pumps::BitPumpMSB32;
use crate::{DecodeError, Result};
use decoder::Srw3Decompressor;

/// Skip the per block residual width marker and always read the width flags
pub const OPT_SKIP: u32 = 1;
/// Motion codes collapse to a single bit selecting between modes 3 and 7
pub const OPT_MV: u32 = 2;
/// Differences are applied unscaled
pub const OPT_QP: u32 = 4;

/// Decompress a v3 payload into a caller-owned raster.
///
/// `offset` is the STRIPOFFSETS value of the strip, `bits` the
/// BITSPERSAMPLE value of the surrounding IFD. The raster dimensions must
/// match the stream header. On error the raster contents are unspecified.
pub fn decompress(src: &[u8], offset: usize, bits: u32, out: &mut PixU16) -> Result<()> {
  if bits != 12 && bits != 14 {
    return Err(DecodeError::UnsupportedBits(bits));
  }
  let payload = src.get(offset..).ok_or(DecodeError::Truncated)?;

  let mut pump = BitPumpMSB32::new(payload);
  let header = Srw3Header::parse(&mut pump)?;
  if out.width != header.width as usize || out.height != header.height as usize {
    return Err(DecodeError::BadDimensions {
      width: header.width,
      height: header.height,
    });
  }

  Srw3Decompressor::new(header, bits, payload).decompress(pump, out)
}
