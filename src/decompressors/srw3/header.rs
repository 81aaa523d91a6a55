// SPDX-License-Identifier: LGPL-2.1

use log::debug;

use crate::pumps::BitPumpMSB32;
use crate::{DecodeError, Result};

/// Stream preamble of a v3 compressed frame.
///
/// Only `bit_depth`, `width`, `height`, `opt_flags` and `init_val` steer
/// the decode; the remaining fields are consumed to keep the stream
/// position correct. Width and height repeat the strip dimensions of the
/// surrounding IFD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Srw3Header {
  pub width: u32,
  pub height: u32,
  /// Nominal sample precision, stored in the stream as value - 1
  pub bit_depth: u32,
  /// Seed value for the left edge of the first rows
  pub init_val: u16,
  /// Bitmask of the OPT_* decoding switches
  pub opt_flags: u32,
}

impl Srw3Header {
  /// Sensor envelope of the bodies producing this format.
  const MAX_WIDTH: u32 = 6496;
  const MAX_HEIGHT: u32 = 4336;

  pub fn parse(pump: &mut BitPumpMSB32<'_>) -> Result<Self> {
    pump.get_bits(16)?; // NLCVersion
    pump.get_bits(4)?; // ImgFormat
    let bit_depth = pump.get_bits(4)? + 1;
    pump.get_bits(4)?; // NumBlkInRCUnit
    pump.get_bits(4)?; // CompressionRatio
    let width = pump.get_bits(16)?;
    let height = pump.get_bits(16)?;
    pump.get_bits(16)?; // TileWidth
    pump.get_bits(4)?; // reserved
    let opt_flags = pump.get_bits(4)?;
    pump.get_bits(8)?; // OverlapWidth
    pump.get_bits(8)?; // reserved
    pump.get_bits(8)?; // Inc
    pump.get_bits(2)?; // reserved
    let init_val = pump.get_bits(14)? as u16;

    if width == 0 || height == 0 || width % 16 != 0 || width > Self::MAX_WIDTH || height > Self::MAX_HEIGHT {
      return Err(DecodeError::BadDimensions { width, height });
    }

    let header = Srw3Header {
      width,
      height,
      bit_depth,
      init_val,
      opt_flags,
    };
    debug!("SRW3 header: {:?}", header);
    Ok(header)
  }
}
