use glam::Vec4;

use crate::error::IgnTrackError;
use super::reader::IgnByteReader;

/// The number of entries in a track palette.
pub const PALETTE_ENTRY_COUNT: usize = 256;

/// The palette file header: a file-length word and one unknown word.
const PALETTE_HEADER_LEN: usize = 8;

const CHANNEL_SCALE: f32 = 1.0 / 255.0;

/// One palette entry, channels 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnColor {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl IgnColor {
  /// Convert to an RGBA float sample with channels in 0.0–1.0.
  /// return: The sample.
  pub fn to_vec4(&self) -> Vec4 {
    Vec4::new(
      self.r as f32 * CHANNEL_SCALE,
      self.g as f32 * CHANNEL_SCALE,
      self.b as f32 * CHANNEL_SCALE,
      self.a as f32 * CHANNEL_SCALE,
    )
  }
}

/// The 256-colour track palette.
///
/// Entry 0 is the transparency key colour and carries alpha 0; every other
/// entry is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnPalette {
  pub entries: Vec<IgnColor>,
}

impl IgnPalette {
  /// Decode a palette file.
  /// param data: The whole palette file buffer.
  /// return: The palette.
  pub fn decode(data: &[u8]) -> Result<Self, IgnTrackError> {
    let mut reader = IgnByteReader::new(data, "palette");
    reader.skip(PALETTE_HEADER_LEN)?;

    let mut entries = Vec::with_capacity(PALETTE_ENTRY_COUNT);
    for index in 0..PALETTE_ENTRY_COUNT {
      let rgb = reader.read_bytes(3)?;
      entries.push(IgnColor {
        r: rgb[0],
        g: rgb[1],
        b: rgb[2],
        a: if index == 0 { 0 } else { 255 },
      });
    }

    Ok(Self {
      entries,
    })
  }

  /// Look up an entry by index. Always valid: the palette covers the whole
  /// index byte range.
  /// param index: The 8-bit colour index.
  /// return: The entry.
  pub fn color(&self, index: u8) -> IgnColor {
    self.entries[index as usize]
  }
}
