use glam::Vec4;

use crate::error::IgnTrackError;
use crate::scene::image_data::IgnTextureImage;
use super::palette::{
  IgnPalette,
  PALETTE_ENTRY_COUNT,
};
use super::reader::IgnByteReader;

/// The number of texture slots in a track texture file.
pub const TEXTURE_SLOT_COUNT: usize = 16;

/// Track textures are square.
pub const TEXTURE_DIM: usize = 256;

/// The track texture loader.
pub struct IgnTextureLoader;

/// The implementation of the track texture loader.
impl IgnTextureLoader {
  /// Load the texture file: 16 contiguous 256×256 planes of palette
  /// indices, texture-major then row-major, no padding.
  /// param data: The whole texture file buffer.
  /// param palette: The decoded track palette.
  /// return: The decoded images, in slot order.
  pub fn load(data: &[u8], palette: &IgnPalette) -> Result<Vec<IgnTextureImage>, IgnTrackError> {
    let mut reader = IgnByteReader::new(data, "texture");

    // Expand the palette once; every index byte is a straight table hit.
    let mut table = [Vec4::ZERO; PALETTE_ENTRY_COUNT];
    for (entry, slot) in palette.entries.iter().zip(table.iter_mut()) {
      *slot = entry.to_vec4();
    }

    let mut images = Vec::with_capacity(TEXTURE_SLOT_COUNT);
    for slot in 0..TEXTURE_SLOT_COUNT {
      let plane = reader.read_bytes(TEXTURE_DIM * TEXTURE_DIM)?;
      let pixels = plane.iter().map(|&index| table[index as usize]).collect();
      log::debug!("Decoded texture slot {}.", slot);
      images.push(IgnTextureImage {
        width: TEXTURE_DIM as u32,
        height: TEXTURE_DIM as u32,
        pixels,
      });
    }

    Ok(images)
  }
}
