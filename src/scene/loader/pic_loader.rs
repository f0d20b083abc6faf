use crate::error::IgnTrackError;
use super::palette::{
  IgnColor,
  PALETTE_ENTRY_COUNT,
};
use super::reader::IgnByteReader;

/// The PIC magic word (0x9500 little-endian on disk).
const PIC_MAGIC: u16 = 38144;

/// A decoded PIC still image.
///
/// PIC is the game's standalone indexed image format: a fixed header with an
/// embedded 256-colour RGB palette, then one index byte per pixel in
/// row-major order. Unlike track textures there is no key colour; every
/// pixel decodes opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnPicImage {
  pub width: u32,
  pub height: u32,
  pub pixels: Vec<IgnColor>,
}

impl IgnPicImage {
  /// Decode a PIC file.
  /// param data: The whole PIC file buffer.
  /// return: The decoded image.
  pub fn decode(data: &[u8]) -> Result<Self, IgnTrackError> {
    let mut reader = IgnByteReader::new(data, "pic");

    reader.read_u32()?; // file size, unused
    let magic = reader.read_u16()?;
    if magic != PIC_MAGIC {
      return Err(IgnTrackError::InvalidMagic {
        found: magic,
      });
    }
    let width = reader.read_u16()? as u32;
    let height = reader.read_u16()? as u32;
    reader.skip(2 + 2)?; // two unknown words
    reader.skip(50)?;
    reader.read_u16()?; // always 776, unused
    reader.skip(6)?; // reserved, always zero

    let palette_bytes = reader.read_bytes(PALETTE_ENTRY_COUNT * 3)?;

    reader.read_u16()?; // unknown trailer word
    reader.skip(4)?; // probably orientation flags
    reader.skip(2)?; // header tail padding up to a 4-byte boundary

    let mut pixels = Vec::with_capacity((width * height) as usize);
    for _ in 0..width * height {
      let index = reader.read_u8()? as usize;
      pixels.push(IgnColor {
        r: palette_bytes[index * 3],
        g: palette_bytes[index * 3 + 1],
        b: palette_bytes[index * 3 + 2],
        a: 255,
      });
    }

    log::debug!("Decoded a {}x{} PIC image.", width, height);
    Ok(Self {
      width,
      height,
      pixels,
    })
  }

  /// Convert to an interchange image buffer.
  /// return: The RGBA image.
  pub fn to_image(&self) -> image::RgbaImage {
    image::RgbaImage::from_fn(self.width, self.height, |x, y| {
      let pixel = self.pixels[(y * self.width + x) as usize];
      image::Rgba([pixel.r, pixel.g, pixel.b, pixel.a])
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn build_pic_file(magic: u16) -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&0u32.to_le_bytes()); // file size
    buffer.extend_from_slice(&magic.to_le_bytes());
    buffer.extend_from_slice(&2u16.to_le_bytes()); // width
    buffer.extend_from_slice(&2u16.to_le_bytes()); // height
    buffer.extend_from_slice(&[0u8; 4]); // unknown words
    buffer.extend_from_slice(&[0u8; 50]);
    buffer.extend_from_slice(&776u16.to_le_bytes());
    buffer.extend_from_slice(&[0u8; 6]);
    for i in 0..PALETTE_ENTRY_COUNT {
      buffer.push(i as u8);
      buffer.push(0);
      buffer.push((255 - i) as u8);
    }
    buffer.extend_from_slice(&0u16.to_le_bytes());
    buffer.extend_from_slice(&[0u8; 4]);
    buffer.extend_from_slice(&[0u8; 2]); // padding
    buffer.extend_from_slice(&[0, 1, 2, 255]); // pixel indices
    buffer
  }

  #[test]
  fn decodes_pixels_through_the_embedded_palette() {
    let pic = IgnPicImage::decode(&build_pic_file(PIC_MAGIC)).unwrap();
    assert_eq!(pic.width, 2);
    assert_eq!(pic.height, 2);
    assert_eq!(pic.pixels, vec![
      IgnColor { r: 0, g: 0, b: 255, a: 255 },
      IgnColor { r: 1, g: 0, b: 254, a: 255 },
      IgnColor { r: 2, g: 0, b: 253, a: 255 },
      IgnColor { r: 255, g: 0, b: 0, a: 255 },
    ]);
  }

  #[test]
  fn converts_to_an_interchange_image() {
    let pic = IgnPicImage::decode(&build_pic_file(PIC_MAGIC)).unwrap();
    let image = pic.to_image();
    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.get_pixel(1, 1).0, [255, 0, 0, 255]);
  }

  #[test]
  fn rejects_wrong_magic() {
    let result = IgnPicImage::decode(&build_pic_file(1234));
    assert!(matches!(result, Err(IgnTrackError::InvalidMagic { found: 1234 })));
  }

  #[test]
  fn rejects_truncated_header() {
    let data = &build_pic_file(PIC_MAGIC)[..40];
    let result = IgnPicImage::decode(data);
    assert!(matches!(result, Err(IgnTrackError::TruncatedInput { stage: "pic", .. })));
  }
}
