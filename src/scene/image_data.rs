use glam::Vec4;
use serde::{
  Deserialize, Serialize
};

/// A decoded texture image: RGBA float samples in row-major order, each
/// channel in the range 0.0–1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgnTextureImage {
  pub width: u32,
  pub height: u32,
  pub pixels: Vec<Vec4>,
}

impl IgnTextureImage {
  /// Get one sample by texel coordinates.
  /// param x: The column, 0..width.
  /// param y: The row, 0..height.
  /// return: The RGBA sample.
  pub fn sample(&self, x: u32, y: u32) -> Vec4 {
    self.pixels[(y * self.width + x) as usize]
  }
}
