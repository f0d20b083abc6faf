use std::path::Path;

use serde::{
  Deserialize, Serialize
};

use crate::error::IgnTrackError;
use super::mesh::IgnMesh;
use super::image_data::IgnTextureImage;
use super::loader::IgnTrackLoader;

/// A scene is the merged track geometry plus the decoded texture images.
///
/// Image slot i corresponds to material slot i of the track; preserving that
/// pairing is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgnScene {
  pub mesh: IgnMesh,
  pub images: Vec<IgnTextureImage>,
}

/// The Drop implementation of the scene.
impl Drop for IgnScene {
  fn drop(&mut self) {
    log::debug!("An IgnScene dropped.");
  }
}

/// The implementation of the scene.
impl IgnScene {
  /// Create a new scene from a track mesh file.
  /// param path: The path to the track mesh file. The placement, palette and
  ///             texture files are expected beside it.
  /// return: The scene.
  pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, IgnTrackError> {
    // Check the file extension.
    let path = path.as_ref();
    let scene = match path.extension().and_then(std::ffi::OsStr::to_str) {
      // Track mesh file.
      Some("MSH") | Some("msh") => IgnTrackLoader::load(path),
      // Unsupported file.
      _ => Err(IgnTrackError::UnsupportedFile(path.to_path_buf())),
    }?;

    log::debug!("An IgnScene created.");
    Ok(scene)
  }

  /// Combine decoded geometry and images into one scene.
  /// param mesh: The merged mesh.
  /// param images: The decoded texture images, in slot order.
  /// return: The scene.
  pub fn assemble(mesh: IgnMesh, images: Vec<IgnTextureImage>) -> Self {
    Self {
      mesh,
      images,
    }
  }

  pub fn vertex_count(&self) -> usize {
    self.mesh.vertex_count()
  }

  pub fn triangle_count(&self) -> usize {
    self.mesh.triangle_count()
  }

  /// Check if the scene has texture images.
  /// return: True if the scene has texture images, false otherwise.
  pub fn has_images(&self) -> bool {
    !self.images.is_empty()
  }
}
