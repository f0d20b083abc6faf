use std::path::Path;

use crate::error::IgnTrackError;
use crate::scene::IgnScene;
use super::mesh_loader::IgnMeshLoader;
use super::palette::IgnPalette;
use super::placement::IgnPlacementTable;
use super::texture_loader::IgnTextureLoader;

/// The track file-set loader.
///
/// A track is identified by its geometry file; the placement, palette and
/// texture files share the base name with the `PLC`, `COL` and `TEX`
/// extensions. There is no magic to sniff, only the layout itself.
pub struct IgnTrackLoader;

/// The implementation of the track file-set loader.
impl IgnTrackLoader {
  /// Load a track from the geometry file path and its three siblings.
  /// param path: The path of the geometry file.
  /// return: The loaded scene.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<IgnScene, IgnTrackError> {
    let path = path.as_ref();
    log::debug!("Loading track {:?}.", path);

    let mesh_data = Self::read_file(path)?;
    let placement_data = Self::read_file(&path.with_extension("PLC"))?;
    let palette_data = Self::read_file(&path.with_extension("COL"))?;
    let texture_data = Self::read_file(&path.with_extension("TEX"))?;

    Self::decode(&mesh_data, &placement_data, &palette_data, &texture_data)
  }

  /// Decode a track from its four file buffers.
  /// param mesh_data: The geometry file buffer.
  /// param placement_data: The placement file buffer.
  /// param palette_data: The palette file buffer.
  /// param texture_data: The texture file buffer.
  /// return: The assembled scene.
  pub fn decode(
    mesh_data: &[u8],
    placement_data: &[u8],
    palette_data: &[u8],
    texture_data: &[u8],
  ) -> Result<IgnScene, IgnTrackError> {
    // The geometry and texture pipelines are independent until assembly.
    let (mesh, images) = rayon::join(
      || {
        let places = IgnPlacementTable::decode(placement_data)?;
        IgnMeshLoader::load(mesh_data, &places)
      },
      || {
        let palette = IgnPalette::decode(palette_data)?;
        IgnTextureLoader::load(texture_data, &palette)
      },
    );

    Ok(IgnScene::assemble(mesh?, images?))
  }

  fn read_file(path: &Path) -> Result<Vec<u8>, IgnTrackError> {
    std::fs::read(path).map_err(|err| IgnTrackError::Io {
      path: path.to_path_buf(),
      source: err,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::super::palette::PALETTE_ENTRY_COUNT;
  use super::super::texture_loader::{
    TEXTURE_DIM,
    TEXTURE_SLOT_COUNT,
  };

  fn palette_file() -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&776u32.to_le_bytes());
    buffer.extend_from_slice(&0u32.to_le_bytes());
    for i in 0..PALETTE_ENTRY_COUNT {
      buffer.push(i as u8);
      buffer.push(i as u8);
      buffer.push(i as u8);
    }
    buffer
  }

  fn placement_file() -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&1i32.to_le_bytes());
    buffer.extend_from_slice(&20i32.to_le_bytes());
    buffer.extend_from_slice(&0i32.to_le_bytes());
    for component in [0i32, 0, 0] {
      buffer.extend_from_slice(&component.to_le_bytes());
    }
    buffer
  }

  fn mesh_file() -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&3i32.to_le_bytes());
    buffer.extend_from_slice(&1i32.to_le_bytes());
    for vertex in [[10i32, 20, 30], [40, 50, 60], [70, 80, 90]] {
      for component in vertex {
        buffer.extend_from_slice(&component.to_le_bytes());
      }
    }
    buffer.extend_from_slice(&0i32.to_le_bytes());
    for index in [0i32, 1, 2] {
      buffer.extend_from_slice(&index.to_le_bytes());
    }
    for _ in 0..6 {
      buffer.extend_from_slice(&0i32.to_le_bytes());
    }
    buffer.extend_from_slice(&0i16.to_le_bytes());
    buffer.extend_from_slice(&0u16.to_le_bytes());
    buffer
  }

  fn texture_file() -> Vec<u8> {
    vec![1u8; TEXTURE_SLOT_COUNT * TEXTURE_DIM * TEXTURE_DIM]
  }

  #[test]
  fn decodes_the_whole_file_set() {
    let scene = IgnTrackLoader::decode(
      &mesh_file(),
      &placement_file(),
      &palette_file(),
      &texture_file(),
    )
    .unwrap();

    assert_eq!(scene.mesh.vertices, vec![
      glam::Vec3::new(1.0, 3.0, -2.0),
      glam::Vec3::new(4.0, 6.0, -5.0),
      glam::Vec3::new(7.0, 9.0, -8.0),
    ]);
    assert_eq!(scene.mesh.triangles.len(), 1);
    assert_eq!(scene.mesh.triangles[0].indices, [0, 1, 2]);
    assert_eq!(scene.images.len(), TEXTURE_SLOT_COUNT);
  }

  #[test]
  fn decoding_twice_yields_identical_scenes() {
    let mesh_data = mesh_file();
    let placement_data = placement_file();
    let palette_data = palette_file();
    let texture_data = texture_file();

    let first =
      IgnTrackLoader::decode(&mesh_data, &placement_data, &palette_data, &texture_data).unwrap();
    let second =
      IgnTrackLoader::decode(&mesh_data, &placement_data, &palette_data, &texture_data).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn any_bad_file_fails_the_whole_import() {
    let result = IgnTrackLoader::decode(
      &mesh_file(),
      &placement_file(),
      &palette_file()[..100],
      &texture_file(),
    );
    assert!(matches!(result, Err(IgnTrackError::TruncatedInput { stage: "palette", .. })));
  }

  #[test]
  fn loads_a_track_from_disk() {
    let dir = std::env::temp_dir().join("ign_track_loader_test");
    std::fs::create_dir_all(&dir).unwrap();
    let mesh_path = dir.join("TRACK01.MSH");
    std::fs::write(&mesh_path, mesh_file()).unwrap();
    std::fs::write(dir.join("TRACK01.PLC"), placement_file()).unwrap();
    std::fs::write(dir.join("TRACK01.COL"), palette_file()).unwrap();
    std::fs::write(dir.join("TRACK01.TEX"), texture_file()).unwrap();

    let scene = crate::scene::IgnScene::new(&mesh_path).unwrap();
    assert_eq!(scene.vertex_count(), 3);
    assert_eq!(scene.images.len(), TEXTURE_SLOT_COUNT);

    std::fs::remove_dir_all(&dir).ok();
  }

  #[test]
  fn missing_sibling_file_reports_its_path() {
    let dir = std::env::temp_dir().join("ign_track_loader_missing_test");
    std::fs::create_dir_all(&dir).unwrap();
    let mesh_path = dir.join("TRACK02.MSH");
    std::fs::write(&mesh_path, mesh_file()).unwrap();

    match IgnTrackLoader::load(&mesh_path) {
      Err(IgnTrackError::Io { path, .. }) => {
        assert_eq!(path, dir.join("TRACK02.PLC"));
      },
      other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }

    std::fs::remove_dir_all(&dir).ok();
  }
}
