use glam::Vec3;

use crate::error::IgnTrackError;
use crate::scene::mesh::{
  IgnMesh,
  IgnTriangle,
  IgnTriangleExtra,
};
use super::placement::{
  IgnPlacement,
  IgnPlacementTable,
};
use super::reader::IgnByteReader;

/// Raw fixed-point units to scene units.
const RAW_TO_SCENE: f32 = 1.0 / 10.0;

/// Three position components.
const VERTEX_RECORD_LEN: usize = 12;

/// Ten words, one signed short, one unsigned short.
const POLYGON_RECORD_LEN: usize = 44;

/// The track geometry loader.
pub struct IgnMeshLoader;

/// The implementation of the track geometry loader.
impl IgnMeshLoader {
  /// Load the geometry file and merge all submeshes into one mesh.
  /// param data: The whole geometry file buffer.
  /// param places: The placement table; submesh j uses record j.
  /// return: The merged mesh.
  pub fn load(data: &[u8], places: &IgnPlacementTable) -> Result<IgnMesh, IgnTrackError> {
    let mut reader = IgnByteReader::new(data, "mesh");
    let mut vertices = Vec::new();
    let mut triangles = Vec::new();

    for (submesh, place) in places.places.iter().enumerate() {
      log::debug!("Loading submesh {} of {}.", submesh, places.submesh_count());

      let vertex_count = reader.read_i32()?;
      if vertex_count < 0 {
        return Err(IgnTrackError::InvalidCount {
          stage: "mesh",
          what: "vertex count",
          count: vertex_count,
        });
      }
      let polygon_count = reader.read_i32()?;
      if polygon_count < 0 {
        return Err(IgnTrackError::InvalidCount {
          stage: "mesh",
          what: "polygon count",
          count: polygon_count,
        });
      }

      let needed = vertex_count as usize * VERTEX_RECORD_LEN
        + polygon_count as usize * POLYGON_RECORD_LEN;
      if reader.remaining() < needed {
        return Err(IgnTrackError::TruncatedInput {
          stage: "mesh",
          offset: reader.offset(),
          needed,
          available: reader.remaining(),
        });
      }

      // Triangle indices are local to this submesh; everything before it is
      // already in the shared buffer.
      let voffset = vertices.len() as u32;

      vertices.reserve(vertex_count as usize);
      for _ in 0..vertex_count {
        let x = reader.read_i32()?;
        let y = reader.read_i32()?;
        let z = reader.read_i32()?;
        vertices.push(Self::world_vertex(x, y, z, place));
      }

      triangles.reserve(polygon_count as usize);
      for _ in 0..polygon_count {
        let word0 = reader.read_i32()?;

        let mut indices = [0u32; 3];
        for slot in indices.iter_mut() {
          let index = reader.read_i32()?;
          if index < 0 || index >= vertex_count {
            return Err(IgnTrackError::IndexOutOfRange {
              submesh,
              index,
              vertex_count,
            });
          }
          *slot = voffset + index as u32;
        }

        let mut words = [0i32; 6];
        for word in words.iter_mut() {
          *word = reader.read_i32()?;
        }
        let short0 = reader.read_i16()?;
        let ushort0 = reader.read_u16()?;

        triangles.push(IgnTriangle {
          indices,
          extra: IgnTriangleExtra {
            word0,
            words,
            short0,
            ushort0,
          },
        });
      }
    }

    // The geometry file must not encode more submeshes than the placement
    // table declared.
    if reader.remaining() > 0 {
      return Err(IgnTrackError::CountMismatch {
        declared: places.submesh_count(),
        trailing: reader.remaining(),
      });
    }

    log::debug!("Read {} vertices from {} submeshes.", vertices.len(), places.submesh_count());
    Ok(IgnMesh {
      vertices,
      triangles,
    })
  }

  /// Transform one raw vertex into world space.
  ///
  /// The placement offset translates the submesh into the shared coordinate
  /// space; the axis remap and negation convert the source engine's
  /// up-axis convention, and must keep this exact sign and component order.
  fn world_vertex(x: i32, y: i32, z: i32, place: &IgnPlacement) -> Vec3 {
    let x = x as i64 + place.offset.x as i64;
    let y = y as i64 - place.offset.y as i64;
    let z = z as i64 + place.offset.z as i64;
    Vec3::new(
      x as f32 * RAW_TO_SCENE,
      z as f32 * RAW_TO_SCENE,
      -(y as f32) * RAW_TO_SCENE,
    )
  }
}
