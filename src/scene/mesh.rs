use glam::Vec3;
use serde::{
  Deserialize, Serialize
};

/// Per-polygon metadata words carried through from the source record.
/// The semantics are unknown and the values are unvalidated; they are kept
/// so that no information from the format is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IgnTriangleExtra {
  pub word0: i32,
  pub words: [i32; 6],
  pub short0: i16,
  pub ushort0: u16,
}

/// One triangle of the merged mesh. The indices point into the shared
/// vertex buffer; they have already been rebased past all earlier submeshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnTriangle {
  pub indices: [u32; 3],
  pub extra: IgnTriangleExtra,
}

/// A mesh is a collection of vertices and triangles that define a 3D object.
///
/// All submeshes of a track have been merged into the one vertex buffer, so
/// every triangle index is strictly less than `vertices.len()`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IgnMesh {
  pub vertices: Vec<Vec3>,
  pub triangles: Vec<IgnTriangle>,
}

impl IgnMesh {
  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }
}
