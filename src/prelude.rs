pub use crate::error::IgnTrackError;
pub use crate::scene::IgnScene;
pub use crate::scene::mesh::{
  IgnMesh,
  IgnTriangle,
  IgnTriangleExtra,
};
pub use crate::scene::image_data::IgnTextureImage;
pub use crate::scene::loader::IgnTrackLoader;
pub use crate::scene::loader::mesh_loader::IgnMeshLoader;
pub use crate::scene::loader::texture_loader::IgnTextureLoader;
pub use crate::scene::loader::palette::{
  IgnColor,
  IgnPalette,
};
pub use crate::scene::loader::placement::{
  IgnPlacement,
  IgnPlacementTable,
};
pub use crate::scene::loader::pic_loader::IgnPicImage;
