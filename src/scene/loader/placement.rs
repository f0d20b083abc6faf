use glam::IVec3;

use crate::error::IgnTrackError;
use super::reader::IgnByteReader;

/// Two leading words plus a three-component offset.
const PLACEMENT_RECORD_LEN: usize = 20;

/// The placement record of one submesh: its integer world offset in raw
/// fixed-point units, preceded by a size word and an id/flag word that the
/// geometry pipeline does not consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnPlacement {
  pub size: i32,
  pub flags: i32,
  pub offset: IVec3,
}

/// The placement table of a track: one record per submesh, in the same
/// order the geometry file stores its submesh blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnPlacementTable {
  pub places: Vec<IgnPlacement>,
}

impl IgnPlacementTable {
  /// Decode a placement file.
  /// param data: The whole placement file buffer.
  /// return: The placement table.
  pub fn decode(data: &[u8]) -> Result<Self, IgnTrackError> {
    let mut reader = IgnByteReader::new(data, "placement");

    let count = reader.read_i32()?;
    if count < 0 {
      return Err(IgnTrackError::InvalidCount {
        stage: "placement",
        what: "submesh count",
        count,
      });
    }

    // Check the whole table length before allocating.
    let count = count as usize;
    let needed = count * PLACEMENT_RECORD_LEN;
    if reader.remaining() < needed {
      return Err(IgnTrackError::TruncatedInput {
        stage: "placement",
        offset: reader.offset(),
        needed,
        available: reader.remaining(),
      });
    }

    let mut places = Vec::with_capacity(count);
    for _ in 0..count {
      let size = reader.read_i32()?;
      let flags = reader.read_i32()?;
      let x = reader.read_i32()?;
      let y = reader.read_i32()?;
      let z = reader.read_i32()?;
      places.push(IgnPlacement {
        size,
        flags,
        offset: IVec3::new(x, y, z),
      });
    }

    Ok(Self {
      places,
    })
  }

  pub fn submesh_count(&self) -> usize {
    self.places.len()
  }
}
