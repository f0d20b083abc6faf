use std::path::PathBuf;

use thiserror::Error;

/// The error type of the ign-track crate.
///
/// Every decode failure aborts the whole import; there is no partial-success
/// mode and no retry (the inputs are static byte buffers).
#[derive(Error, Debug)]
pub enum IgnTrackError {
  /// A buffer ran out before a stage's declared layout was satisfied.
  #[error("truncated {stage} data at offset {offset}: needed {needed} bytes, {available} available")]
  TruncatedInput {
    stage: &'static str,
    offset: usize,
    needed: usize,
    available: usize,
  },

  /// A count field is negative.
  #[error("invalid {what} {count} in {stage} data")]
  InvalidCount {
    stage: &'static str,
    what: &'static str,
    count: i32,
  },

  /// The placement table and the geometry file disagree on the submesh count.
  #[error("placement declares {declared} submeshes but {trailing} bytes of mesh data remain undecoded")]
  CountMismatch {
    declared: usize,
    trailing: usize,
  },

  /// A polygon references a vertex outside its own submesh.
  #[error("triangle index {index} out of range for submesh {submesh} with {vertex_count} vertices")]
  IndexOutOfRange {
    submesh: usize,
    index: i32,
    vertex_count: i32,
  },

  /// Reading one of the track files failed.
  #[error("failed to read track file {path:?}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The path does not carry a recognized track extension.
  #[error("unsupported track file {0:?}")]
  UnsupportedFile(PathBuf),

  /// The PIC magic word did not match.
  #[error("invalid PIC magic {found}")]
  InvalidMagic {
    found: u16,
  },
}
