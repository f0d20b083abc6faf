use crate::error::IgnTrackError;

/// A bounds-checked little-endian cursor over one fully buffered track file.
///
/// The track formats are positional: no record tags, no length prefixes
/// beyond a few leading counts. Every read goes through `take`, so a short
/// buffer always surfaces as `TruncatedInput` with the stage name and the
/// byte offset where the shortfall occurred.
pub struct IgnByteReader<'a> {
  data: &'a [u8],
  offset: usize,
  stage: &'static str,
}

impl<'a> IgnByteReader<'a> {
  /// Create a new reader.
  /// param data: The whole file buffer.
  /// param stage: The decode stage name used in error reports.
  /// return: The reader.
  pub fn new(data: &'a [u8], stage: &'static str) -> Self {
    Self {
      data,
      offset: 0,
      stage,
    }
  }

  pub fn offset(&self) -> usize {
    self.offset
  }

  pub fn remaining(&self) -> usize {
    self.data.len() - self.offset
  }

  fn take(&mut self, needed: usize) -> Result<&'a [u8], IgnTrackError> {
    let available = self.remaining();
    if available < needed {
      return Err(IgnTrackError::TruncatedInput {
        stage: self.stage,
        offset: self.offset,
        needed,
        available,
      });
    }
    let bytes = &self.data[self.offset..self.offset + needed];
    self.offset += needed;
    Ok(bytes)
  }

  /// Read a raw byte run.
  pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], IgnTrackError> {
    self.take(len)
  }

  /// Skip over bytes without interpreting them.
  pub fn skip(&mut self, len: usize) -> Result<(), IgnTrackError> {
    self.take(len)?;
    Ok(())
  }

  pub fn read_u8(&mut self) -> Result<u8, IgnTrackError> {
    let bytes = self.take(1)?;
    Ok(bytes[0])
  }

  pub fn read_i16(&mut self) -> Result<i16, IgnTrackError> {
    let bytes = self.take(2)?;
    Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
  }

  pub fn read_u16(&mut self) -> Result<u16, IgnTrackError> {
    let bytes = self.take(2)?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
  }

  pub fn read_i32(&mut self) -> Result<i32, IgnTrackError> {
    let bytes = self.take(4)?;
    Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
  }

  pub fn read_u32(&mut self) -> Result<u32, IgnTrackError> {
    let bytes = self.take(4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
  }
}
