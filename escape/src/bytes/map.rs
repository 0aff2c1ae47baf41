use std::sync::Arc;

/// A replacement table indexed by byte.
///
/// Like [`runes::EscaperMap`][crate::runes::EscaperMap], the table runs up to
/// the highest mapped byte and is shared between clones.
#[derive(Clone, Debug)]
pub struct EscaperMap {
  table: Arc<[Option<Box<[u8]>>]>,
}

impl EscaperMap {
  /// Builds a table from `(byte, replacement)` pairs.
  ///
  /// If a byte occurs more than once, its last replacement wins.
  pub fn new<S: AsRef<[u8]>>(
    map: impl IntoIterator<Item = (u8, S)>,
  ) -> Self {
    let mut table: Vec<Option<Box<[u8]>>> = Vec::new();
    for (b, r) in map {
      let idx = usize::from(b);
      if table.len() <= idx {
        table.resize(idx + 1, None);
      }
      table[idx] = Some(r.as_ref().into());
    }

    Self {
      table: table.into(),
    }
  }

  /// Returns the replacement for `b`, if it has one.
  pub fn get(&self, b: u8) -> Option<&[u8]> {
    self.table.get(usize::from(b))?.as_deref()
  }

  /// Returns the length of the underlying table: one more than the highest
  /// mapped byte, or zero if nothing is mapped.
  pub fn len(&self) -> usize {
    self.table.len()
  }

  /// Returns whether nothing is mapped.
  pub fn is_empty(&self) -> bool {
    self.table.is_empty()
  }
}

impl Default for EscaperMap {
  fn default() -> Self {
    Self::new(Vec::<(u8, Vec<u8>)>::new())
  }
}

impl<S: AsRef<[u8]>> FromIterator<(u8, S)> for EscaperMap {
  fn from_iter<I: IntoIterator<Item = (u8, S)>>(iter: I) -> Self {
    Self::new(iter)
  }
}
