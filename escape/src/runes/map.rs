use std::sync::Arc;

/// A replacement table indexed by `char`.
///
/// The table is a dense array running up to the highest mapped `char`, so it
/// is best suited to small, low `char`s. Cloning an `EscaperMap` is cheap and
/// shares the table, which lets several escapers use one table.
#[derive(Clone, Debug)]
pub struct EscaperMap {
  table: Arc<[Option<Box<str>>]>,
}

impl EscaperMap {
  /// Builds a table from `(char, replacement)` pairs.
  ///
  /// If a `char` occurs more than once, its last replacement wins.
  pub fn new<S: AsRef<str>>(
    map: impl IntoIterator<Item = (char, S)>,
  ) -> Self {
    let entries = map.into_iter().collect::<Vec<_>>();
    let Some(max) = entries.iter().map(|&(c, _)| c as usize).max() else {
      return Self::default();
    };

    let mut table: Vec<Option<Box<str>>> = vec![None; max + 1];
    for (c, r) in entries {
      table[c as usize] = Some(r.as_ref().into());
    }

    Self {
      table: table.into(),
    }
  }

  /// Returns the replacement for `c`, if it has one.
  pub fn get(&self, c: char) -> Option<&str> {
    self.table.get(c as usize)?.as_deref()
  }

  /// Returns the length of the underlying table: one more than the highest
  /// mapped `char`, or zero if nothing is mapped.
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
    Self {
      table: Vec::new().into(),
    }
  }
}

impl<S: AsRef<str>> FromIterator<(char, S)> for EscaperMap {
  fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
    Self::new(iter)
  }
}
