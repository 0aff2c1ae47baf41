use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::bytes::escape_from;
use crate::bytes::to_text;
use crate::bytes::EscaperMap;

/// A builder for bare replacement tables, with no safe range and no
/// fallback.
///
/// Every byte without a mapping is left alone.
#[derive(Clone, Debug, Default)]
pub struct SimpleBuilder {
  map: BTreeMap<u8, Vec<u8>>,
}

impl SimpleBuilder {
  /// Creates a new, empty builder.
  pub fn new() -> Self {
    Self::default()
  }

  /// Maps `b` to `replacement`, overwriting any previous mapping.
  pub fn add_escape(
    &mut self,
    b: u8,
    replacement: impl AsRef<[u8]>,
  ) -> &mut Self {
    self.map.insert(b, replacement.as_ref().to_vec());
    self
  }

  /// Maps every byte of `bytes` to `replacement`.
  pub fn add_escapes(
    &mut self,
    bytes: impl IntoIterator<Item = u8>,
    replacement: impl AsRef<[u8]>,
  ) -> &mut Self {
    for b in bytes {
      self.add_escape(b, replacement.as_ref());
    }
    self
  }

  /// Returns a snapshot of the mappings as a table.
  pub fn to_map(&self) -> EscaperMap {
    EscaperMap::new(self.map.iter().map(|(&b, r)| (b, r)))
  }

  /// Builds an escaper that applies exactly the current mappings.
  pub fn to_escaper(&self) -> ByteArrayEscaper {
    tracing::debug!(mappings = self.map.len(), "building byte table escaper");
    ByteArrayEscaper::new(self.to_map())
  }
}

/// An escaper that replaces the bytes its table maps and nothing else.
#[derive(Clone, Debug)]
pub struct ByteArrayEscaper {
  table: EscaperMap,
}

impl ByteArrayEscaper {
  /// Creates a new escaper around `table`.
  pub fn new(table: EscaperMap) -> Self {
    Self { table }
  }

  /// Returns the replacement for a single byte, if it has one.
  pub fn escape_byte(&self, b: u8) -> Option<&[u8]> {
    self.table.get(b)
  }

  /// Escapes every byte of `input`, borrowing it if nothing is replaced.
  pub fn escape_bytes<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
    match input.iter().position(|&b| self.table.get(b).is_some()) {
      Some(start) => escape_from(input, start, |b| self.table.get(b)),
      None => Cow::Borrowed(input),
    }
  }
}

impl crate::Escaper for ByteArrayEscaper {
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
    to_text(s, self.escape_bytes(s.as_bytes()))
  }
}
