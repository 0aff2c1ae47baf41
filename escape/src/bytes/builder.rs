use std::collections::BTreeMap;

use crate::bytes::ArrayBasedEscaper;
use crate::bytes::EscaperMap;
use crate::bytes::UnsafeReplacement;

/// A reusable configuration for byte [`ArrayBasedEscaper`]s.
///
/// This is the byte counterpart of [`runes::Builder`][crate::runes::Builder],
/// with the same defaults and the same snapshot semantics.
///
/// ```
/// # use escape::bytes::*;
/// let e = Builder::new()
///   .set_safe_range(b'a', b'z')
///   .set_unsafe_replacement(Some(&b"."[..]))
///   .add_escape(b'-', "_")
///   .build();
/// assert_eq!(e.escape_bytes(b"my-Name"), &b"my_.ame"[..]);
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
  map: BTreeMap<u8, Vec<u8>>,
  safe_min: u8,
  safe_max: u8,
  unsafe_replacement: Option<Vec<u8>>,
}

impl Builder {
  /// Creates a new builder that escapes nothing.
  pub fn new() -> Self {
    Self {
      map: BTreeMap::new(),
      safe_min: 0,
      safe_max: u8::MAX,
      unsafe_replacement: None,
    }
  }

  /// Sets the range of bytes that need no escaping unless mapped.
  pub fn set_safe_range(&mut self, min: u8, max: u8) -> &mut Self {
    self.safe_min = min;
    self.safe_max = max;
    self
  }

  /// Sets the replacement for unmapped bytes outside the safe range.
  ///
  /// `None` leaves such bytes unchanged. An empty replacement deletes them.
  pub fn set_unsafe_replacement(
    &mut self,
    replacement: Option<&[u8]>,
  ) -> &mut Self {
    self.unsafe_replacement = replacement.map(<[u8]>::to_vec);
    self
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

  /// Builds an escaper out of the current configuration.
  pub fn build(&self) -> ArrayBasedEscaper {
    tracing::debug!(
      mappings = self.map.len(),
      safe_min = self.safe_min,
      safe_max = self.safe_max,
      "building byte escaper"
    );

    let table = EscaperMap::new(self.map.iter().map(|(&b, r)| (b, r)));
    let fallback = UnsafeReplacement::new(self.unsafe_replacement.as_deref());
    ArrayBasedEscaper::new(table, self.safe_min, self.safe_max, fallback)
  }
}

impl Default for Builder {
  fn default() -> Self {
    Self::new()
  }
}
