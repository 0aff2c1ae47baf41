use std::collections::BTreeMap;

use crate::runes::ArrayBasedEscaper;
use crate::runes::EscapeUnsafe;
use crate::runes::EscaperMap;
use crate::runes::UnsafeReplacement;

/// A reusable configuration for [`ArrayBasedEscaper`]s.
///
/// A fresh builder maps nothing, considers every `char` safe, and has no
/// unsafe replacement, so it builds an escaper that escapes nothing.
///
/// Each call to [`Builder::build()`] takes a snapshot. Changing the builder
/// afterwards, even remapping a `char` that was already mapped, does not
/// affect escapers built earlier.
///
/// ```
/// # use escape::runes::*;
/// use escape::Escaper as _;
///
/// let mut b = Builder::new();
/// b.add_escape('"', "&quot;");
/// let quotes = b.build();
///
/// b.add_escape('"', "\\\"");
/// assert_eq!(quotes.escape("\"hi\""), "&quot;hi&quot;");
/// assert_eq!(b.build().escape("\"hi\""), "\\\"hi\\\"");
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
  map: BTreeMap<char, String>,
  safe_min: char,
  safe_max: char,
  unsafe_replacement: Option<String>,
}

impl Builder {
  /// Creates a new builder.
  pub fn new() -> Self {
    Self {
      map: BTreeMap::new(),
      safe_min: '\0',
      safe_max: char::MAX,
      unsafe_replacement: None,
    }
  }

  /// Sets the range of `char`s that need no escaping unless mapped.
  pub fn set_safe_range(&mut self, min: char, max: char) -> &mut Self {
    self.safe_min = min;
    self.safe_max = max;
    self
  }

  /// Sets the replacement for unmapped `char`s outside the safe range.
  ///
  /// `None` leaves such `char`s unchanged. An empty string deletes them.
  pub fn set_unsafe_replacement(
    &mut self,
    replacement: Option<&str>,
  ) -> &mut Self {
    self.unsafe_replacement = replacement.map(String::from);
    self
  }

  /// Maps `c` to `replacement`, overwriting any previous mapping.
  pub fn add_escape(&mut self, c: char, replacement: &str) -> &mut Self {
    self.map.insert(c, replacement.to_string());
    self
  }

  /// Maps every `char` of `chars` to `replacement`.
  pub fn add_escapes(
    &mut self,
    chars: impl IntoIterator<Item = char>,
    replacement: &str,
  ) -> &mut Self {
    for c in chars {
      self.add_escape(c, replacement);
    }
    self
  }

  /// Builds an escaper out of the current configuration.
  pub fn build(&self) -> ArrayBasedEscaper {
    let fallback = UnsafeReplacement::new(self.unsafe_replacement.as_deref());
    self.build_with(fallback)
  }

  /// Like [`Builder::build()`], but escapes unmapped `char`s outside the
  /// safe range with `fallback` rather than the unsafe replacement.
  pub fn build_with<U: EscapeUnsafe>(
    &self,
    fallback: U,
  ) -> ArrayBasedEscaper<U> {
    tracing::debug!(
      mappings = self.map.len(),
      safe_min = ?self.safe_min,
      safe_max = ?self.safe_max,
      "building char escaper"
    );

    let table = EscaperMap::new(self.map.iter().map(|(&c, r)| (c, r)));
    ArrayBasedEscaper::new(table, self.safe_min, self.safe_max, fallback)
  }
}

impl Default for Builder {
  fn default() -> Self {
    Self::new()
  }
}
