use std::borrow::Cow;

use crate::bytes::escape_from;
use crate::bytes::to_text;
use crate::bytes::EscaperMap;

/// The fallback of an [`ArrayBasedEscaper`], consulted for bytes that have no
/// table entry and lie outside the safe range.
pub trait EscapeUnsafe: Send + Sync {
  /// Returns the replacement for `b`, or `None` to leave it alone.
  fn escape_unsafe(&self, b: u8) -> Option<Cow<'_, [u8]>>;
}

impl<F, R> EscapeUnsafe for F
where
  F: Fn(u8) -> Option<R> + Send + Sync,
  R: Into<Cow<'static, [u8]>>,
{
  fn escape_unsafe(&self, b: u8) -> Option<Cow<'_, [u8]>> {
    self(b).map(Into::into)
  }
}

/// A fallback that replaces every unsafe byte with the same bytes, or leaves
/// all of them alone.
#[derive(Clone, Debug, Default)]
pub struct UnsafeReplacement(Option<Box<[u8]>>);

impl UnsafeReplacement {
  /// Creates a new fallback. `None` leaves unsafe bytes unchanged; an empty
  /// replacement deletes them.
  pub fn new(replacement: Option<&[u8]>) -> Self {
    Self(replacement.map(Box::from))
  }
}

impl EscapeUnsafe for UnsafeReplacement {
  fn escape_unsafe(&self, _: u8) -> Option<Cow<'_, [u8]>> {
    self.0.as_deref().map(Cow::Borrowed)
  }
}

/// An escaper driven by a replacement table, a range of safe bytes and a
/// fallback.
///
/// Bytes are resolved the same way as by
/// [`runes::ArrayBasedEscaper`][crate::runes::ArrayBasedEscaper]: table
/// entry first, then the safe range, then the fallback.
#[derive(Clone)]
pub struct ArrayBasedEscaper<U = UnsafeReplacement> {
  table: EscaperMap,
  safe_min: u8,
  safe_max: u8,
  fallback: U,
}

impl<U: EscapeUnsafe> ArrayBasedEscaper<U> {
  /// Creates a new escaper with the safe range `safe_min..=safe_max`.
  ///
  /// If `safe_max < safe_min`, no byte is safe.
  pub fn new(
    table: EscaperMap,
    safe_min: u8,
    safe_max: u8,
    fallback: U,
  ) -> Self {
    let (safe_min, safe_max) = match safe_max < safe_min {
      true => (u8::MAX, 0),
      false => (safe_min, safe_max),
    };

    Self {
      table,
      safe_min,
      safe_max,
      fallback,
    }
  }

  /// Returns the replacement for a single byte, or `None` if it is left
  /// alone.
  pub fn escape_byte(&self, b: u8) -> Option<Cow<'_, [u8]>> {
    if let Some(r) = self.table.get(b) {
      return Some(Cow::Borrowed(r));
    }
    if (self.safe_min..=self.safe_max).contains(&b) {
      return None;
    }
    self.fallback.escape_unsafe(b)
  }

  /// Escapes every byte of `input`, borrowing it if nothing is replaced.
  pub fn escape_bytes<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
    let needs_escape = |b: u8| {
      self.table.get(b).is_some() || b < self.safe_min || b > self.safe_max
    };

    match input.iter().position(|&b| needs_escape(b)) {
      Some(start) => escape_from(input, start, |b| self.escape_byte(b)),
      None => Cow::Borrowed(input),
    }
  }

  /// Returns the replacement table.
  pub fn table(&self) -> &EscaperMap {
    &self.table
  }
}

impl<U: EscapeUnsafe> crate::Escaper for ArrayBasedEscaper<U> {
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
    to_text(s, self.escape_bytes(s.as_bytes()))
  }
}
