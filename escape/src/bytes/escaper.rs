use std::borrow::Cow;
use std::fmt;

use crate::bytes::escape_from;
use crate::bytes::to_text;

/// An escaper driven by an arbitrary per-byte function.
///
/// The function returns the replacement for a byte, or `None` if it should be
/// left alone. An empty replacement deletes the byte. As with
/// [`runes::Escaper`][crate::runes::Escaper], the function must be total and
/// should prefer `None` over replacing a byte with itself.
#[derive(Copy, Clone)]
pub struct Escaper<F> {
  escape: F,
}

impl<F, R> Escaper<F>
where
  F: Fn(u8) -> Option<R>,
  R: AsRef<[u8]>,
{
  /// Wraps an escape function.
  pub fn new(escape: F) -> Self {
    Self { escape }
  }

  /// Escapes every byte of `input`, borrowing it if nothing is replaced.
  ///
  /// ```
  /// # use escape::bytes::*;
  /// let e = Escaper::new(|b: u8| (b == b'\n').then_some(&b"\\n"[..]));
  /// assert_eq!(e.escape_bytes(b"a\nb"), &b"a\\nb"[..]);
  /// ```
  pub fn escape_bytes<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
    match input.iter().position(|&b| (self.escape)(b).is_some()) {
      Some(start) => self.escape_slow(input, start),
      None => Cow::Borrowed(input),
    }
  }

  /// Escapes `input`, assuming that no byte before `start` needs escaping.
  ///
  /// # Panics
  ///
  /// Panics if `start > input.len()`.
  pub fn escape_slow<'a>(
    &self,
    input: &'a [u8],
    start: usize,
  ) -> Cow<'a, [u8]> {
    assert!(start <= input.len(), "escape start out of range: {start}");
    escape_from(input, start, &self.escape)
  }
}

impl<F, R> crate::Escaper for Escaper<F>
where
  F: Fn(u8) -> Option<R> + Send + Sync,
  R: AsRef<[u8]>,
{
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
    to_text(s, self.escape_bytes(s.as_bytes()))
  }
}

impl<F> fmt::Debug for Escaper<F> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("bytes::Escaper(..)")
  }
}
