use std::borrow::Cow;
use std::fmt;

use crate::buffer;
use crate::buffer::Growth;

/// An escaper driven by an arbitrary per-`char` function.
///
/// The function returns the replacement for a `char`, or `None` if it should
/// be left alone. An empty replacement deletes the `char`.
///
/// The function must be total and pure. It should return `None` rather than
/// a replacement equal to the `char` itself: both give the same result, but
/// only the former avoids copying the input.
///
/// ```
/// # use escape::runes::*;
/// use escape::Escaper as _;
///
/// let e = Escaper::new(|c: char| match c {
///   '\n' => Some("\\n"),
///   '\0' => Some(""),
///   _ => None,
/// });
/// assert_eq!(e.escape("a\nb\0"), "a\\nb");
/// ```
#[derive(Copy, Clone)]
pub struct Escaper<F> {
  escape: F,
}

impl<F, R> Escaper<F>
where
  F: Fn(char) -> Option<R>,
  R: AsRef<str>,
{
  /// Wraps an escape function.
  pub fn new(escape: F) -> Self {
    Self { escape }
  }

  /// Escapes `s`, assuming that no `char` before byte offset `start` needs
  /// escaping.
  ///
  /// This is the slow path of [`crate::Escaper::escape()`], exposed for
  /// callers that have already found the first `char` needing replacement.
  ///
  /// # Panics
  ///
  /// Panics if `start` is not on a `char` boundary of `s`.
  pub fn escape_slow<'a>(&self, s: &'a str, start: usize) -> Cow<'a, str> {
    escape_chars(s, start, &self.escape)
  }
}

impl<F, R> crate::Escaper for Escaper<F>
where
  F: Fn(char) -> Option<R> + Send + Sync,
  R: AsRef<str>,
{
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
    match s.char_indices().find(|&(_, c)| (self.escape)(c).is_some()) {
      Some((start, _)) => self.escape_slow(s, start),
      None => Cow::Borrowed(s),
    }
  }
}

impl<F> fmt::Debug for Escaper<F> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("runes::Escaper(..)")
  }
}

/// Runs the shared slow path over the `char`s of `s` from `start` on.
pub(crate) fn escape_chars<'a, R: AsRef<str>>(
  s: &'a str,
  start: usize,
  escape: impl Fn(char) -> Option<R>,
) -> Cow<'a, str> {
  let units = s[start..].char_indices().map(|(i, c)| (i + start, c));
  let escaped = buffer::escape_slow(
    s.as_bytes(),
    start,
    units,
    char::len_utf8,
    |c| escape(c).map(StrBytes),
    Growth::RUNES,
  );

  let buf = match escaped {
    Cow::Borrowed(_) => return Cow::Borrowed(s),
    Cow::Owned(buf) => buf,
  };

  Cow::Owned(match cfg!(debug_assertions) {
    true => String::from_utf8(buf)
      .unwrap_or_else(|e| panic!("escaping produced invalid UTF-8: {e}")),

    // SAFETY: `buf` is made of whole-`char` runs copied out of `s`,
    // interleaved with replacements that are themselves `str`s.
    false => unsafe { String::from_utf8_unchecked(buf) },
  })
}

/// Views a `str`-like replacement as bytes for the slow path.
struct StrBytes<R>(R);

impl<R: AsRef<str>> AsRef<[u8]> for StrBytes<R> {
  fn as_ref(&self) -> &[u8] {
    self.0.as_ref().as_bytes()
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::Escaper as _;

  #[test]
  fn never_splits_chars() {
    let e = Escaper::new(|c: char| (c == 'é').then_some("e"));
    assert_eq!(e.escape("café crémé"), "cafe creme");
    assert_eq!(e.escape("日本é"), "日本e");
  }

  #[test]
  fn borrows_when_untouched() {
    let e = Escaper::new(|c: char| (c == '\0').then_some(String::new()));
    assert!(matches!(e.escape(""), Cow::Borrowed("")));
    assert!(matches!(e.escape("日本"), Cow::Borrowed("日本")));
    assert_eq!(e.escape("\0日\0本\0"), "日本");
  }

  #[test]
  fn slow_path_from_offset() {
    let e =
      Escaper::new(|c: char| c.is_ascii_digit().then(|| format!("<{c}>")));
    assert_eq!(e.escape_slow("é1é2", 2), "é<1>é<2>");
    assert_eq!(e.escape_slow("12", 1), "1<2>");
  }

  #[test]
  #[should_panic]
  fn slow_path_rejects_split_offsets() {
    let e = Escaper::new(|_: char| None::<&str>);
    e.escape_slow("é", 1);
  }
}
