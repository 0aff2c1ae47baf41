use std::borrow::Cow;

use crate::runes::escape_chars;
use crate::runes::EscaperMap;

/// The fallback of an [`ArrayBasedEscaper`], consulted for `char`s that have
/// no table entry and lie outside the safe range.
///
/// This is implemented for closures returning `Option<&'static str>`,
/// `Option<String>` and the like.
pub trait EscapeUnsafe: Send + Sync {
  /// Returns the replacement for `c`, or `None` to leave it alone.
  fn escape_unsafe(&self, c: char) -> Option<Cow<'_, str>>;
}

impl<F, R> EscapeUnsafe for F
where
  F: Fn(char) -> Option<R> + Send + Sync,
  R: Into<Cow<'static, str>>,
{
  fn escape_unsafe(&self, c: char) -> Option<Cow<'_, str>> {
    self(c).map(Into::into)
  }
}

/// A fallback that replaces every unsafe `char` with the same string, or
/// leaves all of them alone.
///
/// This is what [`Builder::build()`][crate::runes::Builder::build] uses.
#[derive(Clone, Debug, Default)]
pub struct UnsafeReplacement(Option<Box<str>>);

impl UnsafeReplacement {
  /// Creates a new fallback. `None` leaves unsafe `char`s unchanged; an empty
  /// string deletes them.
  pub fn new(replacement: Option<&str>) -> Self {
    Self(replacement.map(Box::from))
  }
}

impl EscapeUnsafe for UnsafeReplacement {
  fn escape_unsafe(&self, _: char) -> Option<Cow<'_, str>> {
    self.0.as_deref().map(Cow::Borrowed)
  }
}

/// An escaper driven by a replacement table, a range of safe `char`s and a
/// fallback.
///
/// Each `char` is escaped by the first of these rules that applies:
///
/// 1. If the table has an entry for it, that entry is the replacement. This
///    holds even inside the safe range.
/// 2. If it lies in the safe range, it is left alone.
/// 3. Otherwise, the fallback decides.
///
/// ```
/// # use escape::runes::*;
/// use escape::Escaper as _;
///
/// let e = ArrayBasedEscaper::new(
///   EscaperMap::new([('&', "<and>")]),
///   ' ',
///   '~',
///   |c: char| Some(format!("[{:X}]", c as u32)),
/// );
/// assert_eq!(e.escape("R&D"), "R<and>D");
/// assert_eq!(e.escape("\u{3C0}r²"), "[3C0]r[B2]");
/// ```
#[derive(Clone)]
pub struct ArrayBasedEscaper<U = UnsafeReplacement> {
  table: EscaperMap,
  safe_min: char,
  safe_max: char,
  fallback: U,
}

impl<U: EscapeUnsafe> ArrayBasedEscaper<U> {
  /// Creates a new escaper with the safe range `safe_min..=safe_max`.
  ///
  /// If `safe_max < safe_min`, no `char` is safe, and every `char` without a
  /// table entry goes to the fallback.
  pub fn new(
    table: EscaperMap,
    safe_min: char,
    safe_max: char,
    fallback: U,
  ) -> Self {
    let (safe_min, safe_max) = match safe_max < safe_min {
      true => (char::MAX, '\0'),
      false => (safe_min, safe_max),
    };

    Self {
      table,
      safe_min,
      safe_max,
      fallback,
    }
  }

  /// Returns the replacement for a single `char`, or `None` if it is left
  /// alone.
  pub fn escape_char(&self, c: char) -> Option<Cow<'_, str>> {
    if let Some(r) = self.table.get(c) {
      return Some(Cow::Borrowed(r));
    }
    if (self.safe_min..=self.safe_max).contains(&c) {
      return None;
    }
    self.fallback.escape_unsafe(c)
  }

  /// Returns the replacement table.
  pub fn table(&self) -> &EscaperMap {
    &self.table
  }

  fn needs_escape(&self, c: char) -> bool {
    self.table.get(c).is_some() || c < self.safe_min || c > self.safe_max
  }
}

impl<U: EscapeUnsafe> crate::Escaper for ArrayBasedEscaper<U> {
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
    match s.char_indices().find(|&(_, c)| self.needs_escape(c)) {
      Some((start, _)) => escape_chars(s, start, |c| self.escape_char(c)),
      None => Cow::Borrowed(s),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::Escaper as _;

  fn table() -> EscaperMap {
    EscaperMap::new([('&', "<and>"), ('<', "<less>")])
  }

  #[test]
  fn table_beats_safe_range() {
    let e = ArrayBasedEscaper::new(table(), '\0', char::MAX, |_: char| {
      Some("unreachable")
    });
    assert_eq!(e.escape("&"), "<and>");
    assert_eq!(e.escape("a<b"), "a<less>b");
  }

  #[test]
  fn reversed_range_makes_nothing_safe() {
    let e = ArrayBasedEscaper::new(table(), 'z', 'a', |_: char| Some("?"));
    assert_eq!(e.escape("m&\u{10FFFF}\0"), "?<and>??");
  }

  #[test]
  fn passing_fallback_borrows() {
    let e = ArrayBasedEscaper::new(table(), 'a', 'z', |_: char| None::<String>);
    assert!(matches!(e.escape("ABC xyz"), Cow::Borrowed("ABC xyz")));
    assert_eq!(e.escape("AB&C"), "AB<and>C");
  }

  #[test]
  fn unsafe_replacement() {
    let strip = UnsafeReplacement::new(Some(""));
    let keep = UnsafeReplacement::new(None);
    assert_eq!(strip.escape_unsafe('x').as_deref(), Some(""));
    assert_eq!(keep.escape_unsafe('x'), None);

    let e = ArrayBasedEscaper::new(table(), 'a', 'z', strip);
    assert_eq!(e.escape("aBc&"), "ac<and>");
  }
}
