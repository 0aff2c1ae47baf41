//! The `Matcher` value type and its factories.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::matches::replace_where;
use crate::unicode;
use crate::Matches;

/// An immutable predicate over `char`s.
///
/// Matchers are built with the associated functions of this type, such as
/// [`Matcher::is()`] or [`Matcher::whitespace()`], and combined with
/// [`Matcher::negate()`], [`Matcher::and()`] and [`Matcher::or()`]. All text
/// operations come from the [`Matches`] trait.
///
/// Cloning a matcher is cheap: composite matchers share their operands.
///
/// ```
/// # use runematcher::*;
/// let upper_but_not_fk = Matcher::in_range('A', 'Z')
///   .and(Matcher::in_range('F', 'K').negate());
/// assert!(upper_but_not_fk.matches('B'));
/// assert!(!upper_but_not_fk.matches('G'));
/// assert_eq!(upper_but_not_fk.retain_from("HELLO, WORLD"), "ELLOWORLD");
/// ```
#[derive(Clone)]
pub struct Matcher(Kind);

#[derive(Clone)]
enum Kind {
  Any,
  None,
  Is(char),
  IsNot(char),
  IsEither(char, char),
  /// Sorted and deduplicated; always at least three chars.
  AnyOf(Arc<[char]>),
  InRange(char, char),
  Whitespace,
  BreakingWhitespace,
  Ascii,
  Digit,
  Invisible,
  SingleWidth,
  ForPredicate(Arc<dyn Fn(char) -> bool + Send + Sync>),
  Negated(Arc<Matcher>),
  And(Arc<Matcher>, Arc<Matcher>),
  Or(Arc<Matcher>, Arc<Matcher>),
}

impl Matcher {
  /// Matches every char.
  pub fn any() -> Self {
    Self(Kind::Any)
  }

  /// Matches no char at all.
  pub fn none() -> Self {
    Self(Kind::None)
  }

  /// Matches exactly `c`.
  pub fn is(c: char) -> Self {
    Self(Kind::Is(c))
  }

  /// Matches every char except `c`.
  ///
  /// To negate an arbitrary matcher, use [`Matcher::negate()`].
  pub fn is_not(c: char) -> Self {
    Self(Kind::IsNot(c))
  }

  /// Matches any char that occurs in `chars`.
  ///
  /// Order and repetition within `chars` are irrelevant.
  pub fn any_of(chars: &str) -> Self {
    let mut set = chars.chars().collect::<Vec<_>>();
    set.sort_unstable();
    set.dedup();

    match *set.as_slice() {
      [] => Self::none(),
      [c] => Self::is(c),
      [a, b] => Self(Kind::IsEither(a, b)),
      _ => Self(Kind::AnyOf(set.into())),
    }
  }

  /// Matches any char that does not occur in `chars`.
  pub fn none_of(chars: &str) -> Self {
    Self::any_of(chars).negate()
  }

  /// Matches any char in the inclusive range `lo..=hi`.
  ///
  /// If `hi < lo`, the range is empty and nothing matches.
  pub fn in_range(lo: char, hi: char) -> Self {
    Self(Kind::InRange(lo, hi))
  }

  /// Matches whatever `pred` says matches.
  ///
  /// `pred` should be pure, since matchers may call it any number of times,
  /// from any thread.
  pub fn for_predicate(
    pred: impl Fn(char) -> bool + Send + Sync + 'static,
  ) -> Self {
    Self(Kind::ForPredicate(Arc::new(pred)))
  }

  /// Matches Unicode whitespace, i.e. chars with the `White_Space` property.
  pub fn whitespace() -> Self {
    Self(Kind::Whitespace)
  }

  /// Matches whitespace that may be interpreted as a break between words:
  /// every whitespace char except U+00A0, U+2007 and U+202F.
  pub fn breaking_whitespace() -> Self {
    Self(Kind::BreakingWhitespace)
  }

  /// Matches ASCII chars, i.e. those below U+0080.
  pub fn ascii() -> Self {
    Self(Kind::Ascii)
  }

  /// Matches Unicode decimal digits (category Nd).
  ///
  /// To match only `0` through `9`, use `Matcher::in_range('0', '9')`.
  pub fn digit() -> Self {
    Self(Kind::Digit)
  }

  /// Matches chars that render as nothing: space, line and paragraph
  /// separators, controls, format chars and private-use chars.
  pub fn invisible() -> Self {
    Self(Kind::Invisible)
  }

  /// Matches chars whose UTF-8 encoding is a single byte.
  ///
  /// Anything wider is assumed to possibly be double-width.
  pub fn single_width() -> Self {
    Self(Kind::SingleWidth)
  }

  /// Returns a matcher that matches exactly the chars this one does not.
  ///
  /// Negating twice yields a matcher equal to the original.
  pub fn negate(&self) -> Matcher {
    match &self.0 {
      Kind::Any => Self::none(),
      Kind::None => Self::any(),
      Kind::Is(c) => Self::is_not(*c),
      Kind::IsNot(c) => Self::is(*c),
      Kind::Negated(inner) => Matcher::clone(inner),
      _ => Self(Kind::Negated(Arc::new(self.clone()))),
    }
  }

  /// Returns a matcher that matches chars matched by both `self` and `other`.
  pub fn and(&self, other: Matcher) -> Matcher {
    match &self.0 {
      Kind::Any => other,
      Kind::None => Self::none(),
      // The result can only ever match `c`, so decide it now.
      Kind::Is(c) if other.matches(*c) => self.clone(),
      Kind::Is(_) => Self::none(),
      Kind::IsNot(c) if !other.matches(*c) => other,
      _ => Self(Kind::And(Arc::new(self.clone()), Arc::new(other))),
    }
  }

  /// Returns a matcher that matches chars matched by either `self` or
  /// `other`.
  pub fn or(&self, other: Matcher) -> Matcher {
    match &self.0 {
      Kind::Any => Self::any(),
      Kind::None => other,
      Kind::Is(c) if other.matches(*c) => other,
      Kind::IsNot(c) if other.matches(*c) => Self::any(),
      Kind::IsNot(_) => self.clone(),
      _ => Self(Kind::Or(Arc::new(self.clone()), Arc::new(other))),
    }
  }
}

impl Matches for Matcher {
  fn matches(&self, c: char) -> bool {
    match &self.0 {
      Kind::Any => true,
      Kind::None => false,
      Kind::Is(m) => c == *m,
      Kind::IsNot(m) => c != *m,
      Kind::IsEither(a, b) => c == *a || c == *b,
      Kind::AnyOf(set) => set.binary_search(&c).is_ok(),
      Kind::InRange(lo, hi) => (*lo..=*hi).contains(&c),
      Kind::Whitespace => c.is_whitespace(),
      Kind::BreakingWhitespace => unicode::is_breaking_whitespace(c),
      Kind::Ascii => c.is_ascii(),
      Kind::Digit => unicode::is_digit(c),
      Kind::Invisible => unicode::is_invisible(c),
      Kind::SingleWidth => unicode::is_single_width(c),
      Kind::ForPredicate(pred) => pred(c),
      Kind::Negated(inner) => !inner.matches(c),
      Kind::And(a, b) => a.matches(c) && b.matches(c),
      Kind::Or(a, b) => a.matches(c) || b.matches(c),
    }
  }

  fn matches_all_of(&self, s: &str) -> bool {
    match &self.0 {
      Kind::Any => true,
      Kind::None => s.is_empty(),
      _ => s.chars().all(|c| self.matches(c)),
    }
  }

  fn count_in(&self, s: &str) -> usize {
    match &self.0 {
      Kind::Any => s.chars().count(),
      Kind::None => 0,
      _ => s.chars().filter(|&c| self.matches(c)).count(),
    }
  }

  fn replace_from<'a>(&self, s: &'a str, replacement: &str) -> Cow<'a, str> {
    match &self.0 {
      Kind::None => Cow::Borrowed(s),
      Kind::Is(c) if !s.contains(*c) => Cow::Borrowed(s),
      Kind::Is(c) => Cow::Owned(s.replace(*c, replacement)),
      _ => replace_where(s, |c| self.matches(c), replacement),
    }
  }

  fn trim_from<'a>(&self, s: &'a str) -> &'a str {
    match &self.0 {
      Kind::None => s,
      Kind::Any => "",
      _ => s.trim_matches(|c: char| self.matches(c)),
    }
  }
}

impl PartialEq for Matcher {
  fn eq(&self, other: &Self) -> bool {
    use Kind as K;
    match (&self.0, &other.0) {
      (K::Any, K::Any)
      | (K::None, K::None)
      | (K::Whitespace, K::Whitespace)
      | (K::BreakingWhitespace, K::BreakingWhitespace)
      | (K::Ascii, K::Ascii)
      | (K::Digit, K::Digit)
      | (K::Invisible, K::Invisible)
      | (K::SingleWidth, K::SingleWidth) => true,
      (K::Is(a), K::Is(b)) | (K::IsNot(a), K::IsNot(b)) => a == b,
      (K::IsEither(a1, a2), K::IsEither(b1, b2)) => (a1, a2) == (b1, b2),
      (K::AnyOf(a), K::AnyOf(b)) => a == b,
      (K::InRange(a1, a2), K::InRange(b1, b2)) => (a1, a2) == (b1, b2),
      (K::ForPredicate(a), K::ForPredicate(b)) => Arc::ptr_eq(a, b),
      (K::Negated(a), K::Negated(b)) => a == b,
      (K::And(a1, a2), K::And(b1, b2)) | (K::Or(a1, a2), K::Or(b1, b2)) => {
        a1 == b1 && a2 == b2
      }
      _ => false,
    }
  }
}

impl Eq for Matcher {}

impl fmt::Display for Matcher {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match &self.0 {
      Kind::Any => f.write_str("Matcher::any()"),
      Kind::None => f.write_str("Matcher::none()"),
      Kind::Is(c) => write!(f, "Matcher::is('{}')", Show(*c)),
      Kind::IsNot(c) => write!(f, "Matcher::is_not('{}')", Show(*c)),
      Kind::IsEither(a, b) => {
        write!(f, "Matcher::any_of(\"{}{}\")", Show(*a), Show(*b))
      }
      Kind::AnyOf(set) => {
        f.write_str("Matcher::any_of(\"")?;
        for &c in set.iter() {
          write!(f, "{}", Show(c))?;
        }
        f.write_str("\")")
      }
      Kind::InRange(lo, hi) => {
        write!(f, "Matcher::in_range('{}', '{}')", Show(*lo), Show(*hi))
      }
      Kind::Whitespace => f.write_str("Matcher::whitespace()"),
      Kind::BreakingWhitespace => {
        f.write_str("Matcher::breaking_whitespace()")
      }
      Kind::Ascii => f.write_str("Matcher::ascii()"),
      Kind::Digit => f.write_str("Matcher::digit()"),
      Kind::Invisible => f.write_str("Matcher::invisible()"),
      Kind::SingleWidth => f.write_str("Matcher::single_width()"),
      Kind::ForPredicate(_) => f.write_str("Matcher::for_predicate(..)"),
      Kind::Negated(inner) => write!(f, "{inner}.negate()"),
      Kind::And(a, b) => write!(f, "{a}.and({b})"),
      Kind::Or(a, b) => write!(f, "{a}.or({b})"),
    }
  }
}

impl fmt::Debug for Matcher {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

/// Displays a char as a `\u{XXXX}` escape, so that descriptions stay
/// readable whatever the char is.
struct Show(char);

impl fmt::Display for Show {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "\\u{{{:04X}}}", self.0 as u32)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn any_of_specializes() {
    assert_eq!(Matcher::any_of(""), Matcher::none());
    assert_eq!(Matcher::any_of("a"), Matcher::is('a'));
    assert_eq!(Matcher::any_of("aaa"), Matcher::is('a'));
    assert_eq!(Matcher::any_of("ba"), Matcher(Kind::IsEither('a', 'b')));
    assert!(matches!(Matcher::any_of("cab").0, Kind::AnyOf(_)));
  }

  #[test]
  fn logical_shortcuts() {
    let whatever = Matcher::is('^');

    assert_eq!(Matcher::any(), Matcher::none().negate());
    assert_eq!(Matcher::none(), Matcher::any().negate());

    assert_eq!(whatever, Matcher::any().and(whatever.clone()));
    assert_eq!(Matcher::any(), Matcher::any().or(whatever.clone()));

    assert_eq!(Matcher::none(), Matcher::none().and(whatever.clone()));
    assert_eq!(whatever, Matcher::none().or(whatever.clone()));
  }

  #[test]
  fn is_collapses_conjunctions() {
    let a = Matcher::is('a');
    assert_eq!(a.and(Matcher::ascii()), a);
    assert_eq!(a.and(Matcher::digit()), Matcher::none());

    let not_a = Matcher::is_not('a');
    assert_eq!(not_a.or(Matcher::is('a')), Matcher::any());
    assert_eq!(not_a.or(Matcher::digit()), not_a);
    assert_eq!(not_a.and(Matcher::digit()), Matcher::digit());
  }

  #[test]
  fn predicates_compare_by_identity() {
    let p = Matcher::for_predicate(|c| c == 'c');
    let q = Matcher::for_predicate(|c| c == 'c');
    assert_eq!(p, p.clone());
    assert_ne!(p, q);
  }

  #[test]
  fn is_replace_is_literal() {
    let m = Matcher::is('a');
    assert!(matches!(m.replace_from("xyz", "b"), Cow::Borrowed("xyz")));
    assert_eq!(m.replace_from("yaha", ""), "yh");
    assert_eq!(m.replace_from("yaha", "oo"), "yoohoo");
  }
}
