//! The `Matches` trait and the text operations derived from it.

use std::borrow::Cow;

/// A predicate over `char`s, plus the text operations defined in terms of it.
///
/// Only [`Matches::matches()`] must be provided. Everything else is derived
/// from it; implementations may override the derived operations for speed,
/// but never in a way that changes their result.
///
/// Throughout the documentation of this trait, "matching char" means any `c`
/// for which `self.matches(c)` returns `true`.
///
/// Implementations are expected to be pure: the same char must always
/// produce the same answer, and answering must not have side effects.
pub trait Matches {
  /// Determines a true or false value for the given char.
  fn matches(&self, c: char) -> bool;

  /// Returns the index of the first matching char in `s` at or after `start`.
  ///
  /// Returns `None` if no such char exists, including when `start` is not a
  /// valid index into `s`.
  ///
  /// ```
  /// # use runematcher::*;
  /// let m = Matcher::is('a');
  /// assert_eq!(m.index_in("banana", 0), Some(1));
  /// assert_eq!(m.index_in("banana", 2), Some(3));
  /// assert_eq!(m.index_in("banana", 6), None);
  /// ```
  fn index_in(&self, s: &str, start: usize) -> Option<usize> {
    s.chars()
      .enumerate()
      .skip(start)
      .find(|&(_, c)| self.matches(c))
      .map(|(i, _)| i)
  }

  /// Like [`Matches::index_in()`], but over an already-decoded slice of
  /// chars.
  fn index_in_chars(&self, chars: &[char], start: usize) -> Option<usize> {
    chars
      .get(start..)?
      .iter()
      .position(|&c| self.matches(c))
      .map(|i| i + start)
  }

  /// Returns the index of the last matching char in `s`, if there is one.
  fn last_index_in(&self, s: &str) -> Option<usize> {
    let len = s.chars().count();
    s.chars()
      .rev()
      .position(|c| self.matches(c))
      .map(|i| len - 1 - i)
  }

  /// Returns whether `s` contains at least one matching char.
  ///
  /// Always equal to `!self.matches_none_of(s)`.
  fn matches_any_of(&self, s: &str) -> bool {
    !self.matches_none_of(s)
  }

  /// Returns whether every char of `s` matches. Vacuously true for `""`.
  fn matches_all_of(&self, s: &str) -> bool {
    s.chars().all(|c| self.matches(c))
  }

  /// Returns whether no char of `s` matches. Vacuously true for `""`.
  fn matches_none_of(&self, s: &str) -> bool {
    self.index_in(s, 0).is_none()
  }

  /// Returns the number of matching chars in `s`.
  fn count_in(&self, s: &str) -> usize {
    s.chars().filter(|&c| self.matches(c)).count()
  }

  /// Returns the non-matching chars of `s`, in order.
  ///
  /// ```
  /// # use runematcher::*;
  /// assert_eq!(Matcher::is('a').remove_from("bazaar"), "bzr");
  /// ```
  fn remove_from<'a>(&self, s: &'a str) -> Cow<'a, str> {
    retain_where(s, |c| !self.matches(c))
  }

  /// Returns the matching chars of `s`, in order.
  ///
  /// This is the complement of [`Matches::remove_from()`]: every char of `s`
  /// ends up in exactly one of the two results.
  fn retain_from<'a>(&self, s: &'a str) -> Cow<'a, str> {
    retain_where(s, |c| self.matches(c))
  }

  /// Replaces every matching char of `s` with `replacement`.
  fn replace_from_char<'a>(
    &self,
    s: &'a str,
    replacement: char,
  ) -> Cow<'a, str> {
    let mut buf = [0; 4];
    self.replace_from(s, replacement.encode_utf8(&mut buf))
  }

  /// Replaces every matching char of `s` with `replacement`, which may be
  /// any string at all.
  ///
  /// An empty `replacement` makes this equivalent to
  /// [`Matches::remove_from()`].
  ///
  /// ```
  /// # use runematcher::*;
  /// assert_eq!(Matcher::is('>').replace_from("12 > 5", "&gt;"), "12 &gt; 5");
  /// ```
  fn replace_from<'a>(&self, s: &'a str, replacement: &str) -> Cow<'a, str> {
    replace_where(s, |c| self.matches(c), replacement)
  }

  /// Strips matching chars from both ends of `s`.
  ///
  /// ```
  /// # use runematcher::*;
  /// assert_eq!(Matcher::any_of("ab").trim_from("abacatbab"), "cat");
  /// ```
  fn trim_from<'a>(&self, s: &'a str) -> &'a str {
    s.trim_matches(|c: char| self.matches(c))
  }

  /// Strips matching chars from the start of `s`.
  fn trim_leading_from<'a>(&self, s: &'a str) -> &'a str {
    s.trim_start_matches(|c: char| self.matches(c))
  }

  /// Strips matching chars from the end of `s`.
  fn trim_trailing_from<'a>(&self, s: &'a str) -> &'a str {
    s.trim_end_matches(|c: char| self.matches(c))
  }

  /// Replaces each maximal run of consecutive matching chars in `s` with a
  /// single `replacement`. Non-matching chars are left alone.
  ///
  /// ```
  /// # use runematcher::*;
  /// let m = Matcher::is('-');
  /// assert_eq!(m.collapse_from("x-x--xx---x----x", '_'), "x_x_xx_x_x");
  /// ```
  fn collapse_from<'a>(&self, s: &'a str, replacement: char) -> Cow<'a, str> {
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
      if !self.matches(c) {
        continue;
      }

      let run_continues = chars.peek().is_some_and(|&(_, n)| self.matches(n));
      if c == replacement && !run_continues {
        // A run of exactly the replacement char collapses to itself.
        continue;
      }

      let mut out = String::with_capacity(s.len());
      out.push_str(&s[..i]);
      out.push(replacement);
      finish_collapse(self, chars.map(|(_, c)| c), replacement, &mut out);
      return Cow::Owned(out);
    }
    Cow::Borrowed(s)
  }

  /// Like [`Matches::collapse_from()`], except that runs of matching chars at
  /// either end of `s` are removed rather than collapsed.
  ///
  /// ```
  /// # use runematcher::*;
  /// let m = Matcher::is('-');
  /// assert_eq!(m.trim_and_collapse_from("-x--x", '_'), "x_x");
  /// ```
  fn trim_and_collapse_from<'a>(
    &self,
    s: &'a str,
    replacement: char,
  ) -> Cow<'a, str> {
    self.collapse_from(self.trim_from(s), replacement)
  }
}

impl<F> Matches for F
where
  F: Fn(char) -> bool + ?Sized,
{
  fn matches(&self, c: char) -> bool {
    self(c)
  }
}

/// Keeps the chars of `s` for which `keep` holds, borrowing `s` if that is
/// all of them.
pub(crate) fn retain_where(
  s: &str,
  keep: impl Fn(char) -> bool,
) -> Cow<'_, str> {
  let Some((first, c)) = s.char_indices().find(|&(_, c)| !keep(c)) else {
    return Cow::Borrowed(s);
  };

  let mut out = String::with_capacity(s.len() - c.len_utf8());
  out.push_str(&s[..first]);
  out.extend(s[first + c.len_utf8()..].chars().filter(|&c| keep(c)));
  Cow::Owned(out)
}

/// Replaces the chars of `s` for which `hit` holds with `replacement`,
/// borrowing `s` if there are none.
pub(crate) fn replace_where<'a>(
  s: &'a str,
  hit: impl Fn(char) -> bool,
  replacement: &str,
) -> Cow<'a, str> {
  if replacement.is_empty() {
    return retain_where(s, |c| !hit(c));
  }

  let Some((first, _)) = s.char_indices().find(|&(_, c)| hit(c)) else {
    return Cow::Borrowed(s);
  };

  let mut out = String::with_capacity(s.len() * 3 / 2 + 16);
  out.push_str(&s[..first]);
  for c in s[first..].chars() {
    if hit(c) {
      out.push_str(replacement);
    } else {
      out.push(c);
    }
  }
  Cow::Owned(out)
}

/// Collapses the rest of a string into `out`, assuming the char just before
/// `rest` was a matching char that has already been replaced.
fn finish_collapse<M: Matches + ?Sized>(
  m: &M,
  rest: impl Iterator<Item = char>,
  replacement: char,
  out: &mut String,
) {
  let mut in_run = true;
  for c in rest {
    if !m.matches(c) {
      out.push(c);
      in_run = false;
    } else if !in_run {
      out.push(replacement);
      in_run = true;
    }
  }
}
