use std::borrow::Cow;

use crate::runes::escape_chars;
use crate::ConfigError;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encodes every `char` outside a configurable safe set.
///
/// ASCII letters and digits are always safe. Every other `char` is safe only
/// if listed when the escaper is created. Unsafe `char`s are encoded as
/// UTF-8, and each byte written as `%XX` with uppercase hex digits.
///
/// If `plus_for_space` is set, space is written as `+` rather than `%20`.
/// This is the form used by `application/x-www-form-urlencoded`, where a
/// literal `+` must then be written as `%2B`.
///
/// ```
/// # use escape::url::*;
/// use escape::Escaper;
///
/// let e = PercentEscaper::new("", false);
/// assert_eq!(e.escape("a b"), "a%20b");
///
/// let e = PercentEscaper::new("-", true);
/// assert_eq!(e.escape("1 + 1 = π-ish"), "1+%2B+1+%3D+%CF%80-ish");
/// ```
#[derive(Clone, Debug)]
pub struct PercentEscaper {
  safe: Box<[bool]>,
  plus_for_space: bool,
}

impl PercentEscaper {
  /// Creates a new escaper that leaves alphanumerics and the `char`s of
  /// `safe` alone.
  ///
  /// # Panics
  ///
  /// Panics if `safe` contains an ASCII alphanumeric, or if `plus_for_space`
  /// is set and `safe` contains a space. See [`PercentEscaper::try_new()`].
  pub fn new(safe: &str, plus_for_space: bool) -> Self {
    match Self::try_new(safe, plus_for_space) {
      Ok(e) => e,
      Err(e) => panic!("{e}"),
    }
  }

  /// Like [`PercentEscaper::new()`], but reports a contradictory
  /// configuration as an error.
  pub fn try_new(
    safe: &str,
    plus_for_space: bool,
  ) -> Result<Self, ConfigError> {
    if let Some(c) = safe.chars().find(char::is_ascii_alphanumeric) {
      tracing::warn!(?c, safe, "alphanumeric listed as percent-escaper safe");
      return Err(ConfigError::AlphanumericSafe(c));
    }
    if plus_for_space && safe.contains(' ') {
      tracing::warn!(safe, "space listed as safe with plus_for_space");
      return Err(ConfigError::PlusForSafeSpace);
    }

    let always = ('0'..='9').chain('A'..='Z').chain('a'..='z');
    let safe_chars = safe.chars().chain(always);
    let len = safe_chars.clone().map(|c| c as usize + 1).max().unwrap_or(0);

    let mut table = vec![false; len];
    for c in safe_chars {
      table[c as usize] = true;
    }

    tracing::debug!(safe, plus_for_space, "building percent escaper");
    Ok(Self {
      safe: table.into(),
      plus_for_space,
    })
  }

  /// Returns whether `c` is left alone by this escaper.
  pub fn is_safe(&self, c: char) -> bool {
    self.safe.get(c as usize).copied().unwrap_or(false)
  }

  /// Returns the replacement for a single `char`, or `None` if it is safe.
  pub fn escape_char(&self, c: char) -> Option<Cow<'static, str>> {
    if self.is_safe(c) {
      return None;
    }
    if c == ' ' && self.plus_for_space {
      return Some(Cow::Borrowed("+"));
    }

    let mut utf8 = [0; 4];
    let mut out = String::with_capacity(12);
    for &b in c.encode_utf8(&mut utf8).as_bytes() {
      out.push('%');
      out.push(char::from(UPPER_HEX[usize::from(b >> 4)]));
      out.push(char::from(UPPER_HEX[usize::from(b & 0xF)]));
    }
    Some(Cow::Owned(out))
  }
}

impl crate::Escaper for PercentEscaper {
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
    match s.char_indices().find(|&(_, c)| !self.is_safe(c)) {
      Some((start, _)) => escape_chars(s, start, |c| self.escape_char(c)),
      None => Cow::Borrowed(s),
    }
  }
}
