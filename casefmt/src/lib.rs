//! `casefmt` - Conversion between identifier case formats.
//!
//! A [`CaseFormat`] knows where words begin in a string of its format, and
//! how to spell words in it. Converting splits the input at its format's
//! word boundaries and respells each word in the target format.
//!
//! ```
//! use casefmt::CaseFormat::*;
//!
//! assert_eq!(LowerCamel.to(UpperUnderscore, "fooBar"), "FOO_BAR");
//! assert_eq!(LowerHyphen.to(UpperCamel, "foo-bar"), "FooBar");
//! ```
//!
//! Only ASCII is understood. Conversion is best effort: input that does not
//! follow its declared format still converts to something, but what exactly
//! is unspecified.

#![deny(missing_docs)]

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use runematcher::Matcher;
use runematcher::Matches;

static HYPHEN: LazyLock<Matcher> = LazyLock::new(|| Matcher::is('-'));
static UNDERSCORE: LazyLock<Matcher> = LazyLock::new(|| Matcher::is('_'));
static UPPER: LazyLock<Matcher> =
  LazyLock::new(|| Matcher::in_range('A', 'Z'));

/// A convention for spelling multi-word identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CaseFormat {
  /// Hyphenated variable naming convention, e.g. `lower-hyphen`.
  LowerHyphen,
  /// C++ variable naming convention, e.g. `lower_underscore`.
  LowerUnderscore,
  /// Java variable naming convention, e.g. `lowerCamel`.
  LowerCamel,
  /// Type naming convention, e.g. `UpperCamel`.
  UpperCamel,
  /// Constant naming convention, e.g. `UPPER_UNDERSCORE`.
  UpperUnderscore,
}

impl CaseFormat {
  /// Every case format.
  pub const ALL: [Self; 5] = [
    Self::LowerHyphen,
    Self::LowerUnderscore,
    Self::LowerCamel,
    Self::UpperCamel,
    Self::UpperUnderscore,
  ];

  /// Converts `s` from this format to `target`.
  ///
  /// If the formats are the same, or nothing needs changing, `s` is returned
  /// as-is.
  ///
  /// ```
  /// use casefmt::CaseFormat::*;
  ///
  /// assert_eq!(UpperCamel.to(LowerHyphen, "FooBar"), "foo-bar");
  /// assert_eq!(UpperCamel.to(UpperUnderscore, "HTTP"), "H_T_T_P");
  /// ```
  pub fn to<'a>(self, target: Self, s: &'a str) -> Cow<'a, str> {
    use CaseFormat::*;
    if self == target || s.is_empty() {
      return Cow::Borrowed(s);
    }

    match (self, target) {
      (LowerHyphen, LowerUnderscore) => HYPHEN.replace_from_char(s, '_'),
      (LowerHyphen, UpperUnderscore) => {
        Cow::Owned(HYPHEN.replace_from_char(s, '_').to_ascii_uppercase())
      }
      (LowerUnderscore, LowerHyphen) => UNDERSCORE.replace_from_char(s, '-'),
      (LowerUnderscore, UpperUnderscore) => ascii_upper(s),
      (LowerCamel, UpperCamel) => first_char(s, char::to_ascii_uppercase),
      (UpperCamel, LowerCamel) => first_char(s, char::to_ascii_lowercase),
      (UpperUnderscore, LowerHyphen) => {
        Cow::Owned(UNDERSCORE.replace_from_char(s, '-').to_ascii_lowercase())
      }
      (UpperUnderscore, LowerUnderscore) => ascii_lower(s),
      _ => Cow::Owned(self.convert(target, s)),
    }
  }

  /// Returns a reusable conversion from this format to `target`.
  pub fn converter_to(self, target: Self) -> Converter {
    Converter {
      source: self,
      target,
    }
  }

  fn word_boundary(self) -> &'static Matcher {
    match self {
      Self::LowerHyphen => &*HYPHEN,
      Self::LowerUnderscore | Self::UpperUnderscore => &*UNDERSCORE,
      Self::LowerCamel | Self::UpperCamel => &*UPPER,
    }
  }

  fn word_separator(self) -> &'static str {
    match self {
      Self::LowerHyphen => "-",
      Self::LowerUnderscore | Self::UpperUnderscore => "_",
      Self::LowerCamel | Self::UpperCamel => "",
    }
  }

  fn normalize_word(self, word: &str) -> String {
    match self {
      Self::LowerHyphen | Self::LowerUnderscore => word.to_ascii_lowercase(),
      Self::LowerCamel | Self::UpperCamel => title_case(word),
      Self::UpperUnderscore => word.to_ascii_uppercase(),
    }
  }

  fn normalize_first_word(self, word: &str) -> String {
    match self {
      Self::LowerCamel => word.to_ascii_lowercase(),
      _ => self.normalize_word(word),
    }
  }

  /// The general conversion, word by word.
  fn convert(self, target: Self, s: &str) -> String {
    let boundary = self.word_boundary();
    let sep = target.word_separator();

    let mut out = String::new();
    let mut i = 0;
    for (j, _) in s.char_indices().filter(|&(_, c)| boundary.matches(c)) {
      // Until `i` moves off zero, everything so far is the first word.
      if i == 0 {
        out.clear();
        out.reserve(s.len() + 4 * sep.len());
        out += &target.normalize_first_word(&s[..j]);
      } else {
        out += &target.normalize_word(&s[i..j]);
      }
      out += sep;
      i = j + self.word_separator().len();
    }

    if i == 0 {
      return target.normalize_first_word(s);
    }
    out += &target.normalize_word(&s[i..]);
    out
  }
}

/// A conversion between two [`CaseFormat`]s.
///
/// ```
/// use casefmt::CaseFormat::*;
///
/// let c = LowerUnderscore.converter_to(LowerCamel);
/// assert_eq!(c.convert("max_value"), "maxValue");
/// assert_eq!(c.reverse().convert("maxValue"), "max_value");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Converter {
  source: CaseFormat,
  target: CaseFormat,
}

impl Converter {
  /// Returns the format this converter converts from.
  pub fn source(&self) -> CaseFormat {
    self.source
  }

  /// Returns the format this converter converts to.
  pub fn target(&self) -> CaseFormat {
    self.target
  }

  /// Converts `s`.
  pub fn convert<'a>(&self, s: &'a str) -> Cow<'a, str> {
    self.source.to(self.target, s)
  }

  /// Returns the converter going the other way.
  pub fn reverse(&self) -> Self {
    self.target.converter_to(self.source)
  }
}

impl fmt::Display for Converter {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?}.converter_to({:?})", self.source, self.target)
  }
}

/// Uppercases the first char of `word` and lowercases the rest.
fn title_case(word: &str) -> String {
  let mut chars = word.chars();
  let Some(first) = chars.next() else {
    return String::new();
  };

  let mut out = String::with_capacity(word.len());
  out.push(first.to_ascii_uppercase());
  out.extend(chars.map(|c| c.to_ascii_lowercase()));
  out
}

fn first_char(s: &str, case: fn(&char) -> char) -> Cow<'_, str> {
  let mut chars = s.chars();
  match chars.next() {
    Some(c) if case(&c) != c => {
      let mut out = String::with_capacity(s.len());
      out.push(case(&c));
      out.push_str(chars.as_str());
      Cow::Owned(out)
    }
    _ => Cow::Borrowed(s),
  }
}

fn ascii_upper(s: &str) -> Cow<'_, str> {
  match s.bytes().any(|b| b.is_ascii_lowercase()) {
    true => Cow::Owned(s.to_ascii_uppercase()),
    false => Cow::Borrowed(s),
  }
}

fn ascii_lower(s: &str) -> Cow<'_, str> {
  match s.bytes().any(|b| b.is_ascii_uppercase()) {
    true => Cow::Owned(s.to_ascii_lowercase()),
    false => Cow::Borrowed(s),
  }
}
