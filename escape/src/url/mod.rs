//! Escaping for URLs, per RFC 3986.
//!
//! Each escaper targets one component of a URL and leaves alone exactly the
//! characters that may appear there literally. None of them is suitable for
//! escaping a URL as a whole.

use std::sync::LazyLock;

mod percent;

pub use percent::PercentEscaper;

/// Escapes a string for use as a key or value in a query string, as
/// `application/x-www-form-urlencoded`.
///
/// Alphanumerics and `.-*_` are safe, as in HTML form encoding; the
/// remaining unreserved characters `~!'()` are treated as safe as well.
/// Space becomes `+`, and everything else is percent-encoded as UTF-8.
///
/// ```
/// use escape::Escaper;
///
/// let e = &escape::url::FORM_PARAMETER_ESCAPER;
/// assert_eq!(e.escape("key=a b&c"), "key%3Da+b%26c");
/// ```
pub static FORM_PARAMETER_ESCAPER: LazyLock<PercentEscaper> =
  LazyLock::new(|| PercentEscaper::new("-._*~!'()", true));

/// Escapes a string for use as one segment of a URL path.
///
/// The unreserved characters, the sub-delimiters and `@:` are safe; `/` is
/// not. Space becomes `%20`.
///
/// ```
/// use escape::Escaper;
///
/// let e = &escape::url::PATH_SEGMENT_ESCAPER;
/// assert_eq!(e.escape("a b/c+d"), "a%20b%2Fc+d");
/// ```
pub static PATH_SEGMENT_ESCAPER: LazyLock<PercentEscaper> =
  LazyLock::new(|| PercentEscaper::new(PATH_SAFE_WITH_PLUS, false));

/// Escapes a string for use as a URL fragment.
///
/// Everything the path segment escaper leaves alone is safe here, as are
/// `/` and `?`.
pub static FRAGMENT_ESCAPER: LazyLock<PercentEscaper> =
  LazyLock::new(|| PercentEscaper::new(FRAGMENT_SAFE, false));

const PATH_SAFE_WITH_PLUS: &str = concat!(
  "-._~",       // Unreserved.
  "!$'()*,;&=", // Sub-delimiters, save `+`.
  "@:",         // The general delimiters allowed in paths.
  "+",
);

const FRAGMENT_SAFE: &str = concat!(
  "-._~",       // Unreserved.
  "!$'()*,;&=", // Sub-delimiters, save `+`.
  "@:",         // The general delimiters allowed in paths.
  "+/?",
);
