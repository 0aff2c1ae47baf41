//! Escaping for XML 1.0.
//!
//! Three escapers are provided, from least to most aggressive:
//!
//! - [`CONTENT_ESCAPER`] for element content, where quotes are harmless.
//! - [`ESCAPER`] for content or attributes, escaping quotes as well.
//! - [`ATTRIBUTE_ESCAPER`], which also escapes `\t`, `\n` and `\r` so that
//!   attribute-value normalization does not turn them into spaces.
//!
//! All three replace the characters XML 1.0 forbids outright (the C0
//! controls other than tab, newline and carriage return, plus U+FFFE and
//! U+FFFF) with U+FFFD. They do not escape anything beyond that, so they are
//! not suitable for CDATA sections, comments or processing instructions.

use std::sync::LazyLock;

use crate::runes::ArrayBasedEscaper;
use crate::runes::Builder;

/// The fallback of the XML escapers: it replaces the noncharacters U+FFFE
/// and U+FFFF, which lie just above the safe range, and leaves everything
/// past them alone.
pub type Fallback = fn(char) -> Option<&'static str>;

/// The type of every XML escaper.
pub type XmlEscaper = ArrayBasedEscaper<Fallback>;

/// Escapes `&`, `<` and `>`.
///
/// ```
/// use escape::Escaper;
///
/// let s = escape::xml::CONTENT_ESCAPER.escape("<a href=\"#\">\t</a>");
/// assert_eq!(s, "&lt;a href=\"#\"&gt;\t&lt;/a&gt;");
/// ```
pub static CONTENT_ESCAPER: LazyLock<XmlEscaper> =
  LazyLock::new(|| content().build_with(noncharacter as Fallback));

/// Escapes `&`, `<`, `>`, `'` and `"`.
pub static ESCAPER: LazyLock<XmlEscaper> =
  LazyLock::new(|| general().build_with(noncharacter as Fallback));

/// Escapes `&`, `<`, `>`, `'`, `"`, `\t`, `\n` and `\r`.
///
/// ```
/// use escape::Escaper;
///
/// let s = escape::xml::ATTRIBUTE_ESCAPER.escape("a\tb\nc\rd");
/// assert_eq!(s, "a&#x9;b&#xA;c&#xD;d");
/// ```
pub static ATTRIBUTE_ESCAPER: LazyLock<XmlEscaper> =
  LazyLock::new(|| attribute().build_with(noncharacter as Fallback));

fn noncharacter(c: char) -> Option<&'static str> {
  matches!(c, '\u{FFFE}' | '\u{FFFF}').then_some("\u{FFFD}")
}

fn content() -> Builder {
  let mut b = Builder::new();
  b.set_safe_range('\0', '\u{FFFD}');

  // Tab, newline and carriage return are the only legal C0 controls.
  let illegal = ('\0'..='\u{1F}').filter(|&c| !"\t\n\r".contains(c));
  b.add_escapes(illegal, "\u{FFFD}");

  b.add_escape('&', "&amp;")
    .add_escape('<', "&lt;")
    .add_escape('>', "&gt;");
  b
}

fn general() -> Builder {
  let mut b = content();
  b.add_escape('\'', "&apos;").add_escape('"', "&quot;");
  b
}

fn attribute() -> Builder {
  let mut b = general();
  b.add_escape('\t', "&#x9;")
    .add_escape('\n', "&#xA;")
    .add_escape('\r', "&#xD;");
  b
}
