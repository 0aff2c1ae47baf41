//! Escaping for HTML.

use std::sync::LazyLock;

use crate::runes::ArrayBasedEscaper;
use crate::runes::Builder;

/// Escapes HTML metacharacters as named or numeric entities.
///
/// The five characters `"`, `'`, `&`, `<` and `>` are replaced, which makes
/// the result safe both as element content and inside quoted attribute
/// values. Nothing else is touched: this is not sufficient for `<script>`
/// or `<style>` bodies, nor for unquoted attributes.
///
/// ```
/// use escape::Escaper;
///
/// let s = escape::html::ESCAPER.escape("a\"b<c>d&");
/// assert_eq!(s, "a&quot;b&lt;c&gt;d&amp;");
/// ```
pub static ESCAPER: LazyLock<ArrayBasedEscaper> = LazyLock::new(|| {
  Builder::new()
    .add_escape('"', "&quot;")
    // `&apos;` is not an HTML 4 entity.
    .add_escape('\'', "&#39;")
    .add_escape('&', "&amp;")
    .add_escape('<', "&lt;")
    .add_escape('>', "&gt;")
    .build()
});
