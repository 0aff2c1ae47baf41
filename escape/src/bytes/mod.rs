//! Escapers that work on raw bytes.
//!
//! These escapers never decode UTF-8: each byte is replaced or kept on its
//! own. That makes them fast and exact for ASCII-only configurations, which
//! is where they are meant to be used. The byte-level result is available
//! through `escape_bytes()`; through [`crate::Escaper`], any UTF-8 sequence
//! broken up by a replacement is rendered as U+FFFD.
//!
//! ```
//! # use escape::bytes::*;
//! let e = SimpleBuilder::new()
//!   .add_escape(b'\\', "\\\\")
//!   .add_escapes(*b"\"'", "\\q")
//!   .to_escaper();
//! assert_eq!(e.escape_bytes(b"'a\\b'"), &b"\\qa\\\\b\\q"[..]);
//! ```

mod array_based;
mod builder;
mod escaper;
mod map;
mod simple_builder;

pub use array_based::ArrayBasedEscaper;
pub use array_based::EscapeUnsafe;
pub use array_based::UnsafeReplacement;
pub use builder::Builder;
pub use escaper::Escaper;
pub use map::EscaperMap;
pub use simple_builder::ByteArrayEscaper;
pub use simple_builder::SimpleBuilder;

use std::borrow::Cow;

use crate::buffer;
use crate::buffer::Growth;

/// Runs the shared slow path over the bytes of `input` from `start` on.
fn escape_from<'a, R: AsRef<[u8]>>(
  input: &'a [u8],
  start: usize,
  escape: impl Fn(u8) -> Option<R>,
) -> Cow<'a, [u8]> {
  let units = input.iter().copied().enumerate().skip(start);
  buffer::escape_slow(input, start, units, |_| 1, escape, Growth::BYTES)
}

/// Turns the result of escaping `s` byte-wise back into text.
fn to_text<'a>(s: &'a str, escaped: Cow<'_, [u8]>) -> Cow<'a, str> {
  match escaped {
    Cow::Borrowed(_) => Cow::Borrowed(s),
    Cow::Owned(buf) => match String::from_utf8(buf) {
      Ok(text) => Cow::Owned(text),
      Err(e) => {
        Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned())
      }
    },
  }
}
