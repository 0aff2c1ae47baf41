//! `escape` - Table-driven string escapers.
//!
//! An [`Escaper`] turns a string into a form that is safe for some context,
//! such as HTML text or a URL path, by substituting every unit that may not
//! appear there literally. This crate provides two engines for that, which
//! differ only in what they consider a unit:
//!
//! - [`runes`] escapers work on decoded `char`s, and can never split a
//!   multi-byte UTF-8 sequence.
//! - [`bytes`] escapers work on raw bytes, and never look at how bytes group
//!   into `char`s.
//!
//! Either engine can be driven by an arbitrary function, or by a replacement
//! table assembled with a builder. The ready-made escapers in [`html`],
//! [`xml`] and [`url`] are built this way.
//!
//! ```
//! use escape::Escaper;
//!
//! assert_eq!(escape::html::ESCAPER.escape("1 < 2"), "1 &lt; 2");
//! assert_eq!(escape::url::FORM_PARAMETER_ESCAPER.escape("a b"), "a+b");
//! ```
//!
//! Escaping never allocates unless something is actually replaced: if the
//! input needs no escaping, it is returned as a [`Cow::Borrowed`].
//!
//! All escapers are immutable and `Send + Sync`. Builders are ordinary
//! mutable values; each call to `build()` takes a snapshot, so further
//! changes to a builder never affect the escapers it already produced.

#![deny(missing_docs)]

use std::borrow::Cow;

mod buffer;

pub mod bytes;
pub mod html;
pub mod runes;
pub mod url;
pub mod xml;

/// A stateless string transformer.
///
/// Implementations must be total: every string can be escaped, and escaping
/// never fails. Escaping `""` always produces `""`.
pub trait Escaper: Send + Sync {
  /// Escapes `s`, borrowing it if nothing needs replacing.
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str>;
}

impl<E: Escaper + ?Sized> Escaper for &E {
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
    E::escape(self, s)
  }
}

impl<E: Escaper + ?Sized> Escaper for Box<E> {
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
    E::escape(self, s)
  }
}

/// An escaper that escapes nothing.
///
/// ```
/// # use escape::*;
/// assert_eq!(NilEscaper.escape("<&>"), "<&>");
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct NilEscaper;

impl Escaper for NilEscaper {
  fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
    Cow::Borrowed(s)
  }
}

/// A contradictory escaper configuration.
///
/// These always indicate a bug in the caller, so most constructors panic
/// with this error's message instead of returning it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
  /// An alphanumeric character was listed as safe. Alphanumerics are always
  /// safe, so listing them is redundant.
  #[error(
    "alphanumeric characters are always safe and must not be listed: {0:?}"
  )]
  AlphanumericSafe(char),

  /// Space was listed as safe, but was also asked to be escaped as `+`.
  #[error("plus_for_space cannot be set when space is a safe character")]
  PlusForSafeSpace,
}
