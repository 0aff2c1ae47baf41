//! Escapers that work on `char`s.
//!
//! Each `char` of the input is considered in isolation, so replacements
//! always cover whole UTF-8 sequences. Use [`Escaper`] to escape with an
//! arbitrary function, or a [`Builder`] to assemble an
//! [`ArrayBasedEscaper`] from a table of replacements.
//!
//! ```
//! # use escape::runes::*;
//! use escape::Escaper as _;
//!
//! let e = Builder::new()
//!   .add_escape('<', "&lt;")
//!   .set_safe_range(' ', '~')
//!   .set_unsafe_replacement(Some("?"))
//!   .build();
//! assert_eq!(e.escape("<é>"), "&lt;?>");
//! ```

mod array_based;
mod builder;
mod escaper;
mod map;

pub use array_based::ArrayBasedEscaper;
pub use array_based::EscapeUnsafe;
pub use array_based::UnsafeReplacement;
pub use builder::Builder;
pub use escaper::Escaper;
pub use map::EscaperMap;

pub(crate) use escaper::escape_chars;
