//! `runematcher` - Predicates over `char`s, and the text operations built on
//! top of them.
//!
//! A [`Matcher`] decides, for every `char`, whether that char is "matched".
//! Out of that one question falls a whole family of string operations:
//! finding, counting, removing, replacing, trimming and collapsing runs of
//! matching chars. Those operations are provided once, generically, by the
//! [`Matches`] trait, so anything that can answer the question gets them for
//! free, including plain closures.
//!
//! ```
//! # use runematcher::*;
//! let m = Matcher::any_of("eko");
//! assert_eq!(m.collapse_from("bookkeeper", '-'), "b-p-r");
//!
//! let ws = Matcher::whitespace();
//! assert_eq!(ws.trim_from("    charming    "), "charming");
//!
//! let not_a = |c: char| c != 'a';
//! assert_eq!(not_a.retain_from("bazaar"), "bzr");
//! ```
//!
//! Matchers are immutable values. The combinators ([`Matcher::negate()`],
//! [`Matcher::and()`], [`Matcher::or()`]) build new matchers instead of
//! modifying their receiver, and every matcher is `Send + Sync`, so a single
//! matcher may be used from any number of threads at once.
//!
//! Indices reported by this crate are `char` indices, not byte offsets: the
//! `n`th element of `s.chars()` has index `n`.

#![deny(missing_docs)]

mod matcher;
mod matches;
mod unicode;

pub use matcher::Matcher;
pub use matches::Matches;
