#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::borrow::Cow;

use escape::bytes::ArrayBasedEscaper;
use escape::bytes::Builder;
use escape::bytes::EscaperMap;
use escape::bytes::SimpleBuilder;
use escape::bytes::UnsafeReplacement;
use escape::Escaper as _;

const TEST_STRING: &str = "\0abyz\u{80}\u{100}\u{800}\u{1000}ABYZ";
const FOX: &str = "The Quick Brown Fox!";

fn simple_replacements() -> EscaperMap {
  EscaperMap::new([(b'\n', "<newline>"), (b'\t', "<tab>"), (b'&', "<and>")])
}

fn braces(b: u8) -> Option<Vec<u8>> {
  Some(vec![b'{', b, b'}'])
}

#[test]
fn empty() {
  let e = escape::bytes::Escaper::new(|_: u8| Some("~"));
  similar_asserts::assert_eq!(e.escape(""), "");
}

#[test]
fn single_byte() {
  let e = escape::bytes::Escaper::new(|b: u8| (b == b'@').then_some("?"));
  similar_asserts::assert_eq!(e.escape("[FOO@BAR]"), "[FOO?BAR]");
}

#[test]
fn replacement_contains_the_byte() {
  let e = escape::bytes::Escaper::new(|_: u8| Some("~~"));
  similar_asserts::assert_eq!(e.escape("~"), "~~");
}

#[test]
fn nop() {
  let e = escape::bytes::Escaper::new(|_: u8| None::<&[u8]>);
  assert!(matches!(e.escape(TEST_STRING), Cow::Borrowed(_)));
}

#[test]
fn split_sequences_become_replacement_chars() {
  let e = escape::bytes::Escaper::new(|b: u8| (b == 0xA9).then_some("!"));
  similar_asserts::assert_eq!(e.escape_bytes("©".as_bytes()), &b"\xC2!"[..]);
  similar_asserts::assert_eq!(e.escape("a©b"), "a\u{FFFD}!b");
}

#[test]
fn array_based_safe_range() {
  let e = ArrayBasedEscaper::new(EscaperMap::default(), b'A', b'Z', braces);
  similar_asserts::assert_eq!(e.escape(""), "");
  similar_asserts::assert_eq!(e.escape("[FOO@BAR]"), "{[}FOO{@}BAR{]}");
}

#[test]
fn array_based_reversed_range() {
  let e = ArrayBasedEscaper::new(EscaperMap::default(), b'Z', b'A', braces);
  similar_asserts::assert_eq!(e.escape(""), "");
  similar_asserts::assert_eq!(e.escape("[FOO]"), "{[}{F}{O}{O}{]}");
}

#[test]
fn array_based_deletes_unsafe() {
  let e = ArrayBasedEscaper::new(
    EscaperMap::default(),
    b' ',
    b'~',
    UnsafeReplacement::new(Some(&b""[..])),
  );
  let s = concat!(
    "\tEverything\0 outside the\u{10000} printable ASCII ",
    "\u{FFFF}range is \u{7F}deleted.\n",
  );
  similar_asserts::assert_eq!(
    e.escape(s),
    "Everything outside the printable ASCII range is deleted."
  );
}

#[test]
fn array_based_priority() {
  let unsafe_byte = |_: u8| Some(&b"?"[..]);
  let table = simple_replacements();
  let e = ArrayBasedEscaper::new(table, b' ', b'~', unsafe_byte);
  similar_asserts::assert_eq!(
    e.escape("\tFish &\0 Chips\r\n"),
    "<tab>Fish <and>? Chips?<newline>"
  );
}

#[test]
fn builder_initial_state() {
  let e = Builder::new().set_safe_range(b'a', b'z').build();
  similar_asserts::assert_eq!(
    e.escape("The Quick Brown Fox"),
    "The Quick Brown Fox"
  );

  let e = Builder::new().set_unsafe_replacement(Some(&b"X"[..])).build();
  similar_asserts::assert_eq!(e.escape("\0\u{FFFF}"), "\0\u{FFFF}");
}

#[test]
fn builder_retains_state() {
  let mut b = Builder::new();
  b.set_safe_range(b'a', b'z');
  b.set_unsafe_replacement(Some(&b"X"[..]));
  similar_asserts::assert_eq!(b.build().escape(FOX), "XheXXuickXXrownXXoxX");

  b.add_escapes(*b" !", "_");
  similar_asserts::assert_eq!(b.build().escape(FOX), "Xhe_Xuick_Xrown_Xox_");

  b.set_safe_range(b' ', b'~');
  similar_asserts::assert_eq!(b.build().escape(FOX), "The_Quick_Brown_Fox_");
}

#[test]
fn builder_snapshots() {
  let mut b = Builder::new();
  b.set_safe_range(b'a', b'z');
  b.set_unsafe_replacement(Some(&b"X"[..]));
  b.add_escape(b' ', "_");
  let first = b.build();

  b.add_escape(b' ', "-");
  b.add_escape(b'!', "$");
  let second = b.build();

  b.add_escape(b' ', "*");
  similar_asserts::assert_eq!(first.escape(FOX), "Xhe_Xuick_Xrown_XoxX");
  similar_asserts::assert_eq!(second.escape(FOX), "Xhe-Xuick-Xrown-Xox$");
}

#[test]
fn simple_builder() {
  let mut b = SimpleBuilder::new();
  b.add_escape(b'<', "&lt;").add_escape(b'>', "&gt;");
  let e = b.to_escaper();

  b.add_escape(b'&', "&amp;");
  similar_asserts::assert_eq!(e.escape("<a&b>"), "&lt;a&b&gt;");
  similar_asserts::assert_eq!(
    b.to_escaper().escape("<a&b>"),
    "&lt;a&amp;b&gt;"
  );

  let map = b.to_map();
  similar_asserts::assert_eq!(map.get(b'&'), Some(&b"&amp;"[..]));
  similar_asserts::assert_eq!(map.get(b'a'), None);
  similar_asserts::assert_eq!(map.len(), usize::from(b'>') + 1);

  let e = b.to_escaper();
  similar_asserts::assert_eq!(e.escape_byte(b'&'), Some(&b"&amp;"[..]));
  similar_asserts::assert_eq!(e.escape_byte(b'a'), None);
  similar_asserts::assert_eq!(e.escape_byte(0xFF), None);
}

#[test]
fn shared_tables() {
  let table = SimpleBuilder::new().add_escape(b'&', "&amp;").to_map();
  let strict = ArrayBasedEscaper::new(
    table.clone(),
    b' ',
    b'~',
    UnsafeReplacement::new(Some(&b"?"[..])),
  );
  let lax =
    ArrayBasedEscaper::new(table, b' ', b'~', UnsafeReplacement::new(None));

  similar_asserts::assert_eq!(strict.table().get(b'&'), Some(&b"&amp;"[..]));
  similar_asserts::assert_eq!(lax.table().get(b'&'), Some(&b"&amp;"[..]));
  similar_asserts::assert_eq!(lax.table().get(b'a'), None);
  similar_asserts::assert_eq!(strict.table().len(), lax.table().len());
  similar_asserts::assert_eq!(strict.escape("a&b\t"), "a&amp;b?");
  similar_asserts::assert_eq!(lax.escape("a&b\t"), "a&amp;b\t");
}
