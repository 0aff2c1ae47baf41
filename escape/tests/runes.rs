#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::borrow::Cow;

use escape::runes::ArrayBasedEscaper;
use escape::runes::Builder;
use escape::runes::EscaperMap;
use escape::runes::UnsafeReplacement;
use escape::Escaper as _;

const TEST_STRING: &str = concat!(
  "\0abyz\u{80}\u{100}\u{800}\u{1000}ABYZ",
  "\u{FFFF}\u{10000}0189\u{10FFFF}",
);

fn decimal(c: char) -> Option<String> {
  match c.is_ascii_alphanumeric() {
    true => None,
    false => Some(format!("[{}]", c as u32)),
  }
}

fn simple_replacements() -> EscaperMap {
  EscaperMap::new([('\n', "<newline>"), ('\t', "<tab>"), ('&', "<and>")])
}

fn braces(c: char) -> Option<String> {
  Some(format!("{{{c}}}"))
}

#[test]
fn empty() {
  let e = escape::runes::Escaper::new(|_: char| Some("\u{2603}"));
  similar_asserts::assert_eq!(e.escape(""), "");
}

#[test]
fn single_char() {
  let e = escape::runes::Escaper::new(|c: char| (c == '@').then_some("?"));
  similar_asserts::assert_eq!(e.escape("[FOO@BAR]"), "[FOO?BAR]");
}

#[test]
fn replacement_contains_the_char() {
  let e = escape::runes::Escaper::new(|_: char| Some("\u{2603}\u{2603}"));
  similar_asserts::assert_eq!(e.escape("\u{2603}"), "\u{2603}\u{2603}");
}

#[test]
fn nop() {
  let e = escape::runes::Escaper::new(|_: char| None::<&str>);
  assert!(matches!(e.escape(TEST_STRING), Cow::Borrowed(_)));
}

#[test]
fn decimal_escapes() {
  let e = escape::runes::Escaper::new(decimal);
  similar_asserts::assert_eq!(
    e.escape(TEST_STRING),
    "[0]abyz[128][256][2048][4096]ABYZ[65535][65536]0189[1114111]"
  );
}

#[test]
fn grows_buffer() {
  let input = ('\u{100}'..'\u{400}').collect::<String>();
  let want = (256..1024).map(|i| format!("[{i}]")).collect::<String>();
  let e = escape::runes::Escaper::new(decimal);
  similar_asserts::assert_eq!(e.escape(&input), want);
}

#[test]
fn supplementary_chars() {
  let min = 0x10000u32;
  let max = char::MAX as u32;
  let step = (max - min) / 4;
  let points = [min, min + step, min + 2 * step, min + 3 * step, max];

  let mut input = String::from("x");
  let mut want = String::from("x");
  for p in points {
    // Quarters of the range never land on a surrogate.
    input.push(char::from_u32(p).unwrap());
    want += &format!("[{p}]");
  }
  input.push('x');
  want.push('x');

  let e = escape::runes::Escaper::new(decimal);
  similar_asserts::assert_eq!(e.escape(&input), want);
}

#[test]
fn array_based_replacements() {
  let e = ArrayBasedEscaper::new(
    simple_replacements(),
    '\0',
    char::MAX,
    |_: char| Some(""),
  );
  similar_asserts::assert_eq!(
    e.escape("\tFish & Chips\n"),
    "<tab>Fish <and> Chips<newline>"
  );

  let safe = "\0\u{100}\u{10000}\u{FFFF}";
  similar_asserts::assert_eq!(e.escape(safe), safe);
}

#[test]
fn array_based_safe_range() {
  let e = ArrayBasedEscaper::new(EscaperMap::default(), 'A', 'Z', braces);
  similar_asserts::assert_eq!(e.escape(""), "");
  similar_asserts::assert_eq!(e.escape("[FOO@BAR]"), "{[}FOO{@}BAR{]}");
}

#[test]
fn array_based_reversed_range() {
  let e = ArrayBasedEscaper::new(EscaperMap::default(), 'Z', 'A', braces);
  similar_asserts::assert_eq!(e.escape(""), "");
  similar_asserts::assert_eq!(e.escape("[FOO]"), "{[}{F}{O}{O}{]}");
}

#[test]
fn array_based_deletes_unsafe() {
  let e = ArrayBasedEscaper::new(
    EscaperMap::default(),
    ' ',
    '~',
    UnsafeReplacement::new(Some("")),
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
  let unsafe_char = |_: char| Some("?");
  let e = ArrayBasedEscaper::new(simple_replacements(), ' ', '~', unsafe_char);
  similar_asserts::assert_eq!(
    e.escape("\tFish &\0 Chips\r\n"),
    "<tab>Fish <and>? Chips?<newline>"
  );
}

#[test]
fn array_based_supplementary_safe() {
  let e = ArrayBasedEscaper::new(
    EscaperMap::default(),
    '\0',
    '\u{20000}',
    |_: char| Some("X"),
  );
  similar_asserts::assert_eq!(e.escape("\u{10000}"), "\u{10000}");
  similar_asserts::assert_eq!(e.escape("\u{20001}"), "X");
}

#[test]
fn escaper_map_sizing() {
  assert!(EscaperMap::new(Vec::<(char, &str)>::new()).is_empty());

  let m = EscaperMap::new([('a', "first"), ('z', "last")]);
  similar_asserts::assert_eq!(m.len(), 'z' as usize + 1);

  let pairs = [
    ('\0', "zero"),
    ('a', "first"),
    ('b', "second"),
    ('z', "last"),
    ('\u{FFFF}', "biggest"),
  ];
  let m = pairs.iter().copied().collect::<EscaperMap>();
  similar_asserts::assert_eq!(m.len(), 0x10000);
  for c in '\0'..='\u{FFFF}' {
    let want = pairs.iter().find(|(k, _)| *k == c).map(|(_, v)| *v);
    similar_asserts::assert_eq!(m.get(c), want, "{c:?}");
  }
  similar_asserts::assert_eq!(m.get('\u{10000}'), None);
}

#[test]
fn builder_table_wins_over_safe_range() {
  let e = Builder::new()
    .set_safe_range('\0', char::MAX)
    .add_escape('&', "<and>")
    .build();
  similar_asserts::assert_eq!(e.escape("a&b"), "a<and>b");
  similar_asserts::assert_eq!(e.table().get('&'), Some("<and>"));
}
