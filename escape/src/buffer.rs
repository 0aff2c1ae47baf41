//! The copy-and-substitute loop shared by every escaper.

use std::borrow::Cow;

/// How eagerly the output buffer grows when a replacement does not fit.
///
/// The new capacity is `needed + multiplier * remaining + pad`, where
/// `remaining` is the number of input bytes not yet examined.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Growth {
  pub multiplier: usize,
  pub pad: usize,
}

impl Growth {
  /// Bytes usually escape into a handful of bytes each.
  pub const BYTES: Self = Self { multiplier: 2, pad: 0 };
  /// Most chars are left alone; a fixed pad absorbs the odd replacement.
  pub const RUNES: Self = Self { multiplier: 1, pad: 32 };
}

/// Escapes `input`, starting from the unit at byte offset `start`.
///
/// `units` yields each unit at or after `start` along with its absolute byte
/// offset into `input`; `width` gives the number of bytes each unit occupies.
/// `escape` returns the replacement for a unit, or `None` to keep it.
///
/// Units before `start` are copied verbatim. If `escape` keeps every unit,
/// `input` is returned borrowed.
///
/// # Panics
///
/// Panics if the output buffer would have to grow past `usize::MAX` bytes.
pub(crate) fn escape_slow<'a, U, R>(
  input: &'a [u8],
  start: usize,
  units: impl Iterator<Item = (usize, U)>,
  width: impl Fn(U) -> usize,
  mut escape: impl FnMut(U) -> Option<R>,
  growth: Growth,
) -> Cow<'a, [u8]>
where
  U: Copy,
  R: AsRef<[u8]>,
{
  tracing::trace!(start, len = input.len(), "escape slow path");

  let mut out = Vec::<u8>::new();
  let mut last_escape = 0;
  let mut replaced = false;

  for (i, unit) in units {
    let Some(r) = escape(unit) else { continue };
    let r = r.as_ref();

    let skipped = &input[last_escape..i];
    let needed = sum(&[out.len(), skipped.len(), r.len()]);
    if out.capacity() < needed {
      let remaining = (input.len() - i).checked_mul(growth.multiplier);
      let size = sum(&[needed, remaining.unwrap_or(usize::MAX), growth.pad]);
      out.reserve_exact(size - out.len());
    }

    out.extend_from_slice(skipped);
    out.extend_from_slice(r);
    last_escape = i + width(unit);
    replaced = true;
  }

  if !replaced {
    return Cow::Borrowed(input);
  }

  // No padding for the final copy.
  let rest = &input[last_escape..];
  out.reserve_exact(rest.len());
  out.extend_from_slice(rest);
  Cow::Owned(out)
}

fn sum(sizes: &[usize]) -> usize {
  sizes
    .iter()
    .try_fold(0usize, |acc, &n| acc.checked_add(n))
    .unwrap_or_else(|| panic!("cannot grow escape buffer any further"))
}

#[cfg(test)]
mod test {
  use super::*;

  fn escape_bytes(input: &[u8]) -> Cow<[u8]> {
    let start = input.iter().position(|&b| b == b'!').unwrap_or(input.len());
    escape_slow(
      input,
      start,
      input.iter().copied().enumerate().skip(start),
      |_| 1,
      |b| match b {
        b'!' => Some(&b"<bang>"[..]),
        b'?' => Some(&b""[..]),
        _ => None,
      },
      Growth::BYTES,
    )
  }

  #[test]
  fn copies_around_replacements() {
    assert_eq!(escape_bytes(b"a!b?c!"), &b"a<bang>bc<bang>"[..]);
    assert_eq!(escape_bytes(b"!!"), &b"<bang><bang>"[..]);
    assert_eq!(escape_bytes(b"abc!"), &b"abc<bang>"[..]);
  }

  #[test]
  fn untouched_input_is_borrowed() {
    assert!(matches!(escape_bytes(b"abc"), Cow::Borrowed(b"abc")));
    assert!(matches!(escape_bytes(b""), Cow::Borrowed(b"")));
  }

  #[test]
  fn deletion_only() {
    let input = b"?a??b?";
    let out = escape_slow(
      input,
      0,
      input.iter().copied().enumerate(),
      |_| 1,
      |b| (b == b'?').then_some(""),
      Growth::RUNES,
    );
    assert_eq!(out, &b"ab"[..]);
  }

  #[test]
  #[should_panic = "cannot grow escape buffer any further"]
  fn overflow_is_fatal() {
    sum(&[usize::MAX, 1]);
  }
}
