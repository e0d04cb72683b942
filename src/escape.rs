use crate::classify::needs_escape;
use crate::error::WriteErrorKind;

/// Worst-case growth of a payload under escaping: any code unit may become a
/// six-byte `\uxxxx` form.
pub(crate) const MAX_ESCAPE_EXPANSION: usize = 6;
/// Worst-case growth when transcoding UTF-16 code units to UTF-8.
pub(crate) const MAX_TRANSCODE_EXPANSION: usize = 3;

static HEX_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Outcome of peeking one scalar at the front of a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Utf8Status {
    WellFormed,
    Invalid,
    Incomplete,
    Empty,
}

/// Decodes the next UTF-8 sequence, returning its status, the number of bytes
/// consumed, and the scalar value (meaningful only for `WellFormed`).
///
/// Consume counts on ill-formed input mirror standard replacement behavior:
/// a disallowed lead takes one byte; a valid lead with a bad continuation
/// takes the bytes validated so far; overlong three-byte forms, three-byte
/// forms in the surrogate range, and out-of-range four-byte forms take two.
pub(crate) fn decode_scalar(bytes: &[u8]) -> (Utf8Status, usize, u32) {
    let b0 = match bytes.first() {
        Some(&b) => b,
        None => return (Utf8Status::Empty, 0, 0),
    };
    if b0 < 0x80 {
        return (Utf8Status::WellFormed, 1, b0 as u32);
    }
    // Continuation bytes as a lead, the overlong leads C0/C1, and F5..FF.
    if !(0xC2..=0xF4).contains(&b0) {
        return (Utf8Status::Invalid, 1, 0);
    }
    let b1 = match bytes.get(1) {
        Some(&b) => b,
        None => return (Utf8Status::Incomplete, 1, 0),
    };
    if b0 <= 0xDF {
        if b1 & 0xC0 != 0x80 {
            return (Utf8Status::Invalid, 1, 0);
        }
        let cp = ((b0 as u32 & 0x1F) << 6) | (b1 as u32 & 0x3F);
        return (Utf8Status::WellFormed, 2, cp);
    }
    if b0 <= 0xEF {
        if b1 & 0xC0 != 0x80 {
            return (Utf8Status::Invalid, 1, 0);
        }
        // Overlong (scalar < 0x800) and UTF-16 surrogate range forms.
        if (b0 == 0xE0 && b1 < 0xA0) || (b0 == 0xED && b1 > 0x9F) {
            return (Utf8Status::Invalid, 2, 0);
        }
        let b2 = match bytes.get(2) {
            Some(&b) => b,
            None => return (Utf8Status::Incomplete, 2, 0),
        };
        if b2 & 0xC0 != 0x80 {
            return (Utf8Status::Invalid, 2, 0);
        }
        let cp = ((b0 as u32 & 0x0F) << 12) | ((b1 as u32 & 0x3F) << 6) | (b2 as u32 & 0x3F);
        return (Utf8Status::WellFormed, 3, cp);
    }
    if b1 & 0xC0 != 0x80 {
        return (Utf8Status::Invalid, 1, 0);
    }
    // Scalar below U+10000 (overlong) or above U+10FFFF.
    if (b0 == 0xF0 && b1 < 0x90) || (b0 == 0xF4 && b1 > 0x8F) {
        return (Utf8Status::Invalid, 2, 0);
    }
    let b2 = match bytes.get(2) {
        Some(&b) => b,
        None => return (Utf8Status::Incomplete, 2, 0),
    };
    if b2 & 0xC0 != 0x80 {
        return (Utf8Status::Invalid, 2, 0);
    }
    let b3 = match bytes.get(3) {
        Some(&b) => b,
        None => return (Utf8Status::Incomplete, 3, 0),
    };
    if b3 & 0xC0 != 0x80 {
        return (Utf8Status::Invalid, 3, 0);
    }
    let cp = ((b0 as u32 & 0x07) << 18)
        | ((b1 as u32 & 0x3F) << 12)
        | ((b2 as u32 & 0x3F) << 6)
        | (b3 as u32 & 0x3F);
    (Utf8Status::WellFormed, 4, cp)
}

/// Appends the escaped form of `scalar` at `dst[at..]` and returns the new
/// write position. The caller has reserved worst-case space.
///
/// Short two-character forms cover the usual control escapes plus `\"` and
/// `\/`; every other classified scalar becomes `\uxxxx` with exactly four
/// lowercase hex digits, split into a surrogate pair above U+FFFF.
fn push_escaped(dst: &mut [u8], at: usize, scalar: u32) -> usize {
    let short = match scalar {
        0x08 => Some(b'b'),
        0x09 => Some(b't'),
        0x0A => Some(b'n'),
        0x0C => Some(b'f'),
        0x0D => Some(b'r'),
        0x22 => Some(b'"'),
        0x2F => Some(b'/'),
        0x5C => Some(b'\\'),
        _ => None,
    };
    if let Some(c) = short {
        dst[at] = b'\\';
        dst[at + 1] = c;
        return at + 2;
    }
    if scalar <= 0xFFFF {
        return push_u_escape(dst, at, scalar as u16);
    }
    let u = scalar - 0x1_0000;
    let hi = 0xD800 + (u >> 10) as u16;
    let lo = 0xDC00 + (u & 0x3FF) as u16;
    let at = push_u_escape(dst, at, hi);
    push_u_escape(dst, at, lo)
}

#[inline]
fn push_u_escape(dst: &mut [u8], at: usize, unit: u16) -> usize {
    dst[at] = b'\\';
    dst[at + 1] = b'u';
    dst[at + 2] = HEX_LOWER[(unit >> 12) as usize & 0xF];
    dst[at + 3] = HEX_LOWER[(unit >> 8) as usize & 0xF];
    dst[at + 4] = HEX_LOWER[(unit >> 4) as usize & 0xF];
    dst[at + 5] = HEX_LOWER[unit as usize & 0xF];
    at + 6
}

/// Escapes a UTF-8 byte payload into `dst`, which the caller has sized to the
/// worst case. `first` is the classifier's result: everything before it is
/// copied verbatim. Returns the number of bytes written, or `InvalidUtf8`
/// when the input is ill-formed (nothing is substituted; the writer is a
/// producer and must not silently corrupt caller data).
pub(crate) fn escape_utf8(
    input: &[u8],
    dst: &mut [u8],
    first: usize,
) -> Result<usize, WriteErrorKind> {
    dst[..first].copy_from_slice(&input[..first]);
    let mut w = first;
    let mut i = first;
    while i < input.len() {
        let b = input[i];
        if b < 0x80 {
            if needs_escape(b) {
                w = push_escaped(dst, w, b as u32);
            } else {
                dst[w] = b;
                w += 1;
            }
            i += 1;
            continue;
        }
        let (status, consumed, scalar) = decode_scalar(&input[i..]);
        if status != Utf8Status::WellFormed {
            return Err(WriteErrorKind::InvalidUtf8);
        }
        w = push_escaped(dst, w, scalar);
        i += consumed;
    }
    Ok(w)
}

/// UTF-16 counterpart of [`escape_utf8`]. The prefix before `first` consists
/// of escape-free ASCII units and narrows to one byte each. A high surrogate
/// must be immediately followed by a low surrogate; anything else fails with
/// `InvalidUtf16`.
pub(crate) fn escape_utf16(
    input: &[u16],
    dst: &mut [u8],
    first: usize,
) -> Result<usize, WriteErrorKind> {
    for (d, &u) in dst[..first].iter_mut().zip(&input[..first]) {
        *d = u as u8;
    }
    let mut w = first;
    let mut i = first;
    while i < input.len() {
        let u = input[i];
        if u < 0x80 {
            if needs_escape(u as u8) {
                w = push_escaped(dst, w, u as u32);
            } else {
                dst[w] = u as u8;
                w += 1;
            }
            i += 1;
            continue;
        }
        if (0xD800..=0xDBFF).contains(&u) {
            let lo = match input.get(i + 1) {
                Some(&lo) if (0xDC00..=0xDFFF).contains(&lo) => lo,
                _ => return Err(WriteErrorKind::InvalidUtf16),
            };
            let cp = 0x1_0000 + (((u as u32 - 0xD800) << 10) | (lo as u32 - 0xDC00));
            w = push_escaped(dst, w, cp);
            i += 2;
            continue;
        }
        if (0xDC00..=0xDFFF).contains(&u) {
            return Err(WriteErrorKind::InvalidUtf16);
        }
        w = push_escaped(dst, w, u as u32);
        i += 1;
    }
    Ok(w)
}
