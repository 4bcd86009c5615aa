//! ANSI escape sequence stripping.
//!
//! Styled output carries SGR sequences that occupy bytes but no columns.
//! Everything that measures a rendered block goes through [`strip_ansi`]
//! first.

use std::borrow::Cow;

const ESC: u8 = 0x1B;

/// Remove ANSI escape sequences from a string.
///
/// Handles CSI (`ESC [` ... final byte), OSC (`ESC ]` ... BEL or ST),
/// DCS/PM/APC (`ESC P`, `ESC ^`, `ESC _` ... ST) and two-byte escapes.
/// Borrows when the input contains no `ESC` byte.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == ESC {
            i = skip_sequence(s, i);
            continue;
        }
        // ESC is single-byte ASCII, so cutting at it never splits a UTF-8 sequence.
        let start = i;
        while i < bytes.len() && bytes[i] != ESC {
            i += 1;
        }
        out.push_str(&s[start..i]);
    }

    Cow::Owned(out)
}

/// Returns the index just past the escape sequence starting at `pos`.
fn skip_sequence(s: &str, pos: usize) -> usize {
    let bytes = s.as_bytes();
    let Some(&kind) = bytes.get(pos + 1) else {
        return bytes.len();
    };

    match kind {
        b'[' => skip_csi(bytes, pos + 2),
        b']' | b'P' | b'^' | b'_' => skip_until_terminator(bytes, pos + 2),
        // Two-byte escape; a stray ESC before a multibyte char drops the whole char.
        _ => pos + 1 + s[pos + 1..].chars().next().map_or(1, char::len_utf8),
    }
}

fn skip_csi(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x3F).contains(&b) {
            // Malformed; resume at the offending byte.
            return i;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_until_terminator(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}
