//! Character to glyph mapping for the 5-pixel font.

use super::bitmaps::*;
use super::sprite::Sprite;

/// Advance used by every character not listed in [`WIDE_CHARS`].
pub const DEFAULT_CHAR_WIDTH: u8 = 4;

/// Characters whose advance differs from [`DEFAULT_CHAR_WIDTH`].
pub const WIDE_CHARS: [(u8, u8); 4] = [(b'M', 6), (b'W', 6), (b'N', 5), (b'?', 5)];

/// First and last printable ASCII codes.
pub const PRINTABLE: core::ops::RangeInclusive<u8> = 0x20..=0x7E;

/// Cursor advance for `c`, in pixels.
///
/// Only the uppercase spellings are wide; lowercase letters share the
/// uppercase glyphs but keep the default advance.
pub fn char_width(c: u8) -> u8 {
    WIDE_CHARS
        .iter()
        .find(|(wide, _)| *wide == c)
        .map_or(DEFAULT_CHAR_WIDTH, |(_, width)| *width)
}

/// Glyph for `c`, or `None` for blanks and characters the font lacks.
pub fn glyph(c: u8) -> Option<Sprite<'static>> {
    if !PRINTABLE.contains(&c) {
        return None;
    }
    let sprite = match c.to_ascii_uppercase() {
        b'!' => EXCLAIM,
        b'*' => STAR,
        b'-' => HYPHEN,
        b'.' => DOT,
        b'0' | b'O' => DIGIT_0,
        b'1' => DIGIT_1,
        b'2' => DIGIT_2,
        b'3' => DIGIT_3,
        b'4' => DIGIT_4,
        b'5' => DIGIT_5,
        b'6' => DIGIT_6,
        b'7' => DIGIT_7,
        b'8' => DIGIT_8,
        b'9' => DIGIT_9,
        b'<' => BACK,
        b'=' => EQUALS,
        b'?' => QUESTION,
        b'@' => INVERTED_Y,
        b'A' => LETTER_A,
        b'B' => LETTER_B,
        b'C' => LETTER_C,
        b'D' => LETTER_D,
        b'E' => LETTER_E,
        b'F' => LETTER_F,
        b'G' => LETTER_G,
        b'H' => LETTER_H,
        b'I' => LETTER_I,
        b'J' => LETTER_J,
        b'K' => LETTER_K,
        b'L' => LETTER_L,
        b'M' => LETTER_M,
        b'N' => LETTER_N,
        b'P' => LETTER_P,
        b'Q' => LETTER_Q,
        b'R' => LETTER_R,
        b'S' => LETTER_S,
        b'T' => LETTER_T,
        b'U' => LETTER_U,
        b'V' => LETTER_V,
        b'W' => LETTER_W,
        b'X' => LETTER_X,
        b'Y' => LETTER_Y,
        b'Z' => LETTER_Z,
        _ => return None,
    };
    Some(sprite)
}
