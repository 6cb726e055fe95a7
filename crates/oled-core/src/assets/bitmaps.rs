//! Sprite and glyph bitmaps.
//!
//! Every bitmap is a run of vertical 5-pixel strips, LSB at the top, one byte
//! per column. The MSB marks the final strip of a bitmap. All bitmaps live in
//! one flat table and each named [`Sprite`] starts at its offset into it.

use super::sprite::Sprite;

/// Number of bytes in [`BITMAPS`].
pub const BITMAPS_LEN: usize = 1243;

/// The flat bitmap table.
#[rustfmt::skip]
pub const BITMAPS: &[u8; BITMAPS_LEN] = &[
    // exclaim @ 0, width 3
    0b0000_0000, 0b0001_1101, 0b1000_0000,
    // star @ 3, width 3
    0b0000_1010, 0b0001_1111, 0b1000_1010,
    // hyphen @ 6, width 3
    0b0000_0100, 0b0000_0100, 0b1000_0100,
    // dot @ 9, width 3
    0b0000_0000, 0b0001_0000, 0b1000_0000,
    // digit 0 @ 12, width 3
    0b0000_1110, 0b0001_0001, 0b1000_1110,
    // digit 1 @ 15, width 3
    0b0001_0010, 0b0001_1111, 0b1001_0000,
    // digit 2 @ 18, width 3
    0b0001_1001, 0b0001_0101, 0b1001_0010,
    // digit 3 @ 21, width 3
    0b0001_0101, 0b0001_0101, 0b1000_1010,
    // digit 4 @ 24, width 3
    0b0000_1111, 0b0000_1000, 0b1001_1100,
    // digit 5 @ 27, width 3
    0b0001_0111, 0b0001_0101, 0b1000_1001,
    // digit 6 @ 30, width 3
    0b0000_1110, 0b0001_0101, 0b1000_1001,
    // digit 7 @ 33, width 3
    0b0000_0001, 0b0001_1101, 0b1000_0011,
    // digit 8 @ 36, width 3
    0b0000_1010, 0b0001_0101, 0b1000_1010,
    // digit 9 @ 39, width 3
    0b0001_0010, 0b0001_0101, 0b1000_1110,
    // equals @ 42, width 3
    0b0000_1010, 0b0000_1010, 0b1000_1010,
    // question @ 45, width 4
    0b0000_0010, 0b0000_0001, 0b0001_0101, 0b1000_0010,
    // letter a @ 49, width 3
    0b0001_1110, 0b0000_0101, 0b1001_1110,
    // letter b @ 52, width 3
    0b0001_1111, 0b0001_0101, 0b1000_1010,
    // letter c @ 55, width 3
    0b0000_1110, 0b0001_0001, 0b1000_1010,
    // letter d @ 58, width 3
    0b0001_1111, 0b0001_0001, 0b1000_1110,
    // letter e @ 61, width 3
    0b0001_1111, 0b0001_0101, 0b1001_0001,
    // letter f @ 64, width 3
    0b0001_1111, 0b0000_0101, 0b1000_0001,
    // letter g @ 67, width 3
    0b0000_1110, 0b0001_0001, 0b1001_1010,
    // letter h @ 70, width 3
    0b0001_1111, 0b0000_0100, 0b1001_1111,
    // letter i @ 73, width 3
    0b0001_0001, 0b0001_1111, 0b1001_0001,
    // letter j @ 76, width 3
    0b0001_0001, 0b0001_1111, 0b1000_0001,
    // letter k @ 79, width 3
    0b0001_1111, 0b0000_0100, 0b1001_1011,
    // letter l @ 82, width 3
    0b0001_1111, 0b0001_0000, 0b1001_0000,
    // letter m @ 85, width 5
    0b0001_1111, 0b0000_0010, 0b0000_0100, 0b0000_0010, 0b1001_1111,
    // letter n @ 90, width 4
    0b0001_1111, 0b0000_0010, 0b0000_0100, 0b1001_1111,
    // letter p @ 94, width 3
    0b0001_1111, 0b0000_0101, 0b1000_0010,
    // letter q @ 97, width 3
    0b0000_1110, 0b0001_0001, 0b1001_1110,
    // letter r @ 100, width 3
    0b0001_1111, 0b0000_0101, 0b1001_1010,
    // letter s @ 103, width 3
    0b0001_0010, 0b0001_0101, 0b1000_1001,
    // letter t @ 106, width 3
    0b0000_0001, 0b0001_1111, 0b1000_0001,
    // letter u @ 109, width 3
    0b0001_1111, 0b0001_0000, 0b1001_1111,
    // letter v @ 112, width 3
    0b0000_1111, 0b0001_0000, 0b1000_1111,
    // letter w @ 115, width 5
    0b0000_1111, 0b0001_0000, 0b0000_1110, 0b0001_0000, 0b1000_1111,
    // letter x @ 120, width 3
    0b0001_1011, 0b0000_0100, 0b1001_1011,
    // letter y @ 123, width 3
    0b0000_0011, 0b0001_1100, 0b1000_0011,
    // letter z @ 126, width 3
    0b0001_1001, 0b0001_0101, 0b1001_0011,
    // inverted y @ 129, width 3
    0b0001_1000, 0b0000_0111, 0b1001_1000,
    // back @ 132, width 3
    0b0000_0100, 0b0000_1110, 0b1001_1111,
    // mystery @ 135, width 9
    0b0000_1100, 0b0001_1010, 0b0000_1110, 0b0000_1011, 0b0001_1110, 0b0000_1011, 0b0000_1110, 0b0001_1010,
    0b1000_1100,
    // alien30 a @ 144, width 5
    0b0001_0100, 0b0000_1010, 0b0001_0111, 0b0000_1010, 0b1001_0100,
    // alien30 b @ 149, width 5
    0b0000_0100, 0b0001_1010, 0b0000_0111, 0b0001_1010, 0b1000_0100,
    // alien20 a @ 154, width 7
    0b0001_1000, 0b0000_1101, 0b0001_1010, 0b0000_1110, 0b0001_1010, 0b0000_1101, 0b1001_1000,
    // alien20 b @ 161, width 7
    0b0000_1100, 0b0001_1101, 0b0000_1010, 0b0000_1110, 0b0000_1010, 0b0001_1101, 0b1000_1100,
    // alien10 a @ 168, width 8
    0b0001_0110, 0b0001_1111, 0b0000_1101, 0b0000_0111, 0b0000_0111, 0b0000_1101, 0b0001_1111, 0b1001_0110,
    // alien10 b @ 176, width 8
    0b0000_1110, 0b0001_1111, 0b0001_0101, 0b0000_0111, 0b0000_0111, 0b0001_0101, 0b0001_1111, 0b1000_1110,
    // base @ 184, width 9
    0b0001_1000, 0b0001_1100, 0b0001_1100, 0b0001_1100, 0b0001_1111, 0b0001_1100, 0b0001_1100, 0b0001_1100,
    0b1001_1000,
    // base dead @ 193, width 9
    0b0001_0100, 0b0001_1001, 0b0001_1000, 0b0001_1100, 0b0001_1101, 0b0001_1000, 0b0001_1010, 0b0001_0001,
    0b1001_0100,
    // defence @ 202, width 14
    0b0001_1100, 0b0001_1110, 0b0001_1111, 0b0001_1111, 0b0000_1111, 0b0000_0111, 0b0000_0111, 0b0000_0111,
    0b0000_0111, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b1001_1100,
    // explosion @ 216, width 7
    0b0000_0101, 0b0001_0010, 0b0000_1100, 0b0000_0001, 0b0000_0100, 0b0000_1010, 0b1001_0001,
    // laser @ 223, width 1
    0b1000_1111,
    // bomb wiggly a @ 224, width 2
    0b0001_0101, 0b1000_1010,
    // bomb wiggly b @ 226, width 2
    0b0000_1010, 0b1001_0101,
    // bomb heavy a @ 228, width 3
    0b0000_1000, 0b0001_1111, 0b1000_1000,
    // bomb heavy b @ 231, width 3
    0b0000_0010, 0b0001_1111, 0b1000_0010,
    // box top @ 234, width 9
    0b0001_1000, 0b0000_1000, 0b0000_1000, 0b0000_1000, 0b0000_1000, 0b0000_1000, 0b0000_1000, 0b0000_1000,
    0b1001_1000,
    // box side @ 243, width 1
    0b1001_1111,
    // box bottom @ 244, width 9
    0b0000_0011, 0b0000_0010, 0b0000_0010, 0b0000_0010, 0b0000_0010, 0b0000_0010, 0b0000_0010, 0b0000_0010,
    0b1000_0011,
    // title banner row 1 @ 253, width 72
    0b0001_0000, 0b0000_1000, 0b0000_1010, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001,
    0b0000_1001, 0b0001_0001, 0b0000_0010, 0b0000_0100, 0b0000_1000, 0b0000_0000, 0b0000_0000, 0b0001_1000,
    0b0000_1011, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001,
    0b0000_1001, 0b0001_0010, 0b0000_0100, 0b0000_1000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_1000,
    0b0000_1011, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1011, 0b0001_1000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_1000, 0b0000_0100, 0b0001_0010, 0b0000_1001,
    0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1010, 0b0001_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0011, 0b0001_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001,
    0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1001, 0b0000_1011, 0b0000_1000, 0b1001_1000,
    // title banner row 2 @ 325, width 76
    0b0001_1000, 0b0001_1100, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110,
    0b0001_1110, 0b0001_1110, 0b0001_1100, 0b0001_1000, 0b0001_0001, 0b0000_0010, 0b0000_0000, 0b0000_0000,
    0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110,
    0b0001_1110, 0b0001_1110, 0b0001_1100, 0b0001_1000, 0b0001_0001, 0b0000_0110, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110,
    0b0001_1110, 0b0001_1110, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0110, 0b0001_0001,
    0b0001_1000, 0b0001_1100, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110,
    0b0001_1110, 0b0001_1110, 0b0001_1100, 0b0001_1000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_1110,
    0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110,
    0b0001_1110, 0b0001_1110, 0b0001_1110, 0b1000_1110,
    // title banner row 3 @ 401, width 71
    0b0000_0011, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1101, 0b0000_0001,
    0b0000_0111, 0b0000_1111, 0b0000_1111, 0b0000_1111, 0b0000_1111, 0b0000_1111, 0b0000_0000, 0b0000_0000,
    0b0000_0011, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0000, 0b0000_0001,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0000, 0b0000_0000,
    0b0001_1000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0001, 0b0000_0000, 0b0000_1111, 0b0000_1111,
    0b0000_1111, 0b0000_1111, 0b0000_1111, 0b0000_1111, 0b0000_0000, 0b0000_0000, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0111, 0b0000_0001, 0b0000_0100, 0b1000_1100,
    // title banner row 4 @ 472, width 69
    0b0000_0011, 0b0000_0111, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0001_1100, 0b0001_1100,
    0b0001_1100, 0b0001_1100, 0b0001_1100, 0b0001_1000, 0b0001_0010, 0b0000_0100, 0b0000_0000, 0b0000_0011,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1100, 0b0001_1000, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_1111, 0b0000_0000, 0b0000_0000, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_1000, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0000_0011, 0b0000_0000, 0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_1100,
    0b0000_0000, 0b0000_0000, 0b0001_0000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0000_1111, 0b0000_1111, 0b0000_1111, 0b0000_1111, 0b1000_0111,
    // title banner row 5 @ 541, width 66
    0b0001_1000, 0b0001_1000, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_0001, 0b0000_0001, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_0000, 0b0000_0000, 0b0000_0011, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0011, 0b0000_0011, 0b0000_0011, 0b0000_0011, 0b0000_0001,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_1100, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0000_1111, 0b0000_1110, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1100,
    0b0000_0000, 0b0000_0000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_0000,
    0b0001_1000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_1111, 0b0000_0000, 0b0001_1000,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_0001, 0b0001_0000, 0b0001_0010,
    0b0001_0110, 0b1001_0000,
    // title banner row 6 @ 607, width 105
    0b0000_1100, 0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_1100, 0b0000_0000, 0b0000_0100, 0b0000_1100,
    0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_1000, 0b0000_0000, 0b0000_1100, 0b0000_0100, 0b0000_0100,
    0b0000_0100, 0b0000_1100, 0b0000_0000, 0b0000_1000, 0b0000_0001, 0b0000_0011, 0b0000_0011, 0b0000_0111,
    0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0011, 0b0000_0001,
    0b0000_1100, 0b0000_0000, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0000,
    0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_1100, 0b0000_0000, 0b0000_0000, 0b0000_0111, 0b0000_0111,
    0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0000, 0b0000_0100, 0b0000_0000, 0b0000_0111, 0b0000_0111,
    0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0000, 0b0000_0000, 0b0000_0011, 0b0000_0111, 0b0000_0111,
    0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0011, 0b0000_0001,
    0b0000_0100, 0b0000_0000, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111,
    0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0111, 0b0000_0011, 0b0000_0000, 0b0000_0100, 0b0000_0100,
    0b0000_0100, 0b0000_1000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_0000, 0b0000_1000,
    0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_0100, 0b0000_0100,
    0b1000_1000,
    // title banner row 7 @ 712, width 116
    0b0001_1000, 0b0001_1000, 0b0001_1000, 0b0001_1011, 0b0001_1001, 0b0001_1001, 0b0000_0001, 0b0000_0001,
    0b0000_1011, 0b0001_1000, 0b0001_1000, 0b0001_1001, 0b0001_1011, 0b0001_0001, 0b0000_0001, 0b0000_0001,
    0b0001_1010, 0b0001_1000, 0b0001_1011, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0000_0011, 0b0000_0000,
    0b0001_1000, 0b0001_1011, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_0001, 0b0000_0011, 0b0000_1100,
    0b0001_0000, 0b0000_0000, 0b0001_1011, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0000_0011,
    0b0000_0000, 0b0000_0000, 0b0001_1011, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001,
    0b0001_1001, 0b0001_1001, 0b0001_1011, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0001_1011, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001,
    0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_0010, 0b0000_0100, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0001_1011, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001,
    0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1011, 0b0001_1000, 0b0000_0000, 0b0000_0011, 0b0001_1001,
    0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001,
    0b0001_1001, 0b0001_1010, 0b0001_1000, 0b0001_0000, 0b0000_0000, 0b0000_0100, 0b0000_0010, 0b0000_0010,
    0b0001_0001, 0b0001_0001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001, 0b0001_1001,
    0b0001_1001, 0b0001_1010, 0b0001_1000, 0b1001_1000,
    // title banner row 8 @ 828, width 115
    0b0000_0001, 0b0000_0111, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0001_1000,
    0b0000_0001, 0b0000_0011, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0001_1000,
    0b0001_0011, 0b0000_0111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1100, 0b0000_0000,
    0b0000_0011, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0001_0000, 0b0000_0001,
    0b0000_0000, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1000, 0b0000_0000,
    0b0000_0000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0001, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0000, 0b0000_0000, 0b0001_1100, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0011, 0b0000_0001, 0b0000_0101, 0b0000_0101,
    0b0000_1101, 0b0000_0001, 0b0001_1001, 0b0000_0000, 0b0001_1000, 0b0001_1110, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0000_0111, 0b0000_0001, 0b0001_1001, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0000_1111, 0b0000_0011, 0b0001_0000, 0b0001_1100, 0b0001_1110, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0000_1111, 0b0000_0011, 0b0001_0001, 0b0001_1101, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0000_0111, 0b1000_0001,
    // title banner row 9 @ 943, width 106
    0b0000_0001, 0b0000_0011, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0001_1000,
    0b0000_0001, 0b0000_0111, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1000, 0b0000_0000, 0b0000_0001,
    0b0000_0111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0001_1000, 0b0000_0000, 0b0000_0111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0000, 0b0000_0000, 0b0000_0001, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0001, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_0000, 0b0000_0000, 0b0000_0000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0000_0111, 0b0000_0000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0000_0011, 0b0000_0000, 0b0001_1000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0000_1111, 0b0000_1111, 0b0000_1111, 0b0000_1111, 0b0000_1111, 0b0000_0011, 0b0000_0000, 0b0001_0000,
    0b0001_1110, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_1111, 0b0001_1100, 0b0001_1100,
    0b0001_1111, 0b0001_1111, 0b0001_0011, 0b0000_0011, 0b0000_1011, 0b0000_1001, 0b0000_0000, 0b0000_0110,
    0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1101, 0b0001_1100, 0b0001_1100,
    0b0001_1100, 0b1001_1000,
    // title banner row 10 @ 1049, width 101
    0b0000_0011, 0b0000_0111, 0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0001_1000, 0b0000_0001,
    0b0000_0111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0001_1001, 0b0000_0011, 0b0000_0111,
    0b0000_1111, 0b0001_1111, 0b0001_1111, 0b0001_1100, 0b0001_0000, 0b0000_0000, 0b0000_0011, 0b0000_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1110, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111,
    0b0001_1110, 0b0000_0000, 0b0000_0000, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_1110,
    0b0000_0110, 0b0000_0111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1000, 0b0000_0000,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1000, 0b0001_1000, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_1111, 0b0000_0000, 0b0001_0000, 0b0001_1111, 0b0001_1111,
    0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1001, 0b0001_1000, 0b0001_1001, 0b0001_1001, 0b0001_1011,
    0b0000_0000, 0b0001_0000, 0b0001_1100, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_0011,
    0b0001_0000, 0b0001_1100, 0b0001_1111, 0b0001_1111, 0b0001_1111, 0b0000_1111, 0b0000_0011, 0b0001_1000,
    0b0001_1100, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_1110, 0b0001_0010, 0b0001_1000, 0b0001_1100,
    0b0001_1111, 0b0001_1111, 0b0000_1111, 0b0000_0111, 0b1000_0011,
    // title banner row 11 @ 1150, width 93
    0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0000, 0b0000_0000, 0b0000_0001,
    0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0000, 0b0000_0000, 0b0000_0001, 0b0000_0001,
    0b0000_0001, 0b0000_0001, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0001, 0b0000_0001, 0b0000_0001,
    0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0000, 0b0000_0000,
    0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0001,
    0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0000, 0b0000_0001, 0b0000_0001, 0b0000_0001,
    0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001,
    0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0000, 0b0000_0000, 0b0000_0001, 0b0000_0001,
    0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0000, 0b0000_0000, 0b0000_0001, 0b0000_0001, 0b0000_0001,
    0b0000_0001, 0b0000_0001, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0001, 0b0000_0001, 0b0000_0001,
    0b0000_0001, 0b0000_0001, 0b0000_0001, 0b0000_0001, 0b1000_0001,
];

// Glyphs. There is no letter O; text uses the zero glyph in its place.
pub const EXCLAIM: Sprite<'static> = Sprite::at(BITMAPS, 0);
pub const STAR: Sprite<'static> = Sprite::at(BITMAPS, 3);
pub const HYPHEN: Sprite<'static> = Sprite::at(BITMAPS, 6);
pub const DOT: Sprite<'static> = Sprite::at(BITMAPS, 9);
pub const DIGIT_0: Sprite<'static> = Sprite::at(BITMAPS, 12);
pub const DIGIT_1: Sprite<'static> = Sprite::at(BITMAPS, 15);
pub const DIGIT_2: Sprite<'static> = Sprite::at(BITMAPS, 18);
pub const DIGIT_3: Sprite<'static> = Sprite::at(BITMAPS, 21);
pub const DIGIT_4: Sprite<'static> = Sprite::at(BITMAPS, 24);
pub const DIGIT_5: Sprite<'static> = Sprite::at(BITMAPS, 27);
pub const DIGIT_6: Sprite<'static> = Sprite::at(BITMAPS, 30);
pub const DIGIT_7: Sprite<'static> = Sprite::at(BITMAPS, 33);
pub const DIGIT_8: Sprite<'static> = Sprite::at(BITMAPS, 36);
pub const DIGIT_9: Sprite<'static> = Sprite::at(BITMAPS, 39);
pub const EQUALS: Sprite<'static> = Sprite::at(BITMAPS, 42);
pub const QUESTION: Sprite<'static> = Sprite::at(BITMAPS, 45);
pub const LETTER_A: Sprite<'static> = Sprite::at(BITMAPS, 49);
pub const LETTER_B: Sprite<'static> = Sprite::at(BITMAPS, 52);
pub const LETTER_C: Sprite<'static> = Sprite::at(BITMAPS, 55);
pub const LETTER_D: Sprite<'static> = Sprite::at(BITMAPS, 58);
pub const LETTER_E: Sprite<'static> = Sprite::at(BITMAPS, 61);
pub const LETTER_F: Sprite<'static> = Sprite::at(BITMAPS, 64);
pub const LETTER_G: Sprite<'static> = Sprite::at(BITMAPS, 67);
pub const LETTER_H: Sprite<'static> = Sprite::at(BITMAPS, 70);
pub const LETTER_I: Sprite<'static> = Sprite::at(BITMAPS, 73);
pub const LETTER_J: Sprite<'static> = Sprite::at(BITMAPS, 76);
pub const LETTER_K: Sprite<'static> = Sprite::at(BITMAPS, 79);
pub const LETTER_L: Sprite<'static> = Sprite::at(BITMAPS, 82);
pub const LETTER_M: Sprite<'static> = Sprite::at(BITMAPS, 85);
pub const LETTER_N: Sprite<'static> = Sprite::at(BITMAPS, 90);
pub const LETTER_P: Sprite<'static> = Sprite::at(BITMAPS, 94);
pub const LETTER_Q: Sprite<'static> = Sprite::at(BITMAPS, 97);
pub const LETTER_R: Sprite<'static> = Sprite::at(BITMAPS, 100);
pub const LETTER_S: Sprite<'static> = Sprite::at(BITMAPS, 103);
pub const LETTER_T: Sprite<'static> = Sprite::at(BITMAPS, 106);
pub const LETTER_U: Sprite<'static> = Sprite::at(BITMAPS, 109);
pub const LETTER_V: Sprite<'static> = Sprite::at(BITMAPS, 112);
pub const LETTER_W: Sprite<'static> = Sprite::at(BITMAPS, 115);
pub const LETTER_X: Sprite<'static> = Sprite::at(BITMAPS, 120);
pub const LETTER_Y: Sprite<'static> = Sprite::at(BITMAPS, 123);
pub const LETTER_Z: Sprite<'static> = Sprite::at(BITMAPS, 126);
pub const INVERTED_Y: Sprite<'static> = Sprite::at(BITMAPS, 129);
pub const BACK: Sprite<'static> = Sprite::at(BITMAPS, 132);

// Game sprites. The A/B pairs are the two animation frames.
/// Mystery ship flying across the top of the playfield.
pub const MYSTERY: Sprite<'static> = Sprite::at(BITMAPS, 135);
pub const ALIEN30_A: Sprite<'static> = Sprite::at(BITMAPS, 144);
pub const ALIEN30_B: Sprite<'static> = Sprite::at(BITMAPS, 149);
pub const ALIEN20_A: Sprite<'static> = Sprite::at(BITMAPS, 154);
pub const ALIEN20_B: Sprite<'static> = Sprite::at(BITMAPS, 161);
pub const ALIEN10_A: Sprite<'static> = Sprite::at(BITMAPS, 168);
pub const ALIEN10_B: Sprite<'static> = Sprite::at(BITMAPS, 176);
pub const BASE: Sprite<'static> = Sprite::at(BITMAPS, 184);
pub const BASE_DEAD: Sprite<'static> = Sprite::at(BITMAPS, 193);
/// One block of destructible defence, eroded pixel by pixel as it is hit.
pub const DEFENCE: Sprite<'static> = Sprite::at(BITMAPS, 202);
pub const EXPLOSION: Sprite<'static> = Sprite::at(BITMAPS, 216);
pub const LASER: Sprite<'static> = Sprite::at(BITMAPS, 223);
pub const BOMB_WIGGLY_A: Sprite<'static> = Sprite::at(BITMAPS, 224);
pub const BOMB_WIGGLY_B: Sprite<'static> = Sprite::at(BITMAPS, 226);
pub const BOMB_HEAVY_A: Sprite<'static> = Sprite::at(BITMAPS, 228);
pub const BOMB_HEAVY_B: Sprite<'static> = Sprite::at(BITMAPS, 231);
pub const BOX_TOP: Sprite<'static> = Sprite::at(BITMAPS, 234);
pub const BOX_SIDE: Sprite<'static> = Sprite::at(BITMAPS, 243);
pub const BOX_BOTTOM: Sprite<'static> = Sprite::at(BITMAPS, 244);

/// The title banner, one sprite per 5-pixel row, drawn top to bottom.
pub const TITLE: [Sprite<'static>; 11] = [
    Sprite::at(BITMAPS, 253),
    Sprite::at(BITMAPS, 325),
    Sprite::at(BITMAPS, 401),
    Sprite::at(BITMAPS, 472),
    Sprite::at(BITMAPS, 541),
    Sprite::at(BITMAPS, 607),
    Sprite::at(BITMAPS, 712),
    Sprite::at(BITMAPS, 828),
    Sprite::at(BITMAPS, 943),
    Sprite::at(BITMAPS, 1049),
    Sprite::at(BITMAPS, 1150),
];
