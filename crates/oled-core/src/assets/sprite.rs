//! Sprite descriptor over the terminator-delimited bitmap format.

/// Marks the final strip of a bitmap.
pub const END_MARKER: u8 = 0x80;

/// Pixel bits carried by each strip.
pub const STRIP_MASK: u8 = 0x1F;

/// Height of every sprite and glyph in pixels.
pub const SPRITE_HEIGHT: u8 = 5;

/// A 5-pixel-tall, variable-width bitmap.
///
/// `data` starts at the first strip and may run past the final one (sprites
/// point into the shared [`BITMAPS`](super::bitmaps::BITMAPS) table); only the
/// bytes up to and including the first one with [`END_MARKER`] set belong to
/// the sprite. A slice with no marker ends at its last byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite<'a> {
    data: &'a [u8],
}

impl<'a> Sprite<'a> {
    /// Wrap a slice whose first byte is the sprite's leftmost strip.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// The sprite starting `offset` bytes into `table`.
    pub const fn at(table: &'a [u8], offset: usize) -> Self {
        Self {
            data: table.split_at(offset).1,
        }
    }

    /// Width in columns, one per strip. Saturates at `u8::MAX`.
    pub fn width(&self) -> u8 {
        u8::try_from(self.strips().count()).unwrap_or(u8::MAX)
    }

    /// The sprite's strips, left to right, with the end marker stripped.
    pub fn strips(&self) -> Strips<'a> {
        Strips {
            data: self.data,
            done: false,
        }
    }
}

/// Iterator over the pixel strips of a [`Sprite`].
#[derive(Clone, Debug)]
pub struct Strips<'a> {
    data: &'a [u8],
    done: bool,
}

impl Iterator for Strips<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }
        let (&byte, rest) = self.data.split_first()?;
        self.data = rest;
        if byte & END_MARKER != 0 || rest.is_empty() {
            self.done = true;
        }
        Some(byte & STRIP_MASK)
    }
}
