//! Text cursor placement and wrapping.

use super::framebuffer::{HEIGHT, WIDTH};

/// Vertical advance of one text row.
pub const LINE_HEIGHT: u8 = 6;

/// Pixel position of the next character's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: u8,
    pub y: u8,
}

impl Cursor {
    /// A cursor at (`x`, `y`), clamped to the last column and row.
    pub fn clamped(x: u8, y: u8) -> Self {
        Self {
            x: x.min(WIDTH as u8 - 1),
            y: y.min(HEIGHT as u8 - 1),
        }
    }

    /// Whether the cursor has run off the right edge of the panel.
    pub fn is_past_edge(&self) -> bool {
        self.x as usize >= WIDTH
    }

    /// Move right by `width` pixels.
    ///
    /// Landing exactly on the right edge does not wrap; overshooting it wraps
    /// modulo the width onto the next row, and overshooting the bottom wraps
    /// modulo the height back to the top.
    pub fn advance(&mut self, width: u8) {
        let mut x = self.x as usize + width as usize;
        let mut y = self.y as usize;
        if x > WIDTH {
            x %= WIDTH;
            y += LINE_HEIGHT as usize;
            if y > HEIGHT {
                y %= HEIGHT;
            }
        }
        self.x = x as u8;
        self.y = y as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_last_pixel() {
        assert_eq!(Cursor::clamped(200, 64), Cursor { x: 127, y: 63 });
        assert_eq!(Cursor::clamped(5, 6), Cursor { x: 5, y: 6 });
    }

    #[test]
    fn advance_within_row() {
        let mut cursor = Cursor { x: 10, y: 12 };
        cursor.advance(4);
        assert_eq!(cursor, Cursor { x: 14, y: 12 });
    }

    #[test]
    fn reaching_edge_does_not_wrap() {
        let mut cursor = Cursor { x: 124, y: 0 };
        cursor.advance(4);
        assert_eq!(cursor, Cursor { x: 128, y: 0 });
        assert!(cursor.is_past_edge());
    }

    #[test]
    fn overshoot_wraps_to_next_row() {
        let mut cursor = Cursor { x: 126, y: 6 };
        cursor.advance(6);
        assert_eq!(cursor, Cursor { x: 4, y: 12 });
    }

    #[test]
    fn overshoot_past_bottom_wraps_to_top() {
        let mut cursor = Cursor { x: 127, y: 60 };
        cursor.advance(4);
        assert_eq!(cursor, Cursor { x: 3, y: 2 });
    }

    #[test]
    fn bottom_edge_exactly_does_not_wrap() {
        let mut cursor = Cursor { x: 125, y: 58 };
        cursor.advance(5);
        assert_eq!(cursor, Cursor { x: 2, y: 64 });
    }
}
