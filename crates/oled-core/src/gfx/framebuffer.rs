//! Bit-packed page framebuffer with sprite compositing and rectangle clearing.
//!
//! The panel memory is organised as [`PAGES`] horizontal bands of 8 rows.
//! Each byte of a page is one column of that band, bit 0 at the top, which is
//! the controller's native layout: a page row can be streamed to the panel
//! without conversion.

use core::fmt;
use core::ops::{Range, RangeInclusive};

use crate::assets::{Sprite, SPRITE_HEIGHT};

/// Panel width in pixels.
pub const WIDTH: usize = 128;
/// Panel height in pixels.
pub const HEIGHT: usize = 64;
/// Rows held by one page cell.
pub const PAGE_HEIGHT: u8 = 8;
/// Number of pages.
pub const PAGES: usize = HEIGHT / PAGE_HEIGHT as usize;

/// Rejected drawing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// The area `width`×`height` at (`x`, `y`) does not fit inside the panel.
    OutOfBounds { x: u8, y: u8, width: u8, height: u8 },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "{width}x{height} area at ({x}, {y}) exceeds the {WIDTH}x{HEIGHT} panel"
            ),
        }
    }
}

/// Pages and columns touched by a drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpan {
    pub pages: RangeInclusive<usize>,
    pub columns: Range<u8>,
}

/// Page index and bit position of pixel row `y`.
pub fn cell_address(y: u8) -> (usize, u8) {
    ((y / PAGE_HEIGHT) as usize, y % PAGE_HEIGHT)
}

/// Place a column of `bits` (bit 0 topmost) `bit_offset` rows down a page.
///
/// Returns the bits landing in that page and the bits spilling into the top
/// of the page below.
pub fn split_strip(bits: u8, bit_offset: u8) -> (u8, u8) {
    debug_assert!(bit_offset < PAGE_HEIGHT);
    let first = bits << bit_offset;
    let spill = if bit_offset == 0 {
        0
    } else {
        bits >> (PAGE_HEIGHT - bit_offset)
    };
    (first, spill)
}

/// Mask with bits `top..=bottom` set.
pub fn page_mask(top: u8, bottom: u8) -> u8 {
    debug_assert!(top <= bottom && bottom < PAGE_HEIGHT);
    (0xFFu8 << top) & (0xFFu8 >> (PAGE_HEIGHT - 1 - bottom))
}

fn check_bounds(x: u8, y: u8, width: u8, height: u8) -> Result<(), DrawError> {
    if x as usize + width as usize > WIDTH || y as usize + height as usize > HEIGHT {
        return Err(DrawError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(())
}

/// In-memory copy of the panel.
#[derive(Clone)]
pub struct Framebuffer {
    cells: [[u8; WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    pub const fn new() -> Self {
        Self {
            cells: [[0; WIDTH]; PAGES],
        }
    }

    pub fn clear(&mut self) {
        self.cells = [[0; WIDTH]; PAGES];
    }

    /// The cells of one page, left to right.
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.cells[page]
    }

    /// Whether pixel (`x`, `y`) is set. Pixels outside the panel read as unset.
    pub fn read_pixel(&self, x: u8, y: u8) -> bool {
        let (page, bit) = cell_address(y);
        self.cells
            .get(page)
            .and_then(|row| row.get(x as usize))
            .is_some_and(|cell| cell & (1 << bit) != 0)
    }

    /// Clear one pixel. Returns the touched cell, or `None` outside the panel.
    pub fn clear_pixel(&mut self, x: u8, y: u8) -> Option<PageSpan> {
        let (page, bit) = cell_address(y);
        let cell = self.cells.get_mut(page)?.get_mut(x as usize)?;
        *cell &= !(1 << bit);
        Some(PageSpan {
            pages: page..=page,
            columns: x..x + 1,
        })
    }

    /// OR `sprite` into the buffer with its top-left corner at (`x`, `y`).
    ///
    /// Pixels already set stay set. When the sprite straddles a page boundary
    /// the span covers both pages.
    pub fn draw_sprite(&mut self, sprite: &Sprite<'_>, x: u8, y: u8) -> Result<PageSpan, DrawError> {
        let width = sprite.width();
        check_bounds(x, y, width, SPRITE_HEIGHT)?;

        let (page, bit_offset) = cell_address(y);
        let spills = bit_offset + SPRITE_HEIGHT > PAGE_HEIGHT;
        let strips = sprite.strips().take(width as usize);
        for (column, strip) in (x as usize..).zip(strips) {
            let (first, spill) = split_strip(strip, bit_offset);
            self.cells[page][column] |= first;
            if spills {
                self.cells[page + 1][column] |= spill;
            }
        }

        let last_page = if spills { page + 1 } else { page };
        Ok(PageSpan {
            pages: page..=last_page,
            columns: x..x + width,
        })
    }

    /// Zero every pixel of the `w`×`h` rectangle at (`x`, `y`).
    ///
    /// Returns `Ok(None)` for an empty rectangle.
    pub fn clear_rect(&mut self, x: u8, y: u8, w: u8, h: u8) -> Result<Option<PageSpan>, DrawError> {
        check_bounds(x, y, w, h)?;
        if w == 0 || h == 0 {
            return Ok(None);
        }

        let (first_page, top_bit) = cell_address(y);
        let (last_page, bottom_bit) = cell_address(y + (h - 1));
        let columns = x as usize..x as usize + w as usize;
        for page in first_page..=last_page {
            let top = if page == first_page { top_bit } else { 0 };
            let bottom = if page == last_page {
                bottom_bit
            } else {
                PAGE_HEIGHT - 1
            };
            let keep = !page_mask(top, bottom);
            for cell in &mut self.cells[page][columns.clone()] {
                *cell &= keep;
            }
        }

        Ok(Some(PageSpan {
            pages: first_page..=last_page,
            columns: x..x + w,
        }))
    }

    /// Render the buffer as text, `#` for a set pixel, one line per row.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for page in &self.cells {
            for bit in 0..PAGE_HEIGHT {
                for cell in page {
                    out.write_char(if cell & (1 << bit) != 0 { '#' } else { ' ' })?;
                }
                out.write_char('\n')?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_address_splits_row() {
        assert_eq!(cell_address(0), (0, 0));
        assert_eq!(cell_address(7), (0, 7));
        assert_eq!(cell_address(8), (1, 0));
        assert_eq!(cell_address(63), (7, 7));
    }

    #[test]
    fn split_strip_every_offset() {
        // Full 5-bit strip: 0b1_1111.
        let expected: [(u8, u8); 8] = [
            (0b0001_1111, 0b0000_0000),
            (0b0011_1110, 0b0000_0000),
            (0b0111_1100, 0b0000_0000),
            (0b1111_1000, 0b0000_0000),
            (0b1111_0000, 0b0000_0001),
            (0b1110_0000, 0b0000_0011),
            (0b1100_0000, 0b0000_0111),
            (0b1000_0000, 0b0000_1111),
        ];
        for (offset, want) in expected.iter().enumerate() {
            assert_eq!(split_strip(0x1F, offset as u8), *want, "offset {offset}");
        }
    }

    #[test]
    fn split_strip_keeps_every_bit() {
        for offset in 0..PAGE_HEIGHT {
            for bits in 0..=0x1Fu8 {
                let (first, spill) = split_strip(bits, offset);
                let rejoined = (u16::from(spill) << 8 | u16::from(first)) >> offset;
                assert_eq!(rejoined, u16::from(bits), "bits {bits:#07b} offset {offset}");
            }
        }
    }

    #[test]
    fn page_mask_ranges() {
        assert_eq!(page_mask(0, 7), 0xFF);
        assert_eq!(page_mask(3, 3), 0b0000_1000);
        assert_eq!(page_mask(2, 5), 0b0011_1100);
        assert_eq!(page_mask(6, 7), 0b1100_0000);
        assert_eq!(page_mask(0, 0), 0b0000_0001);
    }

    #[test]
    fn dump_marks_set_pixels() {
        let mut fb = Framebuffer::new();
        fb.draw_sprite(&Sprite::new(&[0x81]), 1, 0).unwrap();
        let mut out = heapless::String::<{ (WIDTH + 1) * HEIGHT }>::new();
        fb.dump(&mut out).unwrap();
        let first_line = out.lines().next().unwrap();
        assert_eq!(&first_line[..3], " # ");
        assert_eq!(out.matches('#').count(), 1);
    }
}
