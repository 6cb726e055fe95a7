//! Buffered SSD1306 driver, generic over I2cTransport.
//!
//! Drawing calls only touch the in-memory [`Framebuffer`] and record which
//! columns of each page changed. [`Ssd1306::update`] then sends just those
//! columns to the panel.

use core::fmt;

use log::{debug, trace};
use oled_hal::{I2cTransport, ResetControl};

use super::bus::{Bus, BusStats};
use super::commands;
use super::config::DisplayConfig;
use crate::assets::{font, Sprite};
use crate::gfx::{Cursor, DirtyTracker, DrawError, Framebuffer, PageSpan, PAGES, WIDTH};

/// Reset pulse timing: release, assert, release again.
const RESET_SETTLE_MS: u32 = 1;
const RESET_HOLD_MS: u32 = 10;

/// Driver for a 128x64 SSD1306 panel. Owns the transport and the framebuffer.
pub struct Ssd1306<T: I2cTransport> {
    bus: Bus<T>,
    config: DisplayConfig,
    framebuffer: Framebuffer,
    dirty: DirtyTracker,
    cursor: Cursor,
}

impl<T: I2cTransport> Ssd1306<T> {
    /// Wrap a transport. Nothing is sent until [`init`](Self::init).
    pub fn new(transport: T, config: DisplayConfig) -> Self {
        Self {
            bus: Bus::new(transport, config.address),
            config,
            framebuffer: Framebuffer::new(),
            dirty: DirtyTracker::new(),
            cursor: Cursor::default(),
        }
    }

    /// Bring the panel up: optional hardware reset, then the configuration
    /// sequence ending with display-on.
    pub fn init(&mut self, reset: Option<&mut dyn ResetControl>) {
        if let Some(reset) = reset {
            debug!("pulsing display reset");
            reset.set_reset(false);
            reset.delay_ms(RESET_SETTLE_MS);
            reset.set_reset(true);
            reset.delay_ms(RESET_HOLD_MS);
            reset.set_reset(false);
        }
        self.cursor = Cursor::default();
        self.bus
            .commands(&commands::init_sequence(self.config.contrast));
        debug!("display {:#04x} initialised", self.config.address);
    }

    /// Blank the panel and the framebuffer, and home the cursor.
    ///
    /// Streams zeroes over the whole panel directly instead of going through
    /// the dirty spans.
    pub fn clear(&mut self) {
        self.bus.commands(&commands::FULL_WINDOW);
        self.bus.data_stream(core::iter::repeat_n(0u8, WIDTH * PAGES));
        self.bus.commands(&commands::FULL_WINDOW);
        self.framebuffer.clear();
        self.dirty.reset();
        self.cursor = Cursor::default();
        debug!("display cleared");
    }

    /// Send every dirty span to the panel and mark it clean.
    pub fn update(&mut self) {
        for page in 0..PAGES {
            let Some(columns) = self.dirty.take(page).columns() else {
                continue;
            };
            trace!(
                "flush page {} columns {}..={}",
                page,
                columns.start(),
                columns.end()
            );
            self.bus
                .commands(&commands::page_cursor(page as u8, *columns.start() as u8));
            let row = self.framebuffer.page(page);
            self.bus.data_stream(row[columns].iter().copied());
        }
    }

    /// Add columns `[x1, x2)` of `page` to the next update.
    pub fn set_update_area(&mut self, page: usize, x1: u8, x2: u8) {
        self.dirty.mark(page, x1, x2);
    }

    /// OR `sprite` into the framebuffer at (`x`, `y`).
    ///
    /// A sprite that would not fit entirely inside the panel is rejected and
    /// nothing is drawn.
    pub fn draw_bitmap(&mut self, sprite: &Sprite<'_>, x: u8, y: u8) -> Result<(), DrawError> {
        let span = self.framebuffer.draw_sprite(sprite, x, y)?;
        self.mark(span);
        Ok(())
    }

    /// Clear the `w`×`h` rectangle at (`x`, `y`).
    ///
    /// A rectangle reaching past the panel is rejected and nothing is cleared.
    pub fn clear_rect(&mut self, x: u8, y: u8, w: u8, h: u8) -> Result<(), DrawError> {
        if let Some(span) = self.framebuffer.clear_rect(x, y, w, h)? {
            self.mark(span);
        }
        Ok(())
    }

    pub fn read_pixel(&self, x: u8, y: u8) -> bool {
        self.framebuffer.read_pixel(x, y)
    }

    /// Clear one pixel; no-op outside the panel.
    pub fn clear_pixel(&mut self, x: u8, y: u8) {
        if let Some(span) = self.framebuffer.clear_pixel(x, y) {
            self.mark(span);
        }
    }

    /// Move the text cursor, clamped to the panel.
    pub fn set_cursor(&mut self, x: u8, y: u8) {
        self.cursor = Cursor::clamped(x, y);
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Draw one character at the cursor and advance it.
    ///
    /// Returns 0 without doing anything if the cursor has already run off the
    /// right edge; call [`set_cursor`](Self::set_cursor) to recover. Blank and
    /// non-printable characters only advance the cursor. A glyph that does
    /// not fit inside the panel is skipped.
    pub fn write(&mut self, c: u8) -> usize {
        if self.cursor.is_past_edge() {
            return 0;
        }
        if let Some(glyph) = font::glyph(c) {
            let Cursor { x, y } = self.cursor;
            if let Err(e) = self.draw_bitmap(&glyph, x, y) {
                debug!("glyph {:?} skipped: {}", c as char, e);
            }
        }
        self.cursor.advance(font::char_width(c));
        1
    }

    /// Write each byte of `s`. Returns the number of bytes in `s`.
    pub fn write_str(&mut self, s: &str) -> usize {
        for &c in s.as_bytes() {
            self.write(c);
        }
        s.len()
    }

    /// Write `value` in decimal.
    pub fn write_int(&mut self, value: u16) {
        let mut digits = [0u8; 5];
        let mut start = digits.len();
        let mut rest = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        for &digit in &digits[start..] {
            self.write(digit);
        }
    }

    /// Write a score: `value` zero-padded to four digits, then a literal `0`
    /// since scores are kept in tens.
    pub fn write_score(&mut self, value: u16) {
        for threshold in [1000, 100, 10] {
            if value < threshold {
                self.write(b'0');
            }
        }
        self.write_int(value);
        self.write(b'0');
    }

    /// Cursor advance of `c` in pixels.
    pub fn char_width(&self, c: u8) -> u8 {
        font::char_width(c)
    }

    /// Send a raw command byte.
    pub fn send_command(&mut self, command: u8) {
        self.bus.command(command);
    }

    /// Send a raw data byte to display memory at the controller's address.
    pub fn send_data(&mut self, byte: u8) {
        self.bus.data(byte);
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn dirty(&self) -> &DirtyTracker {
        &self.dirty
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn stats(&self) -> BusStats {
        self.bus.stats()
    }

    /// Give the transport back.
    pub fn release(self) -> T {
        self.bus.release()
    }

    fn mark(&mut self, span: PageSpan) {
        for page in span.pages {
            self.dirty.mark(page, span.columns.start, span.columns.end);
        }
    }
}

impl<T: I2cTransport> fmt::Write for Ssd1306<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Ssd1306::write_str(self, s);
        Ok(())
    }
}
