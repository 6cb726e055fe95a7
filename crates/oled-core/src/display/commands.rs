//! SSD1306 command bytes and the fixed command sequences built from them.

use crate::gfx::framebuffer::{PAGES, WIDTH};

pub const SET_CONTRAST: u8 = 0x81;
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
pub const DISPLAY_ALL_ON: u8 = 0xA5;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERT_DISPLAY: u8 = 0xA7;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;

pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOM_DETECT: u8 = 0xDB;
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_MULTIPLEX: u8 = 0xA8;

/// Low nibble of the page-mode column start, OR'd with the nibble.
pub const SET_LOW_COLUMN: u8 = 0x00;
/// High nibble of the page-mode column start, OR'd with the nibble.
pub const SET_HIGH_COLUMN: u8 = 0x10;
/// Page-mode start page, OR'd with the page index.
pub const SET_START_PAGE: u8 = 0xB0;

pub const COLUMN_ADDR: u8 = 0x21;
pub const PAGE_ADDR: u8 = 0x22;
pub const SET_START_LINE: u8 = 0x40;
pub const MEMORY_MODE: u8 = 0x20;
pub const COM_SCAN_INC: u8 = 0xC0;
pub const COM_SCAN_DEC: u8 = 0xC8;
pub const SEG_REMAP: u8 = 0xA0;
pub const CHARGE_PUMP: u8 = 0x8D;

/// Horizontal addressing mode argument for [`MEMORY_MODE`].
pub const HORIZONTAL_ADDRESSING: u8 = 0x00;

/// Length of [`init_sequence`].
pub const INIT_SEQUENCE_LEN: usize = 25;

/// Bring-up commands for a 128x64 panel using the internal charge pump.
///
/// Each byte goes out as its own command transaction.
pub const fn init_sequence(contrast: u8) -> [u8; INIT_SEQUENCE_LEN] {
    [
        DISPLAY_OFF,
        SET_DISPLAY_CLOCK_DIV,
        0x80,
        SET_MULTIPLEX,
        (PAGES * 8 - 1) as u8,
        SET_DISPLAY_OFFSET,
        0x00,
        SET_START_LINE,
        CHARGE_PUMP,
        0x14,
        MEMORY_MODE,
        HORIZONTAL_ADDRESSING,
        SEG_REMAP | 0x01,
        COM_SCAN_DEC,
        SET_COM_PINS,
        0x12,
        SET_CONTRAST,
        contrast,
        SET_PRECHARGE,
        0xF1,
        SET_VCOM_DETECT,
        0x40,
        DISPLAY_ALL_ON_RESUME,
        NORMAL_DISPLAY,
        DISPLAY_ON,
    ]
}

/// Addressing window covering the whole panel.
pub const FULL_WINDOW: [u8; 6] = [
    COLUMN_ADDR,
    0,
    (WIDTH - 1) as u8,
    PAGE_ADDR,
    0,
    (PAGES - 1) as u8,
];

/// Point the controller's write address at `column` of `page`.
pub const fn page_cursor(page: u8, column: u8) -> [u8; 3] {
    [
        SET_LOW_COLUMN | (column & 0x0F),
        SET_HIGH_COLUMN | (column >> 4),
        SET_START_PAGE | page,
    ]
}
