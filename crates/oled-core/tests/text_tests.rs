//! Text rendering: glyph placement, advance widths, wrapping and numbers.

mod common;

use std::fmt::Write as _;

use common::make_driver;
use oled_core::assets::{glyph, Sprite};
use oled_core::gfx::PAGES;

fn pages_of<T: oled_hal::I2cTransport>(display: &oled_core::Ssd1306<T>) -> Vec<[u8; 128]> {
    (0..PAGES)
        .map(|page| *display.framebuffer().page(page))
        .collect()
}

fn glyph_at(c: u8) -> Sprite<'static> {
    glyph(c).unwrap_or_else(|| panic!("no glyph for {:?}", c as char))
}

#[test]
fn character_widths() {
    let (display, _) = make_driver();
    assert_eq!(display.char_width(b'M'), 6);
    assert_eq!(display.char_width(b'W'), 6);
    assert_eq!(display.char_width(b'N'), 5);
    assert_eq!(display.char_width(b'?'), 5);
    assert_eq!(display.char_width(b'A'), 4);
}

#[test]
fn glyphs_drawn_at_cursor_with_advance() {
    let (mut text, _) = make_driver();
    text.set_cursor(10, 20);
    assert_eq!(text.write_str("MAN"), 3);
    assert_eq!((text.cursor().x, text.cursor().y), (10 + 6 + 4 + 5, 20));

    let (mut sprites, _) = make_driver();
    sprites.draw_bitmap(&glyph_at(b'M'), 10, 20).unwrap();
    sprites.draw_bitmap(&glyph_at(b'A'), 16, 20).unwrap();
    sprites.draw_bitmap(&glyph_at(b'N'), 20, 20).unwrap();
    assert_eq!(pages_of(&text), pages_of(&sprites));
}

#[test]
fn blanks_and_control_bytes_only_advance() {
    let (mut display, _) = make_driver();
    assert_eq!(display.write(b' '), 1);
    assert_eq!(display.write(b'\n'), 1);
    assert_eq!(display.write(0xFF), 1);
    assert_eq!(display.write(b'#'), 1);
    assert_eq!(display.cursor().x, 16);
    assert!(display.dirty().is_clean());
}

#[test]
fn lowercase_renders_as_uppercase() {
    let (mut lower, _) = make_driver();
    lower.write_str("score");
    let (mut upper, _) = make_driver();
    upper.write_str("SCORE");
    assert_eq!(pages_of(&lower), pages_of(&upper));
}

#[test]
fn set_cursor_clamps() {
    let (mut display, _) = make_driver();
    display.set_cursor(255, 100);
    assert_eq!((display.cursor().x, display.cursor().y), (127, 63));
}

#[test]
fn overflowing_row_wraps_to_next_text_row() {
    let (mut display, _) = make_driver();
    display.set_cursor(122, 0);
    display.write_str("AB");
    // B at 126 does not fit and is skipped; the cursor wraps to x = 130 % 128.
    assert_eq!((display.cursor().x, display.cursor().y), (2, 6));
    display.write(b'C');

    let (mut expected, _) = make_driver();
    expected.draw_bitmap(&glyph_at(b'A'), 122, 0).unwrap();
    expected.draw_bitmap(&glyph_at(b'C'), 2, 6).unwrap();
    assert_eq!(pages_of(&display), pages_of(&expected));
}

#[test]
fn wide_overshoot_keeps_remainder() {
    let (mut display, _) = make_driver();
    display.set_cursor(127, 12);
    display.write(b'W');
    assert_eq!((display.cursor().x, display.cursor().y), (5, 18));
}

#[test]
fn wrap_past_bottom_returns_to_top() {
    let (mut display, _) = make_driver();
    display.set_cursor(126, 62);
    display.write(b'A');
    assert_eq!((display.cursor().x, display.cursor().y), (2, 4));
}

#[test]
fn cursor_on_right_edge_drops_characters() {
    let (mut display, _) = make_driver();
    display.set_cursor(124, 0);
    assert_eq!(display.write(b'A'), 1);
    assert_eq!(display.cursor().x, 128);
    assert_eq!(display.write(b'B'), 0);
    assert_eq!(display.cursor().x, 128);

    display.set_cursor(0, 6);
    assert_eq!(display.write(b'B'), 1);
    assert!(display.read_pixel(0, 6));
}

#[test]
fn write_int_formats_decimal() {
    for (value, digits) in [(0u16, "0"), (7, "7"), (42, "42"), (1234, "1234"), (u16::MAX, "65535")] {
        let (mut number, _) = make_driver();
        number.write_int(value);
        let (mut text, _) = make_driver();
        text.write_str(digits);
        assert_eq!(pages_of(&number), pages_of(&text), "value {value}");
        assert_eq!(number.cursor(), text.cursor());
    }
}

#[test]
fn write_score_pads_and_appends_zero() {
    for (value, digits) in [(7u16, "00070"), (0, "00000"), (85, "00850"), (999, "09990"), (1500, "15000"), (12345, "123450")] {
        let (mut score, _) = make_driver();
        score.write_score(value);
        let (mut text, _) = make_driver();
        text.write_str(digits);
        assert_eq!(pages_of(&score), pages_of(&text), "score {value}");
        assert_eq!(score.cursor().x, 4 * digits.len() as u8);
    }
}

#[test]
fn fmt_write_matches_write_str() {
    let (mut formatted, _) = make_driver();
    write!(formatted, "HI {}", 42).unwrap();
    let (mut text, _) = make_driver();
    text.write_str("HI 42");
    assert_eq!(pages_of(&formatted), pages_of(&text));
}
