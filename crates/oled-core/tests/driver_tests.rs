//! Integration tests for Ssd1306 using a mock transport.
//!
//! Verifies the wire-level behaviour: bring-up commands, the full-panel clear
//! fast path, and that update() sends only the dirty spans.

mod common;

use std::cell::RefCell;

use common::{is_command, make_driver, unframe, MockTransport};
use oled_core::assets::bitmaps::{ALIEN10_A, BASE, LETTER_A, LETTER_W};
use oled_core::display::commands::init_sequence;
use oled_core::gfx::{HEIGHT, PAGES, WIDTH};
use oled_core::{DisplayConfig, DrawError, Ssd1306, Sprite};
use oled_hal::ResetControl;

#[derive(Debug, PartialEq)]
enum ResetEvent {
    Level(bool),
    Delay(u32),
}

#[derive(Default)]
struct MockReset {
    events: RefCell<Vec<ResetEvent>>,
}

impl ResetControl for MockReset {
    fn set_reset(&mut self, asserted: bool) {
        self.events.borrow_mut().push(ResetEvent::Level(asserted));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.borrow_mut().push(ResetEvent::Delay(ms));
    }
}

/// Splits a flush into (page cursor commands, data payload) per page.
fn flushed_pages(payloads: &[Vec<u8>]) -> Vec<([u8; 3], Vec<u8>)> {
    let mut pages = Vec::new();
    let mut i = 0;
    while i < payloads.len() {
        assert!(is_command(&payloads[i]), "expected page cursor at {i}");
        let cursor = [payloads[i][1], payloads[i + 1][1], payloads[i + 2][1]];
        i += 3;
        let start = i;
        while i < payloads.len() && !is_command(&payloads[i]) {
            i += 1;
        }
        pages.push((cursor, unframe(&payloads[start..i])));
    }
    pages
}

// ============================================================================
// Bring-up
// ============================================================================

mod init_tests {
    use super::*;

    #[test]
    fn sends_each_command_as_own_transaction() {
        let (mut display, transport) = make_driver();
        display.init(None);

        let txs = transport.transactions();
        let expected = init_sequence(0xCF);
        assert_eq!(txs.len(), expected.len());
        for ((address, bytes), command) in txs.iter().zip(expected) {
            assert_eq!(*address, 0x3C);
            assert_eq!(bytes, &vec![0x00, command]);
        }
    }

    #[test]
    fn starts_with_display_off_and_ends_with_display_on() {
        let (mut display, transport) = make_driver();
        display.init(None);
        let payloads = transport.payloads();
        assert_eq!(payloads.first(), Some(&vec![0x00, 0xAE]));
        assert_eq!(payloads.last(), Some(&vec![0x00, 0xAF]));
    }

    #[test]
    fn pulses_reset_line_before_commands() {
        let (mut display, transport) = make_driver();
        let mut reset = MockReset::default();
        display.init(Some(&mut reset));

        assert_eq!(
            reset.events.into_inner(),
            vec![
                ResetEvent::Level(false),
                ResetEvent::Delay(1),
                ResetEvent::Level(true),
                ResetEvent::Delay(10),
                ResetEvent::Level(false),
            ]
        );
        assert_eq!(transport.transactions().len(), init_sequence(0).len());
    }

    #[test]
    fn uses_configured_address_and_contrast() {
        let transport = MockTransport::new();
        let config = DisplayConfig {
            address: 0x3D,
            contrast: 0x7F,
        };
        let mut display = Ssd1306::new(transport.clone(), config);
        display.init(None);

        let txs = transport.transactions();
        assert!(txs.iter().all(|(address, _)| *address == 0x3D));
        let contrast_at = txs
            .iter()
            .position(|(_, bytes)| bytes[1] == 0x81)
            .expect("contrast command should be sent");
        assert_eq!(txs[contrast_at + 1].1, vec![0x00, 0x7F]);
    }

    #[test]
    fn homes_cursor() {
        let (mut display, _) = make_driver();
        display.set_cursor(40, 20);
        display.init(None);
        assert_eq!((display.cursor().x, display.cursor().y), (0, 0));
    }
}

// ============================================================================
// Full clear
// ============================================================================

mod clear_tests {
    use super::*;

    const WINDOW: [u8; 6] = [0x21, 0x00, 0x7F, 0x22, 0x00, 0x07];

    #[test]
    fn streams_zeroes_over_whole_panel() {
        let (mut display, transport) = make_driver();
        display.clear();

        let payloads = transport.payloads();
        assert_eq!(payloads.len(), 6 + 64 + 6);

        let window: Vec<u8> = payloads[..6].iter().map(|tx| tx[1]).collect();
        assert_eq!(window, WINDOW);
        let restored: Vec<u8> = payloads[70..].iter().map(|tx| tx[1]).collect();
        assert_eq!(restored, WINDOW);

        let mut expected_chunk = Vec::new();
        for _ in 0..15 {
            expected_chunk.extend_from_slice(&[0xC0, 0x00]);
        }
        expected_chunk.extend_from_slice(&[0x40, 0x00]);
        for tx in &payloads[6..70] {
            assert_eq!(tx, &expected_chunk);
        }
    }

    #[test]
    fn resets_pixels_spans_and_cursor() {
        let (mut display, _) = make_driver();
        display.draw_bitmap(&BASE, 60, 55).unwrap();
        display.write_str("HELLO");
        display.clear();

        for y in 0..HEIGHT as u8 {
            for x in 0..WIDTH as u8 {
                assert!(!display.read_pixel(x, y), "pixel ({x}, {y}) still set");
            }
        }
        assert!(display.dirty().is_clean());
        assert_eq!((display.cursor().x, display.cursor().y), (0, 0));
    }

    #[test]
    fn update_after_clear_sends_nothing() {
        let (mut display, transport) = make_driver();
        display.draw_bitmap(&LETTER_A, 0, 0).unwrap();
        display.clear();
        transport.reset();
        display.update();
        assert!(transport.transactions().is_empty());
    }
}

// ============================================================================
// Dirty spans and update
// ============================================================================

mod update_tests {
    use super::*;

    #[test]
    fn sends_only_dirty_columns() {
        let (mut display, transport) = make_driver();
        display.draw_bitmap(&LETTER_A, 10, 0).unwrap();
        display.update();

        let pages = flushed_pages(&transport.payloads());
        assert_eq!(pages.len(), 1);
        let (cursor, data) = &pages[0];
        assert_eq!(cursor, &[0x0A, 0x10, 0xB0]);
        assert_eq!(data, &display.framebuffer().page(0)[10..13].to_vec());
        assert_eq!(data, &vec![0b0001_1110, 0b0000_0101, 0b0001_1110]);
    }

    #[test]
    fn second_update_sends_nothing() {
        let (mut display, transport) = make_driver();
        display.draw_bitmap(&ALIEN10_A, 30, 20).unwrap();
        display.update();
        transport.reset();
        display.update();
        assert!(transport.transactions().is_empty());
    }

    #[test]
    fn straddling_sprite_flushes_both_pages() {
        let (mut display, transport) = make_driver();
        // Row 13 is bit 5 of page 1: rows 13..18 spill into page 2.
        display.draw_bitmap(&LETTER_W, 70, 13).unwrap();
        for page in [1, 2] {
            assert_eq!(display.dirty().span(page).columns(), Some(70..=74));
        }
        display.update();

        let pages = flushed_pages(&transport.payloads());
        let cursors: Vec<[u8; 3]> = pages.iter().map(|(cursor, _)| *cursor).collect();
        assert_eq!(cursors, [[0x06, 0x14, 0xB1], [0x06, 0x14, 0xB2]]);
        for (page, (_, data)) in [1, 2].into_iter().zip(&pages) {
            assert_eq!(data, &display.framebuffer().page(page)[70..75].to_vec());
        }
    }

    #[test]
    fn sprite_within_page_dirties_one_page() {
        let (mut display, _) = make_driver();
        display.draw_bitmap(&LETTER_A, 0, 11).unwrap();
        assert!(display.dirty().span(1).is_dirty());
        assert!(!display.dirty().span(2).is_dirty());
        assert!(!display.dirty().span(0).is_dirty());
    }

    #[test]
    fn spans_on_a_page_are_merged() {
        let (mut display, transport) = make_driver();
        display.draw_bitmap(&LETTER_A, 10, 40).unwrap();
        display.draw_bitmap(&LETTER_A, 50, 40).unwrap();
        display.update();

        let pages = flushed_pages(&transport.payloads());
        assert_eq!(pages.len(), 1);
        let (cursor, data) = &pages[0];
        assert_eq!(cursor, &[0x0A, 0x10, 0xB5]);
        assert_eq!(data.len(), 43);
        assert_eq!(data, &display.framebuffer().page(5)[10..53].to_vec());

        // 43 pairs: 16 + 16 + 11.
        let sizes: Vec<usize> = transport.payloads()[3..].iter().map(Vec::len).collect();
        assert_eq!(sizes, [32, 32, 22]);
    }

    #[test]
    fn cleared_area_is_still_sent() {
        let (mut display, transport) = make_driver();
        display.draw_bitmap(&BASE, 20, 58).unwrap();
        display.clear_rect(20, 58, 9, 5).unwrap();
        display.update();

        let pages = flushed_pages(&transport.payloads());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].1, vec![0; 9]);
    }

    #[test]
    fn clear_rect_dirties_every_touched_page() {
        let (mut display, _) = make_driver();
        display.clear_rect(4, 6, 10, 20).unwrap();
        for page in 0..PAGES {
            let expected = (0..=3).contains(&page).then_some(4..=13);
            assert_eq!(display.dirty().span(page).columns(), expected, "page {page}");
        }
    }

    #[test]
    fn clear_pixel_at_column_zero_is_sent() {
        let (mut display, transport) = make_driver();
        display.draw_bitmap(&LETTER_A, 0, 0).unwrap();
        display.update();
        transport.reset();

        display.clear_pixel(0, 1);
        assert!(!display.read_pixel(0, 1));
        display.update();

        let pages = flushed_pages(&transport.payloads());
        assert_eq!(pages, vec![([0x00, 0x10, 0xB0], vec![0b0001_1100])]);
    }

    #[test]
    fn set_update_area_resends_columns() {
        let (mut display, transport) = make_driver();
        display.set_update_area(7, 120, 128);
        display.update();
        let pages = flushed_pages(&transport.payloads());
        assert_eq!(pages, vec![([0x08, 0x17, 0xB7], vec![0; 8])]);
    }
}

// ============================================================================
// Preconditions and transport failures
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn sprite_past_right_edge_is_rejected() {
        let (mut display, _) = make_driver();
        let err = display.draw_bitmap(&BASE, 120, 0).unwrap_err();
        assert_eq!(
            err,
            DrawError::OutOfBounds {
                x: 120,
                y: 0,
                width: 9,
                height: 5
            }
        );
        assert!(display.dirty().is_clean());
        assert!(display.framebuffer().page(0).iter().all(|&cell| cell == 0));
        assert!(display.framebuffer().page(1).iter().all(|&cell| cell == 0));
    }

    #[test]
    fn sprite_past_bottom_is_rejected() {
        let (mut display, _) = make_driver();
        assert!(display.draw_bitmap(&LETTER_A, 0, 60).is_err());
        assert!(display.draw_bitmap(&LETTER_A, 0, 59).is_ok());
    }

    #[test]
    fn rect_past_panel_is_rejected() {
        let (mut display, _) = make_driver();
        display.draw_bitmap(&BASE, 100, 59).unwrap();
        display.update();
        assert!(display.clear_rect(100, 59, 29, 5).is_err());
        assert!(display.clear_rect(100, 59, 9, 6).is_err());
        assert!(display.read_pixel(104, 63));
        assert!(display.dirty().is_clean());
    }

    #[test]
    fn pixel_ops_outside_panel_do_nothing() {
        let (mut display, _) = make_driver();
        assert!(!display.read_pixel(128, 0));
        assert!(!display.read_pixel(0, 64));
        display.clear_pixel(200, 200);
        assert!(display.dirty().is_clean());
    }

    #[test]
    fn sprite_wider_than_u8_is_rejected() {
        let (mut display, _) = make_driver();
        let mut data = vec![0x01u8; 299];
        data.push(0x81);
        let sprite = Sprite::new(&data);
        let err = display.draw_bitmap(&sprite, 0, 0).unwrap_err();
        assert_eq!(
            err,
            DrawError::OutOfBounds {
                x: 0,
                y: 0,
                width: u8::MAX,
                height: 5
            }
        );
        assert!(display.dirty().is_clean());
        assert!(display.framebuffer().page(0).iter().all(|&cell| cell == 0));
    }

    #[test]
    fn custom_sprite_fits_exactly_at_edge() {
        let (mut display, _) = make_driver();
        let sprite = Sprite::new(&[0x01, 0x81]);
        assert!(display.draw_bitmap(&sprite, 126, 59).is_ok());
        assert!(display.read_pixel(127, 59));
    }

    #[test]
    fn transport_failures_do_not_stop_the_driver() {
        let transport = MockTransport::failing_every(3);
        let mut display = Ssd1306::new(transport.clone(), DisplayConfig::default());
        display.init(None);
        display.draw_bitmap(&LETTER_A, 0, 0).unwrap();
        display.update();

        let stats = display.stats();
        assert_eq!(stats.transactions + stats.dropped, 25 + 3 + 1);
        assert_eq!(stats.dropped, 9);
        assert!(display.dirty().is_clean());
    }
}

// ============================================================================
// Raw transfers
// ============================================================================

#[test]
fn raw_command_and_data_framing() {
    let (mut display, transport) = make_driver();
    display.send_command(0xA7);
    display.send_data(0x3C);
    assert_eq!(transport.payloads(), vec![vec![0x00, 0xA7], vec![0x40, 0x3C]]);
}

#[test]
fn release_returns_transport() {
    let (mut display, _) = make_driver();
    display.send_command(0xAF);
    let transport = display.release();
    assert_eq!(transport.transactions().len(), 1);
}
