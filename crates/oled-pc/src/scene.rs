//! Demo screens drawn by the debug host, laid out like the game's own.

use oled_core::assets::bitmaps::*;
use oled_core::assets::{char_width, Sprite};
use oled_core::gfx::WIDTH;
use oled_core::{DrawError, Ssd1306};
use oled_hal::I2cTransport;

/// Alien formation: 11 columns, 10 pixels apart.
const FORMATION_COLUMNS: u8 = 11;
const FORMATION_SPACING: u8 = 10;
const FORMATION_LEFT: u8 = 8;
const FORMATION_TOP: u8 = 8;
const FORMATION_ROW_HEIGHT: u8 = 6;

const DEFENCE_TOP: u8 = 46;
const DEFENCE_LEFT: [u8; 4] = [14, 44, 74, 104];
const BASE_TOP: u8 = 58;

/// Pixel width of `text` in the game font.
pub fn text_width(text: &str) -> u8 {
    text.bytes().map(|c| char_width(c) as u32).sum::<u32>().min(u8::MAX as u32) as u8
}

fn centred(width: u8) -> u8 {
    (WIDTH as u8).saturating_sub(width) / 2
}

/// The title banner with `message` centred below it.
pub fn draw_title<T: I2cTransport>(display: &mut Ssd1306<T>, message: &str) -> Result<(), DrawError> {
    for (row, sprite) in TITLE.iter().enumerate() {
        display.draw_bitmap(sprite, centred(sprite.width()), row as u8 * 5)?;
    }
    display.set_cursor(centred(text_width(message)), BASE_TOP);
    display.write_str(message);
    Ok(())
}

/// Score line, alien formation, defences and the player's base.
pub fn draw_playfield<T: I2cTransport>(display: &mut Ssd1306<T>, score: u16) -> Result<(), DrawError> {
    display.set_cursor(0, 0);
    display.write_str("SCORE ");
    display.write_score(score);
    display.set_cursor(100, 0);
    display.write(b'<');
    display.write_int(3);

    let rows: [Sprite<'static>; 5] = [ALIEN30_A, ALIEN20_A, ALIEN20_B, ALIEN10_A, ALIEN10_B];
    for (row, sprite) in rows.iter().enumerate() {
        let y = FORMATION_TOP + row as u8 * FORMATION_ROW_HEIGHT;
        for column in 0..FORMATION_COLUMNS {
            let x = FORMATION_LEFT + column * FORMATION_SPACING;
            display.draw_bitmap(sprite, x, y)?;
        }
    }

    for x in DEFENCE_LEFT {
        display.draw_bitmap(&DEFENCE, x, DEFENCE_TOP)?;
    }
    display.draw_bitmap(&BASE, centred(BASE.width()), BASE_TOP)?;
    Ok(())
}

/// Replace the alien at formation `column`/`row` with an explosion, and chip
/// the first defence where a bomb landed.
pub fn draw_hit<T: I2cTransport>(display: &mut Ssd1306<T>, column: u8, row: u8) -> Result<(), DrawError> {
    let x = FORMATION_LEFT + column * FORMATION_SPACING;
    let y = FORMATION_TOP + row * FORMATION_ROW_HEIGHT;
    display.clear_rect(x, y, FORMATION_SPACING - 2, 5)?;
    display.draw_bitmap(&EXPLOSION, x, y)?;

    let impact_x = DEFENCE_LEFT[0] + 6;
    for y in DEFENCE_TOP..DEFENCE_TOP + 3 {
        for x in impact_x..impact_x + 2 {
            if display.read_pixel(x, y) {
                display.clear_pixel(x, y);
            }
        }
    }
    Ok(())
}
