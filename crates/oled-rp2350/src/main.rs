//! RP2350 firmware for the SSD1306 OLED.
//!
//! Brings the panel up on I2C0, draws the playfield frame and then marches a
//! row of invaders across the screen, flushing only the touched columns.

#![no_std]
#![no_main]

mod transport;

use defmt_rtt as _;
use panic_probe as _;
use rp235x_hal as hal;

use embedded_hal::delay::DelayNs;
use hal::clocks::Clock;
use hal::fugit::RateExtU32;
use hal::gpio::{FunctionI2C, Pin, PullUp};
use hal::sio::Sio;

use oled_core::assets::bitmaps::{ALIEN10_A, ALIEN10_B, BASE, BOX_BOTTOM, BOX_TOP};
use oled_core::gfx::WIDTH;
use oled_core::{DisplayConfig, Ssd1306};

use transport::{Rp2350Reset, Rp2350Transport};

/// Boot ROM image definition for Cortex-M33 secure mode.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: hal::block::ImageDef = hal::block::ImageDef::secure_exe();

/// External crystal frequency (Pico 2 standard).
const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Frame period of the march animation.
const FRAME_MS: u32 = 120;

/// Invaders in the marching row and the gap between them.
const ROW_LEN: u8 = 6;
const ROW_PITCH: u8 = 12;
const ROW_Y: u8 = 20;
const ALIEN_WIDTH: u8 = 8;

#[hal::entry]
fn main() -> ! {
    defmt::info!("oled-rp2350: starting");

    let mut pac = hal::pac::Peripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);

    // Initialize clocks from 12 MHz crystal.
    let clocks = hal::clocks::init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut timer = hal::Timer::new_timer0(pac.TIMER0, &mut pac.RESETS, &clocks);

    // --- I2C0 for the OLED (GP4 = SDA, GP5 = SCL) ---
    let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio4.reconfigure();
    let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio5.reconfigure();
    let i2c = hal::I2C::i2c0(
        pac.I2C0,
        sda,
        scl,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );

    // Active-low reset on GP6.
    let reset_pin = pins.gpio6.into_push_pull_output();

    let config = DisplayConfig::default();
    defmt::info!(
        "OLED at 0x{:02x}, contrast 0x{:02x}, sys clock {} Hz",
        config.address,
        config.contrast,
        clocks.system_clock.freq().to_Hz()
    );

    let mut display = Ssd1306::new(Rp2350Transport::new(i2c), config);
    {
        let mut reset = Rp2350Reset::new(reset_pin, &mut timer);
        display.init(Some(&mut reset));
    }
    display.clear();

    if let Err(e) = draw_frame(&mut display) {
        defmt::warn!("static frame skipped: {}", defmt::Display2Format(&e));
    }
    display.update();

    let stats = display.stats();
    defmt::info!(
        "bring-up done: {} transactions, {} bytes, {} dropped",
        stats.transactions,
        stats.bytes,
        stats.dropped
    );

    // --- March loop ---
    let span = ROW_PITCH * (ROW_LEN - 1) + ALIEN_WIDTH;
    let mut x: u8 = 0;
    let mut step: i8 = 2;
    let mut frame: u16 = 0;

    loop {
        let sprite = if frame % 2 == 0 { &ALIEN10_A } else { &ALIEN10_B };

        if let Err(e) = display.clear_rect(x, ROW_Y, span, 5) {
            defmt::warn!("row erase skipped: {}", defmt::Display2Format(&e));
        }
        x = x.saturating_add_signed(step);
        if x == 0 || x + span >= WIDTH as u8 {
            step = -step;
        }
        for i in 0..ROW_LEN {
            if let Err(e) = display.draw_bitmap(sprite, x + i * ROW_PITCH, ROW_Y) {
                defmt::warn!("invader {} skipped: {}", i, defmt::Display2Format(&e));
            }
        }

        display.set_cursor(96, 0);
        display.write_score(frame);
        display.update();

        frame = frame.wrapping_add(1);
        if frame % 256 == 0 {
            let stats = display.stats();
            defmt::debug!(
                "frame {}: {} transactions, {} dropped",
                frame,
                stats.transactions,
                stats.dropped
            );
        }

        timer.delay_ms(FRAME_MS);
    }
}

/// Border, base and score label drawn once after bring-up.
fn draw_frame<T: oled_hal::I2cTransport>(
    display: &mut Ssd1306<T>,
) -> Result<(), oled_core::DrawError> {
    let edge = BOX_TOP.width();
    let mut x = 0;
    while x + edge <= WIDTH as u8 {
        display.draw_bitmap(&BOX_TOP, x, 8)?;
        display.draw_bitmap(&BOX_BOTTOM, x, 56)?;
        x += edge;
    }
    display.draw_bitmap(&BASE, 60, 50)?;
    display.set_cursor(0, 0);
    display.write_str("SCORE");
    Ok(())
}

/// Program metadata for `picotool info`.
#[link_section = ".bi_entries"]
#[used]
pub static PICOTOOL_ENTRIES: [hal::binary_info::EntryAddr; 5] = [
    hal::binary_info::rp_cargo_bin_name!(),
    hal::binary_info::rp_cargo_version!(),
    hal::binary_info::rp_program_description!(c"SSD1306 OLED invaders demo"),
    hal::binary_info::rp_cargo_homepage_url!(),
    hal::binary_info::rp_program_build_attribute!(),
];
