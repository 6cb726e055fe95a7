//! PC debug host for the SSD1306 driver.
//!
//! Runs the driver against an in-memory transport, draws the game's screens
//! frame by frame and reports the bus traffic each flush needed. The panel is
//! printed as text after every frame.

mod scene;
mod transport;

use clap::Parser;
use oled_core::display::config::{DEFAULT_ADDRESS, DEFAULT_CONTRAST};
use oled_core::gfx::WIDTH;
use oled_core::{BusStats, DisplayConfig, DrawError, Ssd1306};

use transport::RecordingTransport;

#[derive(Parser, Debug)]
#[command(name = "oled-pc", version, about = "Preview the SSD1306 driver on the host")]
struct Args {
    /// Text shown under the title banner.
    #[arg(long, default_value = "PRESS FIRE TO START")]
    message: String,

    /// Score shown on the playfield, in tens.
    #[arg(long, default_value_t = 0)]
    score: u16,

    /// Bus address, decimal or 0x-prefixed hex.
    #[arg(long, default_value_t = DEFAULT_ADDRESS, value_parser = parse_address)]
    address: u8,

    #[arg(long, default_value_t = DEFAULT_CONTRAST)]
    contrast: u8,

    /// Reject every Nth bus transaction.
    #[arg(long)]
    fail_every: Option<u64>,

    /// Do not print the panel after each frame.
    #[arg(long)]
    no_preview: bool,
}

fn parse_address(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    match parsed {
        Ok(address) if address < 0x80 => Ok(address),
        Ok(address) => Err(format!("{address:#04x} is not a 7-bit address")),
        Err(e) => Err(e.to_string()),
    }
}

/// Per-frame deltas; the driver's counters wrap, so these do too.
fn traffic(before: BusStats, after: BusStats) -> (u32, u32, u32) {
    (
        after.transactions.wrapping_sub(before.transactions),
        after.bytes.wrapping_sub(before.bytes),
        after.dropped.wrapping_sub(before.dropped),
    )
}

struct Host {
    display: Ssd1306<RecordingTransport>,
    preview: bool,
}

impl Host {
    /// Flush pending changes and report what it cost.
    fn frame(&mut self, name: &str, draw: impl FnOnce(&mut Ssd1306<RecordingTransport>) -> Result<(), DrawError>) {
        if let Err(e) = draw(&mut self.display) {
            log::error!("{name}: drawing failed: {e}");
        }
        let before = self.display.stats();
        self.display.update();
        let (transactions, bytes, dropped) = traffic(before, self.display.stats());
        log::info!("{name}: flushed {transactions} transactions, {bytes} bytes, {dropped} dropped");

        if self.preview {
            let mut out = String::new();
            let border = "-".repeat(WIDTH);
            if self.display.framebuffer().dump(&mut out).is_ok() {
                println!("{name}\n+{border}+");
                for line in out.lines() {
                    println!("|{line}|");
                }
                println!("+{border}+");
            }
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("oled-pc: debug host starting");

    let config = DisplayConfig {
        address: args.address,
        contrast: args.contrast,
    };
    let mut display = Ssd1306::new(RecordingTransport::new(args.fail_every), config);
    display.init(None);
    display.clear();
    let stats = display.stats();
    log::info!(
        "bring-up and clear: {} transactions, {} bytes",
        stats.transactions,
        stats.bytes
    );

    let mut host = Host {
        display,
        preview: !args.no_preview,
    };
    let message = args.message.to_ascii_uppercase();
    host.frame("title", |d| scene::draw_title(d, &message));
    host.display.clear();
    host.frame("playfield", |d| scene::draw_playfield(d, args.score));
    host.frame("hit", |d| scene::draw_hit(d, 5, 2));
    host.frame("idle", |_| Ok(()));

    let stats = host.display.stats();
    let transport = host.display.release();
    log::info!(
        "done: {} transactions recorded ({} bytes), {} rejected",
        transport.records().len(),
        stats.bytes,
        transport.rejected()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_decimal_addresses() {
        assert_eq!(parse_address("0x3C"), Ok(0x3C));
        assert_eq!(parse_address("61"), Ok(0x3D));
        assert!(parse_address("0x80").is_err());
        assert!(parse_address("oled").is_err());
    }

    #[test]
    fn scenes_fit_the_panel() {
        let mut display = Ssd1306::new(RecordingTransport::new(None), DisplayConfig::default());
        scene::draw_title(&mut display, "PRESS FIRE TO START").unwrap();
        display.clear();
        scene::draw_playfield(&mut display, 1234).unwrap();
        scene::draw_hit(&mut display, 10, 4).unwrap();
        display.update();
        assert_eq!(display.stats().dropped, 0);
        assert!(display.dirty().is_clean());
    }

    #[test]
    fn idle_frame_sends_nothing() {
        let mut display = Ssd1306::new(RecordingTransport::new(None), DisplayConfig::default());
        scene::draw_playfield(&mut display, 0).unwrap();
        display.update();
        let before = display.stats();
        display.update();
        assert_eq!(traffic(before, display.stats()), (0, 0, 0));
    }

    #[test]
    fn traffic_survives_counter_wrap() {
        let before = BusStats {
            transactions: u32::MAX,
            bytes: u32::MAX - 9,
            dropped: 4,
        };
        let after = BusStats {
            transactions: 2,
            bytes: 22,
            dropped: 4,
        };
        assert_eq!(traffic(before, after), (3, 32, 0));
    }
}
