//! Platform-agnostic driver for a 128x64 SSD1306 OLED on a shared I2C bus.
//!
//! Drawing happens in a local framebuffer; [`Ssd1306::update`] transmits only
//! the columns that changed since the previous update.

#![cfg_attr(not(test), no_std)]

pub mod assets;
pub mod display;
pub mod gfx;

pub use assets::Sprite;
pub use display::{BusStats, DisplayConfig, Ssd1306};
pub use gfx::DrawError;
