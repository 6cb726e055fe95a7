pub mod bus;
pub mod commands;
pub mod config;
pub mod driver;

pub use bus::{Bus, BusStats};
pub use config::DisplayConfig;
pub use driver::Ssd1306;
