//! Per-panel settings.

/// Bus address of a module with SA0 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x3C;
/// Bus address of a module with SA0 tied high.
pub const ALTERNATE_ADDRESS: u8 = 0x3D;
/// Contrast written during bring-up.
pub const DEFAULT_CONTRAST: u8 = 0xCF;

/// Settings applied by [`Ssd1306`](super::Ssd1306).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// 7-bit bus address.
    pub address: u8,
    pub contrast: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            contrast: DEFAULT_CONTRAST,
        }
    }
}
