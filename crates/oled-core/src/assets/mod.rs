//! Bitmap assets: the sprite table, the sprite descriptor and the font map.

pub mod bitmaps;
pub mod font;
pub mod sprite;

pub use font::{char_width, glyph};
pub use sprite::{Sprite, SPRITE_HEIGHT};
