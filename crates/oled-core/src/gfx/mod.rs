//! Drawing state: the framebuffer, its dirty spans and the text cursor.

pub mod dirty;
pub mod framebuffer;
pub mod text;

pub use dirty::{DirtySpan, DirtyTracker};
pub use framebuffer::{DrawError, Framebuffer, PageSpan, HEIGHT, PAGES, WIDTH};
pub use text::Cursor;
