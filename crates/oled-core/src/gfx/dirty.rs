//! Per-page record of the columns modified since the last flush.

use core::ops::{Range, RangeInclusive};

use super::framebuffer::{PAGES, WIDTH};

/// Inclusive column span of one page awaiting transmission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtySpan {
    dirty: bool,
    min_column: u8,
    max_column: u8,
}

impl DirtySpan {
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Grow the span to cover `columns`. Empty ranges leave it unchanged.
    pub fn include(&mut self, columns: Range<u8>) {
        if columns.is_empty() {
            return;
        }
        let last = columns.end - 1;
        if self.dirty {
            self.min_column = self.min_column.min(columns.start);
            self.max_column = self.max_column.max(last);
        } else {
            *self = Self {
                dirty: true,
                min_column: columns.start,
                max_column: last,
            };
        }
    }

    /// The pending columns, if any.
    pub fn columns(&self) -> Option<RangeInclusive<usize>> {
        self.dirty
            .then(|| self.min_column as usize..=self.max_column as usize)
    }
}

/// One [`DirtySpan`] per page.
///
/// Spans only ever grow between flushes, even if later drawing undoes an
/// earlier change; a flush may resend columns that ended up unchanged.
#[derive(Clone, Debug, Default)]
pub struct DirtyTracker {
    spans: [DirtySpan; PAGES],
}

impl DirtyTracker {
    pub const fn new() -> Self {
        Self {
            spans: [DirtySpan {
                dirty: false,
                min_column: 0,
                max_column: 0,
            }; PAGES],
        }
    }

    /// Union `[x1, x2)` into the span of `page`. Columns past the panel are
    /// cut off and out-of-range pages are ignored.
    pub fn mark(&mut self, page: usize, x1: u8, x2: u8) {
        let x2 = x2.min(WIDTH as u8);
        if let Some(span) = self.spans.get_mut(page) {
            span.include(x1..x2);
        }
    }

    pub fn span(&self, page: usize) -> DirtySpan {
        self.spans[page]
    }

    /// Remove and return the span of `page`.
    pub fn take(&mut self, page: usize) -> DirtySpan {
        core::mem::take(&mut self.spans[page])
    }

    pub fn is_clean(&self) -> bool {
        self.spans.iter().all(|span| !span.dirty)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
