#![forbid(unsafe_code)]

//! Display geometry, cursor spans, and braille dot masks.

use bitflags::bitflags;

bitflags! {
    /// Dot bits of an 8-dot braille cell, one bit per raised dot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BrailleDots: u8 {
        /// Dot 1 (top left).
        const DOT1 = 0x01;
        /// Dot 2 (middle left).
        const DOT2 = 0x02;
        /// Dot 3 (lower left).
        const DOT3 = 0x04;
        /// Dot 4 (top right).
        const DOT4 = 0x08;
        /// Dot 5 (middle right).
        const DOT5 = 0x10;
        /// Dot 6 (lower right).
        const DOT6 = 0x20;
        /// Dot 7 (bottom left, 8-dot extension).
        const DOT7 = 0x40;
        /// Dot 8 (bottom right, 8-dot extension).
        const DOT8 = 0x80;
        /// Underline pattern overlaid on cells covered by the cursor.
        const CURSOR = Self::DOT7.bits() | Self::DOT8.bits();
    }
}

/// Dimensions of a physical or simulated braille display, in cells.
///
/// A zero in either axis means no display is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    /// Number of display rows.
    pub rows: usize,
    /// Number of cells per row.
    pub columns: usize,
}

impl DisplaySize {
    /// Create a display size.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Total cell count across all rows.
    #[must_use]
    pub const fn cells(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for DisplaySize {
    /// The classic single-line forty-cell display.
    fn default() -> Self {
        Self {
            rows: 1,
            columns: 40,
        }
    }
}

/// Inclusive row range of the content currently on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First content row on the display.
    pub first_row: usize,
    /// Last content row on the display, inclusive.
    pub last_row: usize,
}

impl Viewport {
    /// Create a viewport covering `first_row..=last_row`.
    #[must_use]
    pub const fn new(first_row: usize, last_row: usize) -> Self {
        Self {
            first_row,
            last_row,
        }
    }

    /// Number of rows covered.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.last_row - self.first_row + 1
    }
}

/// Half-open `[start, end)` cell span of the cursor, in fixed-buffer
/// offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSpan {
    /// First cell under the cursor.
    pub start: usize,
    /// One past the last cell under the cursor.
    pub end: usize,
}

impl CursorSpan {
    /// Create a cursor span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}
