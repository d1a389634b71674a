#![forbid(unsafe_code)]

//! Viewport panning over translated braille content.
//!
//! A refreshable braille display shows a narrow window into a line of
//! translated cells. [`PanStrategy`] owns that window: it word-wraps the
//! translated buffer so words are not cut at row boundaries, keeps the
//! cell-to-text correspondence intact across the rewrap, pages the viewport
//! with `next`/`previous`, and overlays cursor dots on the slice handed to
//! the display driver.
//!
//! Translation itself is out of scope: the host supplies the text, the
//! translated cells (one byte per cell, `0` is the blank cell), and a map
//! from each cell to the char offset it was translated from.
//!
//! # Example
//! ```
//! use braille_pan::{PanMode, PanStrategy};
//!
//! // "hi there" translated one cell per character; 0 is the blank cell.
//! let cells = vec![0x13, 0x0a, 0, 0x1e, 0x13, 0x11, 0x17, 0x11];
//! let map: Vec<usize> = (0..cells.len()).collect();
//!
//! let mut pan = PanStrategy::new();
//! pan.set_display_size(1, 6);
//! pan.set_content("hi there", cells, map, 0);
//! pan.set_mode(PanMode::WordWrap);
//!
//! // "hi" fits on the first row; "there" is pushed down whole.
//! assert_eq!(pan.current_text_viewport(), "hi ");
//! assert!(pan.next());
//! assert_eq!(pan.current_text_viewport(), "there");
//! assert!(!pan.next());
//! ```

pub mod display;
pub mod pan;

pub use display::{BrailleDots, CursorSpan, DisplaySize, Viewport};
pub use pan::{PanMode, PanStrategy, SliceOffsets};
