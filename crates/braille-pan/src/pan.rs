#![forbid(unsafe_code)]

//! Stateful panning of a braille display within a line of content.
//!
//! [`PanStrategy`] keeps the translated cell buffer as delivered (the fixed
//! buffer) and a derived word-wrapped copy, each with a cell-to-text index
//! map, plus a row viewport that pages through whichever buffer the current
//! [`PanMode`] selects. Content and geometry changes rebuild the wrapped
//! state wholesale; the viewport and the wrapped cursor projection are
//! recomputed as part of the rebuild and are never partially stale.
//!
//! Degenerate inputs degrade silently rather than erroring: a zero-sized
//! display pins the viewport, paging past either end reports `false`, and
//! empty content yields empty slices.

use crate::display::{BrailleDots, CursorSpan, DisplaySize, Viewport};

/// How viewport rows are cut from the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanMode {
    /// Rows are cut from the buffer exactly as translated.
    #[default]
    Fixed,
    /// Rows are cut from the word-wrapped copy, so a word is not split
    /// across a row boundary unless it is longer than a full row.
    WordWrap,
}

/// Offsets of the first viewport cell, for callers that slice the original
/// buffers alongside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceOffsets {
    /// Cell offset into the active braille buffer.
    pub braille: usize,
    /// Char offset into the text buffer.
    pub text: usize,
}

/// Pans a braille display viewport within a line of translated content.
#[derive(Debug, Clone, Default)]
pub struct PanStrategy {
    display_size: DisplaySize,
    viewport: Viewport,
    mode: PanMode,
    text: String,
    fixed_buffer: Vec<u8>,
    fixed_to_text: Vec<usize>,
    wrapped_buffer: Vec<u8>,
    wrapped_to_text: Vec<usize>,
    cursor: Option<CursorSpan>,
    wrapped_cursor: Option<CursorSpan>,
}

impl PanStrategy {
    /// A strategy with no content and the default display size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current viewport. Never wider than the display, and within the
    /// bounds of the current content whenever both are non-degenerate.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The current display size.
    #[must_use]
    pub const fn display_size(&self) -> DisplaySize {
        self.display_size
    }

    /// The active panning mode.
    #[must_use]
    pub const fn mode(&self) -> PanMode {
        self.mode
    }

    /// Rows the fixed buffer occupies at the current column count.
    #[must_use]
    pub fn fixed_line_count(&self) -> usize {
        line_count(self.fixed_buffer.len(), self.display_size.columns)
    }

    /// Rows the wrapped buffer occupies at the current column count.
    #[must_use]
    pub fn wrapped_line_count(&self) -> usize {
        line_count(self.wrapped_buffer.len(), self.display_size.columns)
    }

    /// Cell-to-text map of the active buffer: one entry per cell, giving
    /// the char offset of the text character the cell was translated from.
    #[must_use]
    pub fn braille_to_text(&self) -> &[usize] {
        match self.mode {
            PanMode::Fixed => &self.fixed_to_text,
            PanMode::WordWrap => &self.wrapped_to_text,
        }
    }

    /// Braille and text offsets of the first viewport cell.
    #[must_use]
    pub fn offsets(&self) -> SliceOffsets {
        let braille = self.viewport.first_row * self.display_size.columns;
        let text = self.braille_to_text().get(braille).copied().unwrap_or(0);
        SliceOffsets { braille, text }
    }

    /// The cursor span, in fixed-buffer offsets.
    #[must_use]
    pub const fn cursor(&self) -> Option<CursorSpan> {
        self.cursor
    }

    /// The cursor's projection into the wrapped buffer. Recomputed only by
    /// content rebuilds; `None` when no cursor is set or a bound fell on a
    /// cell the wrap dropped.
    #[must_use]
    pub const fn wrapped_cursor(&self) -> Option<CursorSpan> {
        self.wrapped_cursor
    }

    /// Set or clear the cursor. The wrapped projection picks it up on the
    /// next content rebuild; the fixed projection applies immediately.
    pub fn set_cursor(&mut self, cursor: Option<CursorSpan>) {
        self.cursor = cursor;
    }

    /// Switch between fixed and word-wrapped panning. Resets the viewport
    /// to the start of the content; the scroll offset is not preserved.
    pub fn set_mode(&mut self, mode: PanMode) {
        self.mode = mode;
        self.pan_to_position(0);
    }

    /// Change the display geometry and rewrap the retained content for it.
    pub fn set_display_size(&mut self, rows: usize, columns: usize) {
        self.display_size = DisplaySize::new(rows, columns);
        self.rebuild(0);
    }

    /// Replace the content: the source text, its translated cells, and the
    /// cell-to-text map (one char offset per cell). The viewport moves to
    /// overlap `target_position`, a cell offset into the content.
    pub fn set_content(
        &mut self,
        text: impl Into<String>,
        cells: Vec<u8>,
        braille_to_text: Vec<usize>,
        target_position: usize,
    ) {
        self.text = text.into();
        self.fixed_buffer = cells;
        self.fixed_to_text = braille_to_text;
        // One map entry per cell; pad a short map rather than index past it.
        if self.fixed_to_text.len() < self.fixed_buffer.len() {
            let fill = self.fixed_to_text.last().copied().unwrap_or(0);
            self.fixed_to_text.resize(self.fixed_buffer.len(), fill);
        }
        self.rebuild(target_position);
    }

    /// Page the viewport forward. Returns whether it moved; `false` means
    /// the viewport already covers the end of the content.
    pub fn next(&mut self) -> bool {
        let lines = self.active_line_count();
        if lines == 0 {
            return false;
        }
        let rows = self.display_size.rows;
        let new_start = self.viewport.last_row + 1;
        if rows == 0 || new_start >= lines {
            return false;
        }
        let new_end = (new_start + rows - 1).min(lines - 1);
        self.viewport = Viewport::new(new_start, new_end);
        true
    }

    /// Page the viewport back. Returns whether it moved; `false` means the
    /// viewport already covers the start of the content.
    pub fn previous(&mut self) -> bool {
        let lines = self.active_line_count();
        let rows = self.display_size.rows;
        let first = self.viewport.first_row;
        if first == 0 || rows == 0 {
            return false;
        }
        let (new_start, new_end) = if first < rows {
            // Partial page left over at the top: clamp to the first page.
            (0, rows.min(lines).saturating_sub(1))
        } else {
            (first - rows, first - 1)
        };
        if new_start > new_end {
            return false;
        }
        self.viewport = Viewport::new(new_start, new_end);
        true
    }

    /// Cells for the current viewport rows, as a fresh copy. With
    /// `show_cursor`, cursor dots are raised on every cell of the active
    /// cursor span that falls inside the viewport; otherwise those dots are
    /// stripped, so a stale cursor never leaks onto the display.
    #[must_use]
    pub fn current_braille_viewport(&self, show_cursor: bool) -> Vec<u8> {
        let buffer = self.active_buffer();
        let columns = self.display_size.columns;
        let start = (self.viewport.first_row * columns).min(buffer.len());
        let end = ((self.viewport.last_row + 1) * columns).min(buffer.len());
        let mut out = buffer[start..end].to_vec();

        if let Some(cursor) = self.active_cursor() {
            let valid =
                cursor.start < buffer.len() && cursor.start <= cursor.end && cursor.end <= buffer.len();
            if valid {
                let lo = cursor.start.max(start);
                let hi = cursor.end.min(end);
                if lo < hi {
                    for cell in &mut out[lo - start..hi - start] {
                        if show_cursor {
                            *cell |= BrailleDots::CURSOR.bits();
                        } else {
                            *cell &= !BrailleDots::CURSOR.bits();
                        }
                    }
                }
            }
        }
        out
    }

    /// Text corresponding to the current viewport cells. The end of the
    /// slice extends while further cells still map to the same text offset,
    /// so trailing padding cells never cut a character in half.
    #[must_use]
    pub fn current_text_viewport(&self) -> &str {
        let map = self.braille_to_text();
        let columns = self.display_size.columns;
        if columns == 0 || map.is_empty() {
            return "";
        }
        let first_cell = self.viewport.first_row * columns;
        let Some(&text_start) = map.get(first_cell) else {
            return "";
        };
        // Index of the last cell in the viewport, then of the first cell
        // past the character it maps to.
        let mut index = (self.viewport.last_row + 1) * columns - 1;
        if index < map.len() {
            let boundary = map[index];
            while index < map.len() && map[index] == boundary {
                index += 1;
            }
        }
        match map.get(index) {
            Some(&text_end) => self.slice_text(text_start, Some(text_end)),
            None => self.slice_text(text_start, None),
        }
    }

    fn active_buffer(&self) -> &[u8] {
        match self.mode {
            PanMode::Fixed => &self.fixed_buffer,
            PanMode::WordWrap => &self.wrapped_buffer,
        }
    }

    fn active_cursor(&self) -> Option<CursorSpan> {
        match self.mode {
            PanMode::Fixed => self.cursor,
            PanMode::WordWrap => self.wrapped_cursor,
        }
    }

    fn active_line_count(&self) -> usize {
        match self.mode {
            PanMode::Fixed => self.fixed_line_count(),
            PanMode::WordWrap => self.wrapped_line_count(),
        }
    }

    /// Rewrap the fixed buffer, remap the cursor, and re-aim the viewport.
    ///
    /// Greedy word wrap over cells: a blank run (cells of value 0) straddling
    /// a row boundary is swallowed as the row break; a word cut by the
    /// boundary is pushed down whole, with zero padding filling out the
    /// previous row (padding map entries duplicate their predecessor so text
    /// lookups stay monotonic); a word with no break opportunity longer than
    /// a full row stays split.
    fn rebuild(&mut self, target_position: usize) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "pan_rebuild",
            cells = self.fixed_buffer.len(),
            rows = self.display_size.rows,
            columns = self.display_size.columns
        )
        .entered();

        let columns = self.display_size.columns;
        let cells = &self.fixed_buffer;
        let fixed_map = &self.fixed_to_text;
        let cursor = self.cursor;

        let mut wrapped: Vec<u8> = Vec::with_capacity(cells.len());
        let mut wrapped_map: Vec<usize> = Vec::with_capacity(cells.len());
        let mut cursor_start: Option<usize> = None;
        let mut cursor_end: Option<usize> = None;

        // Record where a fixed-buffer offset lands in the wrapped buffer if
        // it is one of the cursor bounds. Cells re-copied after a word push
        // simply record again at their final position.
        let mut note_cursor = |src: usize, out: usize| {
            let Some(c) = cursor else { return };
            if c.start == src {
                cursor_start = Some(out);
            } else if c.end == src {
                cursor_end = Some(out);
            }
        };

        // Wrapped-buffer offset of the cell after the last break
        // opportunity (a blank cell or a row start).
        let mut last_break = 0usize;
        let mut src = 0usize;
        while src < cells.len() {
            let out = wrapped.len();
            if columns > 0 && out > 0 && out % columns == 0 {
                if cells[src] == 0 {
                    // A blank run at a row start becomes the row break.
                    while src < cells.len() && cells[src] == 0 {
                        src += 1;
                    }
                    last_break = out;
                    continue;
                }
                if cells[src - 1] != 0 && last_break % columns != 0 {
                    // The boundary cuts a word that began mid-row: pad the
                    // previous row out and re-copy the word from the row
                    // start. A word that began at a row start is longer
                    // than a row and falls through to be split instead.
                    let moved = out - last_break - 1;
                    for pad in (last_break + 1)..out {
                        wrapped[pad] = 0;
                        wrapped_map[pad] = wrapped_map[pad - 1];
                    }
                    src -= moved;
                    last_break = out;
                    continue;
                }
            } else if cells[src] == 0 {
                last_break = out;
            }
            note_cursor(src, wrapped.len());
            wrapped.push(cells[src]);
            wrapped_map.push(fixed_map[src]);
            src += 1;
        }
        // The cursor end may fall exactly at the end of the content.
        note_cursor(src, wrapped.len());

        self.wrapped_cursor = match (cursor_start, cursor_end) {
            (Some(start), Some(end)) if start <= end => Some(CursorSpan::new(start, end)),
            _ => None,
        };
        self.wrapped_buffer = wrapped;
        self.wrapped_to_text = wrapped_map;
        debug_assert_eq!(self.wrapped_to_text.len(), self.wrapped_buffer.len());
        self.pan_to_position(target_position);
    }

    /// Aim the viewport at a cell offset, ignoring where it currently is:
    /// scan forward from the start until the page covers the target.
    fn pan_to_position(&mut self, position: usize) {
        let rows = self.display_size.rows;
        let columns = self.display_size.columns;
        if rows == 0 || columns == 0 {
            // No display: pin the viewport to a single point.
            self.viewport = Viewport::new(position, position);
            return;
        }
        let lines = self.active_line_count();
        let mut first = 0usize;
        while first + rows < lines && (first + rows) * columns <= position {
            first += rows;
        }
        let last = if lines == 0 {
            0
        } else {
            (first + rows - 1).min(lines - 1)
        };
        self.viewport = Viewport::new(first, last);
    }

    /// Slice the text buffer by char offsets; `None` means to the end.
    fn slice_text(&self, start: usize, end: Option<usize>) -> &str {
        let from = char_to_byte(&self.text, start);
        let to = end.map_or(self.text.len(), |e| char_to_byte(&self.text, e));
        if from >= to {
            return "";
        }
        &self.text[from..to]
    }
}

/// Byte offset of the `index`-th char, or the end of the string.
fn char_to_byte(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Rows `len` cells occupy at `columns` cells per row.
fn line_count(len: usize, columns: usize) -> usize {
    if columns == 0 { 0 } else { len.div_ceil(columns) }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// "hello world" translated one nonzero cell per letter, 0 for the
    /// space, with an identity cell-to-text map.
    fn hello_world() -> (String, Vec<u8>, Vec<usize>) {
        let cells = vec![1, 2, 3, 4, 5, 0, 6, 7, 8, 9, 10];
        let map = (0..cells.len()).collect();
        ("hello world".to_string(), cells, map)
    }

    fn strategy(rows: usize, columns: usize) -> PanStrategy {
        let mut pan = PanStrategy::new();
        pan.set_display_size(rows, columns);
        pan
    }

    #[test]
    fn starts_with_default_display_and_no_content() {
        let pan = PanStrategy::new();
        assert_eq!(pan.display_size(), DisplaySize::default());
        assert_eq!(pan.mode(), PanMode::Fixed);
        assert_eq!(pan.fixed_line_count(), 0);
        assert_eq!(pan.current_braille_viewport(true), Vec::<u8>::new());
        assert_eq!(pan.current_text_viewport(), "");
    }

    #[test]
    fn word_cut_by_boundary_is_pushed_down_with_padding() {
        let (text, cells, map) = hello_world();
        let mut pan = strategy(1, 10);
        pan.set_content(text, cells, map, 0);
        pan.set_mode(PanMode::WordWrap);

        assert_eq!(pan.wrapped_line_count(), 2);
        assert_eq!(
            pan.current_braille_viewport(false),
            vec![1, 2, 3, 4, 5, 0, 0, 0, 0, 0]
        );
        assert!(pan.next());
        assert_eq!(pan.current_braille_viewport(false), vec![6, 7, 8, 9, 10]);
        assert!(!pan.next());

        // Padding cells duplicate the predecessor's text offset.
        assert_eq!(
            pan.braille_to_text(),
            &[0, 1, 2, 3, 4, 5, 5, 5, 5, 5, 6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn fixed_mode_splits_at_raw_boundaries() {
        let (text, cells, map) = hello_world();
        let mut pan = strategy(1, 10);
        pan.set_content(text, cells, map, 0);

        assert_eq!(pan.fixed_line_count(), 2);
        assert_eq!(
            pan.current_braille_viewport(false),
            vec![1, 2, 3, 4, 5, 0, 6, 7, 8, 9]
        );
        assert!(pan.next());
        assert_eq!(pan.current_braille_viewport(false), vec![10]);
    }

    #[test]
    fn overlong_word_is_left_split() {
        let cells = vec![7u8; 45];
        let map = (0..cells.len()).collect();
        let mut pan = strategy(1, 40);
        pan.set_content("x".repeat(45), cells.clone(), map, 0);
        pan.set_mode(PanMode::WordWrap);

        // No break opportunity, so no padding is inserted.
        assert_eq!(pan.wrapped_line_count(), 2);
        assert_eq!(pan.braille_to_text().len(), 45);
        assert_eq!(pan.current_braille_viewport(false), cells[..40].to_vec());
        assert!(pan.next());
        assert_eq!(pan.current_braille_viewport(false), cells[40..].to_vec());
    }

    #[test]
    fn blank_run_at_boundary_is_swallowed() {
        let mut cells: Vec<u8> = (1..=9).collect();
        cells.extend([0, 0, 0]);
        cells.extend(11..=15);
        let map = (0..cells.len()).collect();
        let mut pan = strategy(1, 10);
        pan.set_content("x".repeat(17), cells, map, 0);
        pan.set_mode(PanMode::WordWrap);

        assert_eq!(pan.wrapped_line_count(), 2);
        assert_eq!(
            pan.current_braille_viewport(false),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]
        );
        assert!(pan.next());
        assert_eq!(pan.current_braille_viewport(false), vec![11, 12, 13, 14, 15]);
        // The dropped blanks leave no map entries behind.
        assert_eq!(
            pan.braille_to_text(),
            &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 12, 13, 14, 15, 16]
        );
    }

    #[test]
    fn cursor_remaps_across_wrap() {
        let (text, cells, map) = hello_world();
        let mut pan = strategy(1, 10);
        pan.set_cursor(Some(CursorSpan::new(6, 11)));
        pan.set_content(text, cells, map, 0);
        pan.set_mode(PanMode::WordWrap);

        assert_eq!(pan.cursor(), Some(CursorSpan::new(6, 11)));
        assert_eq!(pan.wrapped_cursor(), Some(CursorSpan::new(10, 15)));

        assert!(pan.next());
        let dots = BrailleDots::CURSOR.bits();
        assert_eq!(
            pan.current_braille_viewport(true),
            vec![6 | dots, 7 | dots, 8 | dots, 9 | dots, 10 | dots]
        );
        assert_eq!(pan.current_braille_viewport(false), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn cursor_outside_viewport_leaves_cells_alone() {
        let (text, cells, map) = hello_world();
        let mut pan = strategy(1, 10);
        pan.set_cursor(Some(CursorSpan::new(0, 5)));
        pan.set_content(text, cells, map, 0);
        pan.set_mode(PanMode::WordWrap);

        assert!(pan.next());
        assert_eq!(pan.current_braille_viewport(true), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn zero_width_cursor_shows_nothing() {
        let (text, cells, map) = hello_world();
        let mut pan = strategy(1, 10);
        pan.set_cursor(Some(CursorSpan::new(3, 3)));
        pan.set_content(text, cells, map, 0);

        assert_eq!(pan.wrapped_cursor(), None);
        assert_eq!(
            pan.current_braille_viewport(true),
            vec![1, 2, 3, 4, 5, 0, 6, 7, 8, 9]
        );
    }

    #[test]
    fn text_viewport_follows_the_active_map() {
        let (text, cells, map) = hello_world();
        let mut pan = strategy(1, 10);
        pan.set_content(text, cells, map, 0);

        assert_eq!(pan.current_text_viewport(), "hello worl");

        pan.set_mode(PanMode::WordWrap);
        // Trailing padding cells all map to the space, which stays whole.
        assert_eq!(pan.current_text_viewport(), "hello ");
        assert!(pan.next());
        assert_eq!(pan.current_text_viewport(), "world");
    }

    #[test]
    fn pan_lands_on_the_page_covering_the_target() {
        let cells = vec![1u8; 30];
        let map = (0..cells.len()).collect();
        let mut pan = strategy(1, 10);
        pan.set_content("x".repeat(30), cells, map, 25);
        assert_eq!(pan.viewport(), Viewport::new(2, 2));

        // Targets past the content clamp to the last page.
        let cells = vec![1u8; 30];
        let map = (0..cells.len()).collect();
        pan.set_content("x".repeat(30), cells, map, 500);
        assert_eq!(pan.viewport(), Viewport::new(2, 2));
    }

    #[test]
    fn paging_reaches_both_ends() {
        let cells = vec![1u8; 35];
        let map = (0..cells.len()).collect();
        let mut pan = strategy(1, 10);
        pan.set_content("x".repeat(35), cells, map, 0);

        let mut pages = 0;
        while pan.next() {
            pages += 1;
        }
        assert_eq!(pages, 3);
        assert_eq!(pan.viewport().last_row, pan.fixed_line_count() - 1);

        while pan.previous() {}
        assert_eq!(pan.viewport().first_row, 0);
        assert!(!pan.previous());
    }

    #[test]
    fn multirow_display_pages_by_full_pages() {
        let cells = vec![1u8; 50];
        let map = (0..cells.len()).collect();
        let mut pan = strategy(2, 10);
        pan.set_content("x".repeat(50), cells, map, 0);

        assert_eq!(pan.viewport(), Viewport::new(0, 1));
        assert!(pan.next());
        assert_eq!(pan.viewport(), Viewport::new(2, 3));
        assert!(pan.next());
        assert_eq!(pan.viewport(), Viewport::new(4, 4));
        assert!(!pan.next());

        assert!(pan.previous());
        assert_eq!(pan.viewport(), Viewport::new(2, 3));
        assert!(pan.previous());
        assert_eq!(pan.viewport(), Viewport::new(0, 1));
        assert!(!pan.previous());
    }

    #[test]
    fn mode_toggle_resets_the_viewport() {
        let cells = vec![1u8; 35];
        let map = (0..cells.len()).collect();
        let mut pan = strategy(1, 10);
        pan.set_content("x".repeat(35), cells, map, 30);
        assert_eq!(pan.viewport(), Viewport::new(3, 3));

        pan.set_mode(PanMode::WordWrap);
        assert_eq!(pan.viewport(), Viewport::new(0, 0));
    }

    #[test]
    fn display_size_change_rewraps_retained_content() {
        let (text, cells, map) = hello_world();
        let mut pan = strategy(1, 10);
        pan.set_content(text, cells, map, 0);
        pan.set_mode(PanMode::WordWrap);
        assert_eq!(pan.wrapped_line_count(), 2);

        pan.set_display_size(1, 20);
        assert_eq!(pan.wrapped_line_count(), 1);
        assert_eq!(
            pan.current_braille_viewport(false),
            vec![1, 2, 3, 4, 5, 0, 6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn offsets_track_the_first_viewport_cell() {
        let cells = vec![1u8; 30];
        let map = (0..cells.len()).collect();
        let mut pan = strategy(1, 10);
        pan.set_content("x".repeat(30), cells, map, 0);

        assert_eq!(pan.offsets(), SliceOffsets { braille: 0, text: 0 });
        assert!(pan.next());
        assert_eq!(pan.offsets(), SliceOffsets { braille: 10, text: 10 });
    }

    #[test]
    fn empty_content_degrades_silently() {
        let mut pan = strategy(1, 10);
        pan.set_content("", Vec::new(), Vec::new(), 0);

        assert_eq!(pan.viewport(), Viewport::new(0, 0));
        assert!(!pan.next());
        assert!(!pan.previous());
        assert_eq!(pan.current_braille_viewport(true), Vec::<u8>::new());
        assert_eq!(pan.current_text_viewport(), "");
    }

    #[test]
    fn zero_sized_display_pins_the_viewport() {
        let (text, cells, map) = hello_world();
        let mut pan = strategy(0, 0);
        pan.set_content(text, cells, map, 4);

        assert_eq!(pan.viewport(), Viewport::new(4, 4));
        assert!(!pan.next());
        assert!(!pan.previous());
        assert_eq!(pan.current_text_viewport(), "");
    }

    #[test]
    fn short_map_is_padded_not_indexed_past() {
        let cells = vec![1u8, 2, 3, 4];
        let mut pan = strategy(1, 10);
        pan.set_content("abcd", cells, vec![0, 1], 0);
        assert_eq!(pan.braille_to_text(), &[0, 1, 1, 1]);
    }

    #[test]
    fn multibyte_text_slices_on_char_boundaries() {
        // One cell per char; chars are multi-byte.
        let cells = vec![1u8, 2, 0, 3, 4];
        let map = (0..cells.len()).collect();
        let mut pan = strategy(1, 3);
        pan.set_content("áé ío", cells, map, 0);
        pan.set_mode(PanMode::WordWrap);

        assert_eq!(pan.current_text_viewport(), "áé ");
        assert!(pan.next());
        assert_eq!(pan.current_text_viewport(), "ío");
    }
}
