//! Selection cursor and scroll window.
//!
//! The cursor only stores the selected index and the list length. The scroll offset is
//! never stored; it is recomputed from `(selected, len, visible_rows)` on every frame.

use std::ops::Range;

/// What part of the list is on screen and which rows are highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_offset: usize,
    /// Screen row of the selection, if anything is selected.
    pub highlighted_row: Option<usize>,
    /// Bottom row drawn highlighted to signal that the list continues.
    pub continuation_row: Option<usize>,
    /// Entry indices drawn on screen, top to bottom.
    pub visible: Range<usize>,
}

impl Viewport {
    /// Whether screen row `row` is drawn in the highlighted style.
    pub fn is_highlighted(&self, row: usize) -> bool {
        self.highlighted_row == Some(row) || self.continuation_row == Some(row)
    }
}

/// Scroll offset for a selection.
///
/// Once the selection reaches the second to last visible row, the window scrolls so the
/// selection stays there and the last row is left for the continuation marker.
pub fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows < 2 {
        return selected;
    }
    if selected + 1 >= visible_rows {
        selected + 2 - visible_rows
    } else {
        0
    }
}

/// Computes the on-screen window for a selection.
pub fn viewport(selected: usize, len: usize, visible_rows: usize) -> Viewport {
    if len == 0 || visible_rows == 0 {
        return Viewport {
            scroll_offset: 0,
            highlighted_row: None,
            continuation_row: None,
            visible: 0..0,
        };
    }

    let selected = selected.min(len - 1);
    let offset = scroll_offset(selected, visible_rows);
    let end = len.min(offset + visible_rows);
    let last_row = visible_rows - 1;

    let continuation_row = if offset > 0 && visible_rows >= 2 && offset + last_row < len {
        Some(last_row)
    } else {
        None
    };

    Viewport {
        scroll_offset: offset,
        highlighted_row: Some(selected - offset),
        continuation_row,
        visible: offset..end,
    }
}

/// Selection index into a list of `len` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewportCursor {
    selected: usize,
    len: usize,
}

impl ViewportCursor {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves the selection up by one entry. Stays put on the first entry.
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the selection down by one entry. Stays put on the last entry.
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    /// Points the cursor at a new list, back at the top.
    pub fn reset(&mut self, len: usize) {
        self.selected = 0;
        self.len = len;
    }

    pub fn viewport(&self, visible_rows: usize) -> Viewport {
        viewport(self.selected, self.len, visible_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;
    use rand::rng;

    #[test]
    fn scroll_derivation_examples() {
        assert_eq!(viewport(12, 20, 5).scroll_offset, 9);
        assert_eq!(viewport(3, 20, 5).scroll_offset, 0);
    }

    #[test]
    fn scroll_starts_at_second_to_last_row() {
        // Rows 0..=3 fit without scrolling, row 4 is the continuation row.
        assert_eq!(scroll_offset(2, 5), 0);
        assert_eq!(scroll_offset(3, 5), 0);
        assert_eq!(scroll_offset(4, 5), 1);
        assert_eq!(scroll_offset(5, 5), 2);
    }

    #[test]
    fn tiny_windows_keep_selection_visible() {
        assert_eq!(scroll_offset(7, 1), 7);
        let vp = viewport(7, 10, 1);
        assert_eq!(vp.highlighted_row, Some(0));
        assert_eq!(vp.visible, 7..8);
        assert_eq!(vp.continuation_row, None);
    }

    #[test]
    fn continuation_row_only_when_scrolled() {
        let top = viewport(1, 20, 5);
        assert_eq!(top.scroll_offset, 0);
        assert_eq!(top.continuation_row, None);
        assert!(top.is_highlighted(1));
        assert!(!top.is_highlighted(4));

        let scrolled = viewport(12, 20, 5);
        assert_eq!(scrolled.highlighted_row, Some(3));
        assert_eq!(scrolled.continuation_row, Some(4));
        assert_eq!(scrolled.visible, 9..14);
        assert!(scrolled.is_highlighted(3));
        assert!(scrolled.is_highlighted(4));
        assert!(!scrolled.is_highlighted(0));
    }

    #[test]
    fn no_continuation_row_past_the_end() {
        // Last entry selected: the row below it does not exist.
        let vp = viewport(19, 20, 5);
        assert_eq!(vp.scroll_offset, 16);
        assert_eq!(vp.visible, 16..20);
        assert_eq!(vp.highlighted_row, Some(3));
        assert_eq!(vp.continuation_row, None);
    }

    #[test]
    fn short_lists_are_not_padded() {
        let vp = viewport(2, 3, 10);
        assert_eq!(vp.visible, 0..3);
        assert_eq!(vp.highlighted_row, Some(2));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let vp = viewport(0, 0, 10);
        assert_eq!(vp.visible, 0..0);
        assert_eq!(vp.highlighted_row, None);

        let mut cursor = ViewportCursor::new(0);
        cursor.move_down();
        cursor.move_up();
        assert_eq!(cursor.selected(), 0);
    }

    #[test]
    fn moves_are_noops_at_bounds() {
        let mut cursor = ViewportCursor::new(3);
        cursor.move_up();
        assert_eq!(cursor.selected(), 0);
        cursor.move_down();
        cursor.move_down();
        cursor.move_down();
        assert_eq!(cursor.selected(), 2);
    }

    #[test]
    fn random_walks_respect_all_invariants() {
        let mut rng = rng();
        for _ in 0..200 {
            let len = rng.random_range(1..60);
            let visible_rows = rng.random_range(1..25);
            let mut cursor = ViewportCursor::new(len);

            for _ in 0..300 {
                if rng.random_bool(0.5) {
                    cursor.move_up();
                } else {
                    cursor.move_down();
                }

                let selected = cursor.selected();
                assert!(selected < len, "selected {selected} escaped len {len}");

                let vp = cursor.viewport(visible_rows);
                assert!(vp.scroll_offset <= selected);
                assert!(selected - vp.scroll_offset < visible_rows);
                assert!(vp.visible.contains(&selected));
                assert!(vp.visible.len() <= visible_rows);
            }
        }
    }

    #[test]
    fn reset_returns_to_top() {
        let mut cursor = ViewportCursor::new(10);
        for _ in 0..6 {
            cursor.move_down();
        }
        cursor.reset(4);
        assert_eq!(cursor.selected(), 0);
        assert_eq!(cursor.len(), 4);
    }
}
