/// Cursor and scroll position over a list of `len` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollableList {
    pub len: usize,
    pub selected: Option<usize>,
    pub scroll_offset: usize,
}

impl ScrollableList {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: if len > 0 { Some(0) } else { None },
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Move selection by delta, clamping to bounds
    pub fn move_selection(&mut self, delta: i32) {
        if self.len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        let step = delta.unsigned_abs() as usize;
        self.selected = Some(if delta > 0 {
            current.saturating_add(step).min(self.len - 1)
        } else {
            current.saturating_sub(step)
        });
    }

    pub fn move_to_top(&mut self) {
        if self.len > 0 {
            self.selected = Some(0);
        }
    }

    pub fn move_to_bottom(&mut self) {
        if self.len > 0 {
            self.selected = Some(self.len - 1);
        }
    }

    /// Keep the selection inside the visible window, one row away from either edge
    pub fn update_scroll_offset_for_selection(&mut self, viewport_rows: usize) {
        if self.len == 0 {
            self.scroll_offset = 0;
            return;
        }

        let viewport_rows = viewport_rows.max(1);
        let max_offset = self.len.saturating_sub(viewport_rows);
        let selected = self.selected.unwrap_or(0).min(self.len - 1);
        let anchor_top = usize::from(viewport_rows > 2);
        let anchor_bottom = viewport_rows.saturating_sub(1 + anchor_top);

        if selected < self.scroll_offset + anchor_top {
            self.scroll_offset = selected.saturating_sub(anchor_top);
        } else if selected > self.scroll_offset + anchor_bottom {
            self.scroll_offset = selected - anchor_bottom;
        }

        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut list = ScrollableList::new(0);
        list.move_selection(3);
        list.move_to_bottom();
        assert_eq!(list.selected, None);
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut list = ScrollableList::new(5);
        list.move_selection(-1);
        assert_eq!(list.selected, Some(0));
        list.move_selection(10);
        assert_eq!(list.selected, Some(4));
        list.move_selection(-2);
        assert_eq!(list.selected, Some(2));
        list.move_to_top();
        assert_eq!(list.selected, Some(0));
    }

    #[test]
    fn test_scroll_follows_selection_down() {
        let mut list = ScrollableList::new(20);
        list.selected = Some(9);
        list.update_scroll_offset_for_selection(5);
        // Row 9 sits one above the bottom edge of a 5-row window
        assert_eq!(list.scroll_offset, 6);
    }

    #[test]
    fn test_scroll_follows_selection_up() {
        let mut list = ScrollableList::new(20);
        list.scroll_offset = 10;
        list.selected = Some(10);
        list.update_scroll_offset_for_selection(5);
        assert_eq!(list.scroll_offset, 9);
    }

    #[test]
    fn test_scroll_clamped_at_end() {
        let mut list = ScrollableList::new(8);
        list.move_to_bottom();
        list.update_scroll_offset_for_selection(5);
        assert_eq!(list.scroll_offset, 3);
    }

    #[test]
    fn test_reset() {
        let mut list = ScrollableList::new(8);
        list.move_to_bottom();
        list.update_scroll_offset_for_selection(3);
        list.reset(2);
        assert_eq!(list, ScrollableList::new(2));
    }
}
