use super::Document;

/// Cursor position in a document.
///
/// `row` is always a valid line index and `col` may equal the line length,
/// which denotes the end-of-line insertion point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based column, in characters.
    pub col: usize,
}

impl Cursor {
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one step in `direction`, staying inside `doc`.
    ///
    /// Vertical moves clamp the column to the new line's length; the
    /// previous column is not remembered.
    #[must_use]
    pub fn moved(self, direction: Direction, doc: &Document) -> Self {
        match direction {
            Direction::Left => Self::at(self.row, self.col.saturating_sub(1)),
            Direction::Right => Self::at(self.row, (self.col + 1).min(doc.line_len(self.row))),
            Direction::Up => Self::at(self.row.saturating_sub(1), self.col).clamped(doc),
            Direction::Down => Self::at((self.row + 1).min(doc.last_row()), self.col).clamped(doc),
        }
    }

    /// Pull the cursor back inside `doc` after the document shrank.
    #[must_use]
    pub fn clamped(self, doc: &Document) -> Self {
        let row = self.row.min(doc.last_row());
        Self::at(row, self.col.min(doc.line_len(row)))
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A visual-mode selection: where it started and where the cursor is now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Cursor,
    pub active: Cursor,
}

impl Selection {
    pub const fn new(anchor: Cursor) -> Self {
        Self {
            anchor,
            active: anchor,
        }
    }

    /// The selection as `(start, end)` in document order.
    pub fn range(&self) -> (Cursor, Cursor) {
        if self.anchor <= self.active {
            (self.anchor, self.active)
        } else {
            (self.active, self.anchor)
        }
    }

    /// Selected character columns on `row`, as a half-open range.
    ///
    /// `line_len` is the length of that row. Returns `None` when the row lies
    /// outside the selection.
    pub fn columns_on_row(&self, row: usize, line_len: usize) -> Option<std::ops::Range<usize>> {
        let (start, end) = self.range();
        if row < start.row || row > end.row {
            return None;
        }
        let from = if row == start.row { start.col } else { 0 };
        let to = if row == end.row { end.col } else { line_len };
        Some(from..to.max(from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::from_text(text)
    }

    // --- Horizontal motion ---

    #[test]
    fn test_move_left_at_start_is_noop() {
        let d = doc("hello");
        assert_eq!(Cursor::new().moved(Direction::Left, &d), Cursor::at(0, 0));
    }

    #[test]
    fn test_move_left_does_not_wrap() {
        let d = doc("hello\nworld");
        assert_eq!(Cursor::at(1, 0).moved(Direction::Left, &d), Cursor::at(1, 0));
    }

    #[test]
    fn test_move_right_stops_at_line_length() {
        let d = doc("hi");
        let c = Cursor::at(0, 1).moved(Direction::Right, &d);
        assert_eq!(c, Cursor::at(0, 2));
        assert_eq!(c.moved(Direction::Right, &d), Cursor::at(0, 2));
    }

    #[test]
    fn test_move_right_on_empty_line_is_noop() {
        let d = Document::empty();
        assert_eq!(Cursor::new().moved(Direction::Right, &d), Cursor::new());
    }

    // --- Vertical motion ---

    #[test]
    fn test_move_up_at_first_line_is_noop() {
        let d = doc("hello\nworld");
        assert_eq!(Cursor::at(0, 3).moved(Direction::Up, &d), Cursor::at(0, 3));
    }

    #[test]
    fn test_move_down_at_last_line_is_noop() {
        let d = doc("hello\nworld");
        assert_eq!(Cursor::at(1, 2).moved(Direction::Down, &d), Cursor::at(1, 2));
    }

    #[test]
    fn test_move_down_clamps_to_shorter_line() {
        let d = doc("hello\nhi");
        assert_eq!(Cursor::at(0, 4).moved(Direction::Down, &d), Cursor::at(1, 2));
    }

    #[test]
    fn test_vertical_motion_does_not_remember_column() {
        let d = doc("hello\nhi\nworld");
        let c = Cursor::at(0, 4)
            .moved(Direction::Down, &d)
            .moved(Direction::Down, &d);
        assert_eq!(c, Cursor::at(2, 2));
    }

    #[test]
    fn test_clamped_after_document_shrinks() {
        let d = doc("ab");
        assert_eq!(Cursor::at(4, 9).clamped(&d), Cursor::at(0, 2));
    }

    // --- Selection ---

    #[test]
    fn test_selection_range_is_normalized() {
        let mut sel = Selection::new(Cursor::at(2, 1));
        sel.active = Cursor::at(0, 4);
        assert_eq!(sel.range(), (Cursor::at(0, 4), Cursor::at(2, 1)));
    }

    #[test]
    fn test_selection_same_row_orders_by_column() {
        let mut sel = Selection::new(Cursor::at(1, 5));
        sel.active = Cursor::at(1, 2);
        assert_eq!(sel.range(), (Cursor::at(1, 2), Cursor::at(1, 5)));
    }

    #[test]
    fn test_selection_columns_on_rows() {
        let mut sel = Selection::new(Cursor::at(0, 3));
        sel.active = Cursor::at(2, 1);
        assert_eq!(sel.columns_on_row(0, 5), Some(3..5));
        assert_eq!(sel.columns_on_row(1, 4), Some(0..4));
        assert_eq!(sel.columns_on_row(2, 6), Some(0..1));
        assert_eq!(sel.columns_on_row(3, 6), None);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn direction() -> impl Strategy<Value = Direction> {
            prop_oneof![
                Just(Direction::Up),
                Just(Direction::Down),
                Just(Direction::Left),
                Just(Direction::Right),
            ]
        }

        proptest! {
            #[test]
            fn motion_never_leaves_document(
                lines in proptest::collection::vec("[a-z]{0,10}", 1..10),
                moves in proptest::collection::vec(direction(), 0..50),
            ) {
                let d = Document::from_lines(lines);
                let mut c = Cursor::new();
                for m in moves {
                    c = c.moved(m, &d);
                    prop_assert!(c.row < d.line_count());
                    prop_assert!(c.col <= d.line_len(c.row));
                }
            }
        }
    }
}
