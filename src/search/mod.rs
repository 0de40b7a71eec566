//! Search functionality.
//!
//! Plain substring search, scanning lines top to bottom without wrapping.

use crate::editor::{Cursor, Document};

/// Find the first occurrence of `term` at or after line `from_row`.
///
/// Returns the match position with the column counted in characters. An
/// empty term matches trivially at column 0 of `from_row`, so `find("", doc,
/// 0)` is always `(0, 0)`.
pub fn find(term: &str, doc: &Document, from_row: usize) -> Option<Cursor> {
    doc.lines()
        .iter()
        .enumerate()
        .skip(from_row)
        .find_map(|(row, line)| {
            line.find(term)
                .map(|byte_idx| Cursor::at(row, line[..byte_idx].chars().count()))
        })
}
