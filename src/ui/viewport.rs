//! Viewport management for scrolling.
//!
//! The [`Viewport`] struct tracks which document lines fit on screen and
//! scrolls just enough to keep the cursor row visible.

use std::ops::Range;

/// Manages the visible portion of a document.
///
/// The viewport tracks:
/// - Text area dimensions (width, height)
/// - Current scroll offset (in lines)
/// - Total document length
///
/// # Example
///
/// ```
/// use crane::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 20, 100);
/// assert_eq!(vp.visible_range(), 0..20);
///
/// vp.scroll_to_show(30);
/// assert_eq!(vp.visible_range(), 11..31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Text area width in columns
    /// * `height` - Text area height in lines
    /// * `total_lines` - Total lines in the document
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    /// Get the current scroll offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Get the viewport width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the viewport height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of lines in the document.
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Get the range of visible lines.
    ///
    /// Returns a range from the current offset to offset + height,
    /// clamped to the document bounds.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_lines);
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Scroll the minimum amount needed for `line` to be on screen.
    pub fn scroll_to_show(&mut self, line: usize) {
        let height = (self.height as usize).max(1);
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + height {
            self.offset = line + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Go to the beginning of the document.
    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        // Clamp offset if document is now shorter than viewport
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the total number of lines (e.g., after an edit).
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Calculate the maximum valid offset.
    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}
