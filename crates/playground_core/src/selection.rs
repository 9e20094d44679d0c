//! Toolkit-independent selection predicates.

/// One selection range in character offsets. `anchor == head` is a bare cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    pub anchor: usize,
    pub head: usize,
}

impl SelectionRange {
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// A collapsed range at `offset`.
    pub const fn cursor(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Lower bound regardless of selection direction.
    pub fn from(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Upper bound regardless of selection direction.
    pub fn to(&self) -> usize {
        self.anchor.max(self.head)
    }
}

/// Returns `true` iff at least one range spans text.
///
/// An empty slice, or one holding only collapsed cursors, yields `false`.
pub fn exists_non_empty_selection(ranges: &[SelectionRange]) -> bool {
    ranges.iter().any(|range| !range.is_empty())
}
