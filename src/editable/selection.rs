//! Selection within a single-line buffer.

/// A text selection with anchor (start point) and head (caret position),
/// both char offsets.
/// The anchor stays fixed while the head moves during selection extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Move the head, keeping the anchor
    pub fn extend_to(&mut self, offset: usize) {
        self.head = offset;
    }

    /// Clamp both ends to `len`
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.anchor.min(len), self.head.min(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_start_end() {
        let backward = Selection::new(5, 1);
        assert_eq!(backward.start(), 1);
        assert_eq!(backward.end(), 5);
        assert!(!backward.is_empty());
        assert!(Selection::collapsed(3).is_empty());
    }

    #[test]
    fn test_selection_clamped() {
        assert_eq!(Selection::new(2, 9).clamped(4), Selection::new(2, 4));
    }
}
