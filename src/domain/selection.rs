use crate::document::BlockKey;
use crate::domain::position::TextPosition;

/// Where typed text lands in a document.
///
/// The two shapes are distinct variants so queries match them exhaustively
/// instead of branching on an is-collapsed flag. A span's positions must
/// already be in document order (`start` at or before `end`); that invariant
/// belongs to whoever constructed the selection, and readers do not
/// re-validate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    /// A zero-width selection (a cursor)
    Caret(TextPosition),
    /// A selection covering at least one character
    Span {
        start: TextPosition,
        end: TextPosition,
    },
}

impl SelectionState {
    /// Collapsed selection at a block offset
    pub const fn caret(block: BlockKey, offset: usize) -> Self {
        Self::Caret(TextPosition::new(block, offset))
    }

    /// Span between two document-ordered positions
    pub const fn span(start: TextPosition, end: TextPosition) -> Self {
        Self::Span { start, end }
    }

    pub const fn is_collapsed(&self) -> bool {
        matches!(self, Self::Caret(_))
    }

    /// First position covered: the caret itself, or a span's start
    pub const fn start(&self) -> TextPosition {
        match self {
            Self::Caret(position) => *position,
            Self::Span { start, .. } => *start,
        }
    }

    /// Last position covered: the caret itself, or a span's end
    pub const fn end(&self) -> TextPosition {
        match self {
            Self::Caret(position) => *position,
            Self::Span { end, .. } => *end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_is_collapsed() {
        let block = BlockKey::generate();
        let selection = SelectionState::caret(block, 3);

        assert!(selection.is_collapsed());
        assert_eq!(selection.start(), TextPosition::new(block, 3));
        assert_eq!(selection.end(), TextPosition::new(block, 3));
    }

    #[test]
    fn test_span_accessors() {
        let first = BlockKey::generate();
        let second = BlockKey::generate();
        let selection = SelectionState::span(
            TextPosition::new(first, 2),
            TextPosition::new(second, 1),
        );

        assert!(!selection.is_collapsed());
        assert_eq!(selection.start().block, first);
        assert_eq!(selection.end().block, second);
    }
}
