use crate::entity::EntityKey;
use serde::{Deserialize, Serialize};

/// Inline formatting a character can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

impl InlineStyle {
    /// All styles, in bit order
    pub const ALL: [InlineStyle; 5] = [
        InlineStyle::Bold,
        InlineStyle::Italic,
        InlineStyle::Underline,
        InlineStyle::Strikethrough,
        InlineStyle::Code,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of inline styles packed into one byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InlineStyleSet(u8);

impl InlineStyleSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, style: InlineStyle) -> bool {
        self.0 & style.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn with(self, style: InlineStyle) -> Self {
        Self(self.0 | style.bit())
    }

    #[must_use]
    pub const fn without(self, style: InlineStyle) -> Self {
        Self(self.0 & !style.bit())
    }

    pub fn iter(self) -> impl Iterator<Item = InlineStyle> {
        InlineStyle::ALL
            .into_iter()
            .filter(move |style| self.contains(*style))
    }
}

impl FromIterator<InlineStyle> for InlineStyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// Per-character annotation state: at most one entity key plus inline styles.
///
/// Stored per character position rather than as range lists so that the hot
/// lookup (`entity_at`) is a plain index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharacterMetadata {
    entity: Option<EntityKey>,
    styles: InlineStyleSet,
}

impl CharacterMetadata {
    /// Metadata for an unannotated character
    pub const fn plain() -> Self {
        Self {
            entity: None,
            styles: InlineStyleSet::empty(),
        }
    }

    pub const fn entity(self) -> Option<EntityKey> {
        self.entity
    }

    pub const fn styles(self) -> InlineStyleSet {
        self.styles
    }

    pub fn set_entity(&mut self, entity: Option<EntityKey>) {
        self.entity = entity;
    }

    pub fn add_style(&mut self, style: InlineStyle) {
        self.styles = self.styles.with(style);
    }

    pub fn remove_style(&mut self, style: InlineStyle) {
        self.styles = self.styles.without(style);
    }
}
