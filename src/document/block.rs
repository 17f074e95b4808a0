use crate::document::character::{CharacterMetadata, InlineStyle, InlineStyleSet};
use crate::entity::EntityKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use ulid::Ulid;

/// Opaque identifier for a content block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockKey(Ulid);

impl BlockKey {
    /// Generate a fresh key
    pub fn generate() -> Self {
        Self(Ulid::new())
    }
}

impl From<Ulid> for BlockKey {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BlockKey {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Ulid::from_str(s)?))
    }
}

/// One unit of text (a paragraph, heading, …) with per-character metadata.
///
/// Offsets are character indices, not byte indices; `chars` stays aligned with
/// `text.chars()` so annotation lookups never land inside a UTF-8 sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentBlock {
    key: BlockKey,
    text: String,
    chars: Vec<CharacterMetadata>,
}

impl ContentBlock {
    /// Create a block of plain, unannotated text
    pub fn new(key: BlockKey, text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = vec![CharacterMetadata::plain(); text.chars().count()];
        Self { key, text, chars }
    }

    pub fn key(&self) -> BlockKey {
        self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (not bytes)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the entity key attached at a character offset.
    ///
    /// Returns `None` both for an untagged character and for an offset past
    /// the end of the block; the distinction belongs to the caller, which
    /// knows the block length.
    pub fn entity_at(&self, offset: usize) -> Option<EntityKey> {
        self.chars.get(offset).and_then(|meta| meta.entity())
    }

    /// Get the inline styles at a character offset
    pub fn styles_at(&self, offset: usize) -> InlineStyleSet {
        self.chars
            .get(offset)
            .map(|meta| meta.styles())
            .unwrap_or_default()
    }

    /// Get the full per-character metadata slice
    pub fn metadata(&self) -> &[CharacterMetadata] {
        &self.chars
    }

    /// Tag a character range with an entity key (or clear it with `None`).
    ///
    /// The range is clamped to the block length.
    pub fn apply_entity(&mut self, range: Range<usize>, entity: Option<EntityKey>) {
        for meta in self.slice_mut(range) {
            meta.set_entity(entity);
        }
    }

    /// Add an inline style over a character range, clamped to the block length
    pub fn apply_style(&mut self, range: Range<usize>, style: InlineStyle) {
        for meta in self.slice_mut(range) {
            meta.add_style(style);
        }
    }

    /// Remove an inline style over a character range
    pub fn remove_style(&mut self, range: Range<usize>, style: InlineStyle) {
        for meta in self.slice_mut(range) {
            meta.remove_style(style);
        }
    }

    fn slice_mut(&mut self, range: Range<usize>) -> &mut [CharacterMetadata] {
        let start = range.start.min(self.chars.len());
        let end = range.end.min(self.chars.len());
        &mut self.chars[start..end]
    }

    /// Iterate contiguous runs of characters tagged with the same entity.
    ///
    /// Untagged stretches are skipped; adjacent characters with distinct keys
    /// yield distinct runs.
    pub fn entity_ranges(&self) -> Vec<(Range<usize>, EntityKey)> {
        let mut runs = Vec::new();
        let mut current: Option<(usize, EntityKey)> = None;

        for (offset, meta) in self.chars.iter().enumerate() {
            match (current, meta.entity()) {
                (Some((_, key)), Some(here)) if key == here => {}
                (Some((start, key)), here) => {
                    runs.push((start..offset, key));
                    current = here.map(|key| (offset, key));
                }
                (None, Some(here)) => current = Some((offset, here)),
                (None, None) => {}
            }
        }
        if let Some((start, key)) = current {
            runs.push((start..self.chars.len(), key));
        }
        runs
    }

    /// Contiguous runs carrying the given inline style
    pub fn style_ranges(&self, style: InlineStyle) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, meta) in self.chars.iter().enumerate() {
            match (start, meta.styles().contains(style)) {
                (None, true) => start = Some(offset),
                (Some(from), false) => {
                    runs.push(from..offset);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(from) = start {
            runs.push(from..self.chars.len());
        }
        runs
    }
}
