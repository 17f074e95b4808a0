use crate::document::block::{BlockKey, ContentBlock};
use crate::entity::EntityRegistry;
use crate::error::{ModelError, ModelResult};
use std::collections::HashMap;

/// An immutable snapshot of document content: ordered blocks plus the entity
/// registry their character tags refer to.
///
/// Edits elsewhere in the pipeline produce a new snapshot; readers share
/// `&ContentState` freely. Block keys must be unique within a snapshot.
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    blocks: Vec<ContentBlock>,
    index: HashMap<BlockKey, usize>,
    entities: EntityRegistry,
}

impl ContentState {
    pub fn new(blocks: Vec<ContentBlock>, entities: EntityRegistry) -> Self {
        let index = blocks
            .iter()
            .enumerate()
            .map(|(position, block)| (block.key(), position))
            .collect();
        Self {
            blocks,
            index,
            entities,
        }
    }

    /// Build a snapshot of plain paragraphs with fresh keys and no entities
    pub fn from_text(text: &str) -> Self {
        let blocks = text
            .split('\n')
            .map(|line| ContentBlock::new(BlockKey::generate(), line))
            .collect();
        Self::new(blocks, EntityRegistry::new())
    }

    /// Resolve a block by key, failing on an unknown key.
    ///
    /// A miss is a precondition violation: the selection that produced the key
    /// belongs to a different snapshot.
    pub fn block(&self, key: BlockKey) -> ModelResult<&ContentBlock> {
        self.get_block(key)
            .ok_or_else(|| ModelError::block_not_found(key))
    }

    /// Resolve a block by key without the precondition check
    pub fn get_block(&self, key: BlockKey) -> Option<&ContentBlock> {
        self.index.get(&key).map(|position| &self.blocks[*position])
    }

    pub fn contains_block(&self, key: BlockKey) -> bool {
        self.index.contains_key(&key)
    }

    /// The block preceding `key` in document order, if any
    pub fn block_before(&self, key: BlockKey) -> Option<&ContentBlock> {
        let position = *self.index.get(&key)?;
        position.checked_sub(1).map(|prev| &self.blocks[prev])
    }

    /// The block following `key` in document order, if any
    pub fn block_after(&self, key: BlockKey) -> Option<&ContentBlock> {
        let position = *self.index.get(&key)?;
        self.blocks.get(position + 1)
    }

    pub fn first_block(&self) -> Option<&ContentBlock> {
        self.blocks.first()
    }

    pub fn last_block(&self) -> Option<&ContentBlock> {
        self.blocks.last()
    }

    /// Blocks in document order
    pub fn blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.blocks.iter()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    /// Mutable registry access, for snapshot assembly
    pub fn entities_mut(&mut self) -> &mut EntityRegistry {
        &mut self.entities
    }

    /// Mutable block access by key, for snapshot assembly
    pub fn block_mut(&mut self, key: BlockKey) -> ModelResult<&mut ContentBlock> {
        let position = *self
            .index
            .get(&key)
            .ok_or_else(|| ModelError::block_not_found(key))?;
        Ok(&mut self.blocks[position])
    }

    /// Whole-document text, blocks joined with newlines
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for (position, block) in self.blocks.iter().enumerate() {
            if position > 0 {
                text.push('\n');
            }
            text.push_str(block.text());
        }
        text
    }

    /// Whether any block contains a non-whitespace character
    pub fn has_text(&self) -> bool {
        self.blocks
            .iter()
            .any(|block| !block.text().trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_blocks() -> (ContentState, BlockKey, BlockKey, BlockKey) {
        let first = BlockKey::generate();
        let second = BlockKey::generate();
        let third = BlockKey::generate();
        let content = ContentState::new(
            vec![
                ContentBlock::new(first, "alpha"),
                ContentBlock::new(second, "beta"),
                ContentBlock::new(third, "gamma"),
            ],
            EntityRegistry::new(),
        );
        (content, first, second, third)
    }

    #[test]
    fn test_block_lookup_by_key() {
        let (content, first, second, _) = three_blocks();
        assert_eq!(content.block(first).unwrap().text(), "alpha");
        assert_eq!(content.block(second).unwrap().text(), "beta");
    }

    #[test]
    fn test_unknown_block_is_a_precondition_violation() {
        let (content, ..) = three_blocks();
        let stray = BlockKey::generate();

        let err = content.block(stray).unwrap_err();
        assert_eq!(err, ModelError::block_not_found(stray));
        assert!(!content.contains_block(stray));
    }

    #[test]
    fn test_block_navigation() {
        let (content, first, second, third) = three_blocks();

        assert!(content.block_before(first).is_none());
        assert_eq!(content.block_before(second).unwrap().key(), first);
        assert_eq!(content.block_after(second).unwrap().key(), third);
        assert!(content.block_after(third).is_none());

        assert_eq!(content.first_block().unwrap().key(), first);
        assert_eq!(content.last_block().unwrap().key(), third);
    }

    #[test]
    fn test_plain_text_joins_blocks() {
        let (content, ..) = three_blocks();
        assert_eq!(content.plain_text(), "alpha\nbeta\ngamma");
    }

    #[test]
    fn test_from_text_splits_on_newlines() {
        let content = ContentState::from_text("one\ntwo");
        assert_eq!(content.block_count(), 2);
        assert_eq!(content.first_block().unwrap().text(), "one");
        assert_eq!(content.last_block().unwrap().text(), "two");
    }

    #[test]
    fn test_has_text() {
        assert!(ContentState::from_text("  \nword").has_text());
        assert!(!ContentState::from_text("  \n\t").has_text());
    }
}
