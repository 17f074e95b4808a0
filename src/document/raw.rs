//! Flat interchange form of a content snapshot.
//!
//! Per-character tags are compact to query but verbose on the wire, so the
//! raw form stores annotations as `(offset, length)` runs, one list per
//! block, next to a single entity map. Loading validates every run against
//! the block it targets and the entity map before any tag is applied.

use crate::document::block::{BlockKey, ContentBlock};
use crate::document::character::InlineStyle;
use crate::document::content::ContentState;
use crate::entity::{EntityKey, EntityRecord, EntityRegistry};
use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serde-friendly snapshot: blocks with annotation runs plus the entity map
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub entity_map: BTreeMap<EntityKey, EntityRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    pub key: BlockKey,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_ranges: Vec<RawEntityRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub style_ranges: Vec<RawStyleRange>,
}

/// A run of characters tagged with one entity
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawEntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: EntityKey,
}

/// A run of characters carrying one inline style
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: InlineStyle,
}

impl RawContent {
    /// Flatten a snapshot into the interchange form
    pub fn from_content(content: &ContentState) -> Self {
        let blocks = content
            .blocks()
            .map(|block| {
                let entity_ranges = block
                    .entity_ranges()
                    .into_iter()
                    .map(|(range, key)| RawEntityRange {
                        offset: range.start,
                        length: range.len(),
                        key,
                    })
                    .collect();
                let style_ranges = InlineStyle::ALL
                    .into_iter()
                    .flat_map(|style| {
                        block
                            .style_ranges(style)
                            .into_iter()
                            .map(move |range| RawStyleRange {
                                offset: range.start,
                                length: range.len(),
                                style,
                            })
                    })
                    .collect();
                RawBlock {
                    key: block.key(),
                    text: block.text().to_string(),
                    entity_ranges,
                    style_ranges,
                }
            })
            .collect();

        let entity_map = content
            .entities()
            .iter()
            .map(|(key, record)| (key, record.clone()))
            .collect();

        Self { blocks, entity_map }
    }

    /// Rebuild a snapshot, validating every annotation run.
    ///
    /// Fails with `EntityNotFound` when a run names a key missing from the
    /// entity map, and with `InvalidRange` when a run does not fit its block.
    pub fn into_content(self) -> ModelResult<ContentState> {
        let mut registry = EntityRegistry::new();
        for (key, record) in self.entity_map {
            registry.insert(key, record);
        }

        let mut blocks = Vec::with_capacity(self.blocks.len());
        for raw in self.blocks {
            let mut block = ContentBlock::new(raw.key, raw.text);

            for run in &raw.entity_ranges {
                if !registry.contains(run.key) {
                    return Err(ModelError::entity_not_found(run.key));
                }
                check_run(&block, run.offset, run.length)?;
                block.apply_entity(run.offset..run.offset + run.length, Some(run.key));
            }
            for run in &raw.style_ranges {
                check_run(&block, run.offset, run.length)?;
                block.apply_style(run.offset..run.offset + run.length, run.style);
            }
            blocks.push(block);
        }

        Ok(ContentState::new(blocks, registry))
    }
}

fn check_run(block: &ContentBlock, offset: usize, length: usize) -> ModelResult<()> {
    let end = offset.checked_add(length).filter(|end| *end <= block.len());
    if end.is_none() {
        return Err(ModelError::invalid_range(
            block.key(),
            format!(
                "run {}..+{} exceeds block length {}",
                offset,
                length,
                block.len()
            ),
        ));
    }
    Ok(())
}
