use crate::document::ContentState;
use crate::domain::SelectionState;
use crate::entity::{EntityKey, EntityRegistry, Mutability};
use crate::error::ModelResult;
use std::collections::BTreeSet;

/// Outcome of asking which entities a text insertion should extend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityResolution {
    /// No position to inspect: the caret sits at the very start of its block,
    /// so no preceding character exists whose entity could be extended.
    Inapplicable,
    /// A position was inspected. The set holds the mutable entities found
    /// there; empty means the position carries no eligible entity.
    Candidates(BTreeSet<EntityKey>),
}

impl EntityResolution {
    /// Candidates with an empty set
    pub fn none() -> Self {
        Self::Candidates(BTreeSet::new())
    }

    pub fn is_inapplicable(&self) -> bool {
        matches!(self, Self::Inapplicable)
    }

    /// The candidate set, unless the resolution was inapplicable
    pub fn candidates(&self) -> Option<&BTreeSet<EntityKey>> {
        match self {
            Self::Inapplicable => None,
            Self::Candidates(keys) => Some(keys),
        }
    }
}

impl FromIterator<EntityKey> for EntityResolution {
    fn from_iter<I: IntoIterator<Item = EntityKey>>(iter: I) -> Self {
        Self::Candidates(iter.into_iter().collect())
    }
}

/// Return the entity keys that should annotate text inserted at `selection`.
///
/// Only `Mutable` entities are eligible; `Immutable` and `Segmented` entities
/// never capture adjacent insertions. For a caret the character just behind
/// the cursor decides; for a span the character under the span's start
/// decides, unless the span starts at its block's end, in which case there is
/// no character to consult and the candidate set is empty.
///
/// Fails with `BlockNotFound` when the selection references a block absent
/// from `content` — a selection from a different snapshot.
pub fn entity_for_insertion(
    content: &ContentState,
    selection: &SelectionState,
) -> ModelResult<EntityResolution> {
    match selection {
        SelectionState::Caret(position) => {
            if position.offset == 0 {
                log::trace!(
                    target: "tsumugi::entity_resolution",
                    "caret at start of block {}, nothing to extend",
                    position.block
                );
                return Ok(EntityResolution::Inapplicable);
            }
            let block = content.block(position.block)?;
            let candidate = block.entity_at(position.offset - 1);
            let eligible = filter_mutable(content.entities(), candidate)?;
            Ok(EntityResolution::Candidates(eligible))
        }
        SelectionState::Span { start, .. } => {
            let block = content.block(start.block)?;
            let candidate = if start.offset == block.len() {
                // Span starts past the last character of its block
                None
            } else {
                block.entity_at(start.offset)
            };
            let eligible = filter_mutable(content.entities(), candidate)?;
            Ok(EntityResolution::Candidates(eligible))
        }
    }
}

/// Keep only the candidates whose registry record is `Mutable`.
///
/// Defined over an arbitrary candidate collection even though each character
/// carries at most one entity key today, so overlapping annotations at a
/// boundary would flow through unchanged. Fails with `EntityNotFound` when a
/// candidate is missing from the registry.
pub fn filter_mutable(
    registry: &EntityRegistry,
    candidates: impl IntoIterator<Item = EntityKey>,
) -> ModelResult<BTreeSet<EntityKey>> {
    let mut eligible = BTreeSet::new();
    for key in candidates {
        let record = registry.record(key)?;
        if record.mutability() == Mutability::Mutable {
            eligible.insert(key);
        } else {
            log::trace!(
                target: "tsumugi::entity_resolution",
                "entity {} is {:?}, not extending",
                key,
                record.mutability()
            );
        }
    }
    Ok(eligible)
}
