pub mod analysis;
pub mod document;
pub mod domain;
pub mod entity;
pub mod error;

pub use analysis::{EntityResolution, entity_for_insertion, filter_mutable};
pub use document::{
    BlockKey, CharacterMetadata, ContentBlock, ContentState, InlineStyle, InlineStyleSet,
    RawBlock, RawContent, RawEntityRange, RawStyleRange,
};
pub use domain::{SelectionState, TextPosition};
pub use entity::{EntityKey, EntityRecord, EntityRegistry, Mutability};
pub use error::{ModelError, ModelResult};
