pub mod block;
pub mod character;
pub mod content;
pub mod raw;

pub use block::{BlockKey, ContentBlock};
pub use character::{CharacterMetadata, InlineStyle, InlineStyleSet};
pub use content::ContentState;
pub use raw::{RawBlock, RawContent, RawEntityRange, RawStyleRange};
