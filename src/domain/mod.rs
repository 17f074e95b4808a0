pub mod position;
pub mod selection;

pub use position::TextPosition;
pub use selection::SelectionState;
