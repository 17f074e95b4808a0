pub mod entity_resolution;

pub use entity_resolution::{EntityResolution, entity_for_insertion, filter_mutable};
