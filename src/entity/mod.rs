pub mod key;
pub mod record;
pub mod registry;

pub use key::EntityKey;
pub use record::{EntityRecord, Mutability};
pub use registry::EntityRegistry;
