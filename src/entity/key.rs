use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Opaque identifier for an entity record.
///
/// Keys are ULIDs so freshly created entities sort in creation order and
/// round-trip through the raw interchange form as plain strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityKey(Ulid);

impl EntityKey {
    /// Generate a fresh key
    pub fn generate() -> Self {
        Self(Ulid::new())
    }
}

impl From<Ulid> for EntityKey {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntityKey {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Ulid::from_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_keys_are_unique() {
        let a = EntityKey::generate();
        let b = EntityKey::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_string_round_trip() {
        let key = EntityKey::generate();
        let parsed: EntityKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
    }
}
