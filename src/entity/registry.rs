use crate::entity::{EntityKey, EntityRecord, Mutability};
use crate::error::{ModelError, ModelResult};
use serde_json::Value;
use std::collections::HashMap;

/// Storage for every entity a content snapshot references.
///
/// Looking up a key that was never registered is a precondition violation
/// (`EntityNotFound`): per-character tags are only ever written from keys this
/// registry handed out, so a miss means the caller mixed up snapshots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityRegistry {
    records: HashMap<EntityKey, EntityRecord>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record under a freshly generated key and return the key
    pub fn create(&mut self, record: EntityRecord) -> EntityKey {
        let key = EntityKey::generate();
        log::trace!(
            target: "tsumugi::entity",
            "registered {} entity {} ({:?})",
            record.kind(),
            key,
            record.mutability()
        );
        self.records.insert(key, record);
        key
    }

    /// Register a record under an existing key (raw interchange loads)
    pub fn insert(&mut self, key: EntityKey, record: EntityRecord) {
        self.records.insert(key, record);
    }

    /// Look up a record, failing on an unknown key
    pub fn record(&self, key: EntityKey) -> ModelResult<&EntityRecord> {
        self.records
            .get(&key)
            .ok_or_else(|| ModelError::entity_not_found(key))
    }

    /// Look up a record without the precondition check
    pub fn get(&self, key: EntityKey) -> Option<&EntityRecord> {
        self.records.get(&key)
    }

    pub fn contains(&self, key: EntityKey) -> bool {
        self.records.contains_key(&key)
    }

    /// Merge entries into a record's data payload
    pub fn merge_data(
        &mut self,
        key: EntityKey,
        entries: impl IntoIterator<Item = (String, Value)>,
    ) -> ModelResult<()> {
        let record = self
            .records
            .get_mut(&key)
            .ok_or_else(|| ModelError::entity_not_found(key))?;
        record.merge_data(entries);
        Ok(())
    }

    /// Reclassify a record's mutability
    pub fn set_mutability(&mut self, key: EntityKey, mutability: Mutability) -> ModelResult<()> {
        let record = self
            .records
            .get_mut(&key)
            .ok_or_else(|| ModelError::entity_not_found(key))?;
        record.set_mutability(mutability);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &EntityRecord)> {
        self.records.iter().map(|(key, record)| (*key, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_and_lookup() {
        let mut registry = EntityRegistry::new();
        let key = registry.create(EntityRecord::new("LINK", Mutability::Mutable));

        let record = registry.record(key).unwrap();
        assert_eq!(record.kind(), "LINK");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_key_is_a_precondition_violation() {
        let registry = EntityRegistry::new();
        let stray = EntityKey::generate();

        let err = registry.record(stray).unwrap_err();
        assert_eq!(err, ModelError::entity_not_found(stray));
        assert!(registry.get(stray).is_none());
    }

    #[test]
    fn test_merge_data_through_registry() {
        let mut registry = EntityRegistry::new();
        let key = registry.create(
            EntityRecord::new("LINK", Mutability::Mutable).with_data("url", "https://example.com"),
        );

        registry
            .merge_data(key, [("title".to_string(), json!("Example"))])
            .unwrap();

        let record = registry.record(key).unwrap();
        assert_eq!(record.data()["url"], json!("https://example.com"));
        assert_eq!(record.data()["title"], json!("Example"));
    }

    #[test]
    fn test_set_mutability_reclassifies() {
        let mut registry = EntityRegistry::new();
        let key = registry.create(EntityRecord::new("LINK", Mutability::Mutable));

        registry.set_mutability(key, Mutability::Immutable).unwrap();

        assert_eq!(
            registry.record(key).unwrap().mutability(),
            Mutability::Immutable
        );
    }
}
