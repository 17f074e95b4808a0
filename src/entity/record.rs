use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// How an entity behaves when text is inserted against its edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mutability {
    /// Grows to cover text typed adjacent to the annotated range
    Mutable,
    /// Fixed span, never captures adjacent insertions
    Immutable,
    /// Treated as discrete segments that never extend
    Segmented,
}

/// An annotation record: a link, mention, or similar metadata attached to a
/// contiguous character range.
///
/// The `kind` is an application-level tag (e.g. "LINK"); the model only
/// interprets the mutability classification. Arbitrary payload lives in
/// `data` (a link's URL, a mention's user id, …).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    kind: String,
    mutability: Mutability,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    data: BTreeMap<String, Value>,
}

impl EntityRecord {
    /// Create a record with no data payload
    pub fn new(kind: impl Into<String>, mutability: Mutability) -> Self {
        Self {
            kind: kind.into(),
            mutability,
            data: BTreeMap::new(),
        }
    }

    /// Attach a data entry, builder style
    pub fn with_data(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(field.into(), value.into());
        self
    }

    /// Get the application-level kind tag
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Get the mutability classification
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Reclassify the record
    pub fn set_mutability(&mut self, mutability: Mutability) {
        self.mutability = mutability;
    }

    /// Get the data payload
    pub fn data(&self) -> &BTreeMap<String, Value> {
        &self.data
    }

    /// Merge entries into the data payload, overwriting on key collision
    pub fn merge_data(&mut self, entries: impl IntoIterator<Item = (String, Value)>) {
        self.data.extend(entries);
    }

    /// Replace the whole data payload
    pub fn replace_data(&mut self, data: BTreeMap<String, Value>) {
        self.data = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_creation() {
        let record = EntityRecord::new("LINK", Mutability::Mutable)
            .with_data("url", "https://example.com");

        assert_eq!(record.kind(), "LINK");
        assert_eq!(record.mutability(), Mutability::Mutable);
        assert_eq!(record.data()["url"], json!("https://example.com"));
    }

    #[test]
    fn test_merge_data_overwrites_collisions() {
        let mut record = EntityRecord::new("MENTION", Mutability::Segmented)
            .with_data("user", "alice")
            .with_data("verified", false);

        record.merge_data([("verified".to_string(), json!(true))]);

        assert_eq!(record.data()["verified"], json!(true));
        assert_eq!(record.data()["user"], json!("alice"));
    }

    #[test]
    fn test_replace_data_drops_previous_entries() {
        let mut record =
            EntityRecord::new("LINK", Mutability::Mutable).with_data("url", "https://old.example");

        record.replace_data(BTreeMap::from([(
            "url".to_string(),
            json!("https://new.example"),
        )]));

        assert_eq!(record.data().len(), 1);
        assert_eq!(record.data()["url"], json!("https://new.example"));
    }

    #[test]
    fn test_mutability_wire_names() {
        assert_eq!(
            serde_json::to_string(&Mutability::Mutable).unwrap(),
            "\"MUTABLE\""
        );
        assert_eq!(
            serde_json::to_string(&Mutability::Segmented).unwrap(),
            "\"SEGMENTED\""
        );
        let parsed: Mutability = serde_json::from_str("\"IMMUTABLE\"").unwrap();
        assert_eq!(parsed, Mutability::Immutable);
    }
}
