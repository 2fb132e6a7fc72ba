//! Item records and the keys they are stored under.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Key spaces of the record store. Keys from different namespaces never
/// compare equal, whatever characters the caller put in the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Item,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Item => "item",
        }
    }
}

/// Composite `(namespace, id)` key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemKey {
    namespace: Namespace,
    id: String,
}

impl ItemKey {
    /// Build a key in the item namespace; rejects empty or blank ids.
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self { namespace: Namespace::Item, id })
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace.as_str(), self.id)
    }
}

/// Stored record. `id` is required on the wire; a missing `value` is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub value: String,
}

impl Item {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self { id: id.into(), value: value.into() }
    }

    pub fn key(&self) -> Result<ItemKey, ModelError> {
        ItemKey::new(self.id.clone())
    }
}

pub fn validate_id(id: &str) -> Result<(), ModelError> {
    if id.trim().is_empty() {
        return Err(ModelError::Validation("ID must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_displays_with_namespace() {
        let key = ItemKey::new("a1").unwrap();
        assert_eq!(key.to_string(), "item:a1");
        assert_eq!(key.id(), "a1");
        assert_eq!(key.namespace(), Namespace::Item);
    }

    #[test]
    fn empty_and_blank_ids_rejected() {
        assert!(matches!(ItemKey::new(""), Err(ModelError::Validation(_))));
        assert!(matches!(ItemKey::new("   "), Err(ModelError::Validation(_))));
        assert!(Item::new("", "v").key().is_err());
    }

    #[test]
    fn ids_with_separators_stay_distinct() {
        // "item:x" as an id must not alias the key for "x".
        let plain = ItemKey::new("x").unwrap();
        let tricky = ItemKey::new("item:x").unwrap();
        assert_ne!(plain, tricky);
    }

    #[test]
    fn item_requires_id_and_defaults_value() {
        let ok: Item = serde_json::from_str(r#"{"id":"a1","value":"hello"}"#).unwrap();
        assert_eq!(ok, Item::new("a1", "hello"));
        let bare: Item = serde_json::from_str(r#"{"id":"a1"}"#).unwrap();
        assert_eq!(bare, Item::new("a1", ""));
        assert!(serde_json::from_str::<Item>(r#"{"value":"x"}"#).is_err());
    }
}
