use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::errors::DomainError;
use super::ports::Document;

/// A domain noun exposed through the generic CRUD router.
///
/// `Self` is the full document body; `Patch` carries the optional subset of
/// fields an update may overwrite.
pub trait Resource: Serialize + DeserializeOwned + Validate + Send + Sync + 'static {
    /// Store collection name.
    const COLLECTION: &'static str;
    /// Human readable noun used in messages, e.g. "Room".
    const NAME: &'static str;

    type Patch: Serialize + DeserializeOwned + Validate + Send + 'static;

    /// Hook for derived fields, called before every write.
    fn normalize(&mut self) {}

    /// Top-level string field that must be unique within the collection,
    /// with this record's value for it.
    fn unique_key(&self) -> Option<(&'static str, String)> {
        None
    }
}

/// A resource body together with its store metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record<T> {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T: DeserializeOwned> Record<T> {
    pub fn from_document(doc: Document) -> Result<Self, DomainError> {
        Ok(Record {
            id: doc.id,
            data: serde_json::from_value(doc.body)?,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

/// Reply to updates and deletes. Callers re-fetch when they need the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Acknowledgement {
    pub id: Uuid,
    pub status: String,
}

impl Acknowledgement {
    pub fn new(id: Uuid, status: impl Into<String>) -> Self {
        Self {
            id,
            status: status.into(),
        }
    }

    pub fn updated(noun: &str, id: Uuid) -> Self {
        Self::new(id, format!("{noun} updated"))
    }

    pub fn deleted(noun: &str, id: Uuid) -> Self {
        Self::new(id, format!("{noun} deleted"))
    }
}

/// Overwrites the top-level keys of `body` with those present in `patch`.
///
/// Keys absent from the patch keep their stored value; nested objects are
/// replaced wholesale rather than merged.
pub fn apply_patch(mut body: Value, patch: Value) -> Result<Value, DomainError> {
    let (Value::Object(target), Value::Object(changes)) = (&mut body, patch) else {
        return Err(DomainError::InvalidInput(
            "update body must be a JSON object".to_string(),
        ));
    };
    for (key, value) in changes {
        if !value.is_null() {
            target.insert(key, value);
        }
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn patch_overwrites_only_named_fields() {
        let body = json!({"name": "Suite", "price": "120.00", "status": "Available"});
        let merged = apply_patch(body, json!({"status": "Booked"})).unwrap();
        assert_eq!(
            merged,
            json!({"name": "Suite", "price": "120.00", "status": "Booked"})
        );
    }

    #[test]
    fn patch_ignores_null_values() {
        let body = json!({"name": "Suite"});
        let merged = apply_patch(body, json!({"name": null})).unwrap();
        assert_eq!(merged, json!({"name": "Suite"}));
    }

    #[test]
    fn patch_replaces_nested_values_wholesale() {
        let body = json!({"options": [{"name": "Ice", "price": "0.50"}]});
        let merged = apply_patch(body, json!({"options": []})).unwrap();
        assert_eq!(merged, json!({"options": []}));
    }

    #[test]
    fn patch_rejects_non_object_body() {
        let err = apply_patch(json!([1, 2]), json!({"a": 1})).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn acknowledgement_messages_name_the_noun() {
        let id = Uuid::new_v4();
        assert_eq!(Acknowledgement::updated("Room", id).status, "Room updated");
        assert_eq!(Acknowledgement::deleted("Leave", id).status, "Leave deleted");
    }
}
