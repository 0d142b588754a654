use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::{Document, DocumentStore, Mutation};

/// Process-local document store, used by tests and local runs without Postgres.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<Document>>>, DomainError> {
        self.collections
            .lock()
            .map_err(|_| DomainError::Internal("document store lock poisoned".to_string()))
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn insert(&self, collection: &str, body: Value) -> Result<Document, DomainError> {
        let now = Utc::now();
        let doc = Document {
            id: Uuid::new_v4(),
            body,
            created_at: now,
            updated_at: now,
        };
        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    fn find_all(&self, collection: &str) -> Result<Vec<Document>, DomainError> {
        Ok(self.lock()?.get(collection).cloned().unwrap_or_default())
    }

    fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Document>, DomainError> {
        Ok(self
            .lock()?
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>, DomainError> {
        Ok(self
            .lock()?
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| d.body.get(field).and_then(Value::as_str) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn modify(
        &self,
        collection: &str,
        id: Uuid,
        mutate: Mutation<'_>,
    ) -> Result<Option<Document>, DomainError> {
        let mut collections = self.lock()?;
        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
        else {
            return Ok(None);
        };
        doc.body = mutate(doc.body.clone())?;
        doc.updated_at = Utc::now();
        Ok(Some(doc.clone()))
    }

    fn delete(&self, collection: &str, id: Uuid) -> Result<bool, DomainError> {
        let mut collections = self.lock()?;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok(docs.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn insert_then_find_by_id() {
        let store = InMemoryDocumentStore::new();
        let doc = store.insert("gifts", json!({"name": "Mug"})).unwrap();

        let found = store.find_by_id("gifts", doc.id).unwrap().unwrap();
        assert_eq!(found.body, json!({"name": "Mug"}));
        assert!(store.find_by_id("rooms", doc.id).unwrap().is_none());
    }

    #[test]
    fn find_by_field_is_case_sensitive() {
        let store = InMemoryDocumentStore::new();
        store.insert("rooms", json!({"roomType": "VIP"})).unwrap();
        store.insert("rooms", json!({"roomType": "vip"})).unwrap();
        store.insert("rooms", json!({"roomType": 3})).unwrap();

        let hits = store.find_by_field("rooms", "roomType", "VIP").unwrap();
        assert_eq!(hits.len(), 1);
        assert!(store.find_by_field("empty", "roomType", "VIP").unwrap().is_empty());
    }

    #[test]
    fn failed_mutation_leaves_document_untouched() {
        let store = InMemoryDocumentStore::new();
        let doc = store.insert("leaves", json!({"approval": "Pending"})).unwrap();

        let err = store
            .modify("leaves", doc.id, &mut |_| {
                Err(DomainError::InvalidInput("bad".to_string()))
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(
            store.find_by_id("leaves", doc.id).unwrap().unwrap().body,
            json!({"approval": "Pending"})
        );
    }

    #[test]
    fn modify_missing_document_returns_none() {
        let store = InMemoryDocumentStore::new();
        let result = store
            .modify("leaves", Uuid::new_v4(), &mut |body| Ok(body))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn delete_removes_only_the_target() {
        let store = InMemoryDocumentStore::new();
        let a = store.insert("vouchers", json!({"code": "A"})).unwrap();
        let b = store.insert("vouchers", json!({"code": "B"})).unwrap();

        assert!(store.delete("vouchers", a.id).unwrap());
        assert!(!store.delete("vouchers", a.id).unwrap());
        let left = store.find_all("vouchers").unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, b.id);
    }
}
