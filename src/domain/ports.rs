use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::errors::DomainError;

/// A stored JSON document belonging to one collection.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub body: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read-modify-write callback handed to [`DocumentStore::modify`].
pub type Mutation<'a> = &'a mut dyn FnMut(Value) -> Result<Value, DomainError>;

/// Schemaless document storage, one collection per resource noun.
///
/// Every operation touches a single collection; nothing spans documents.
pub trait DocumentStore: Send + Sync + 'static {
    fn insert(&self, collection: &str, body: Value) -> Result<Document, DomainError>;

    /// All documents of the collection, oldest first.
    fn find_all(&self, collection: &str) -> Result<Vec<Document>, DomainError>;

    fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Document>, DomainError>;

    /// Documents whose top-level string `field` equals `value` exactly.
    fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>, DomainError>;

    /// Replaces the body of one document with `mutate(old_body)`.
    ///
    /// Runs atomically with respect to other `modify` calls on the same document.
    /// Returns `Ok(None)` when the document does not exist; an error from `mutate`
    /// leaves the document untouched.
    fn modify(
        &self,
        collection: &str,
        id: Uuid,
        mutate: Mutation<'_>,
    ) -> Result<Option<Document>, DomainError>;

    /// Returns whether a document was removed.
    fn delete(&self, collection: &str, id: Uuid) -> Result<bool, DomainError>;
}

pub type SharedStore = Arc<dyn DocumentStore>;
