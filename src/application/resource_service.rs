use std::marker::PhantomData;

use uuid::Uuid;
use validator::Validate;

use crate::domain::errors::DomainError;
use crate::domain::ports::SharedStore;
use crate::domain::resource::{apply_patch, Acknowledgement, Record, Resource};

/// Generic CRUD over one resource collection.
pub struct ResourceService<T> {
    store: SharedStore,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> ResourceService<T> {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }

    pub fn create(&self, mut data: T) -> Result<Record<T>, DomainError> {
        data.validate()?;
        data.normalize();
        self.ensure_unique(&data, None)?;
        let doc = self.store.insert(T::COLLECTION, serde_json::to_value(&data)?)?;
        log::info!("{} {} created", T::NAME, doc.id);
        Record::from_document(doc)
    }

    pub fn list(&self) -> Result<Vec<Record<T>>, DomainError> {
        self.store
            .find_all(T::COLLECTION)?
            .into_iter()
            .map(Record::from_document)
            .collect()
    }

    pub fn get(&self, id: Uuid) -> Result<Option<Record<T>>, DomainError> {
        self.store
            .find_by_id(T::COLLECTION, id)?
            .map(Record::from_document)
            .transpose()
    }

    /// Records whose top-level string field `field` equals `value`.
    pub fn find_by(&self, field: &str, value: &str) -> Result<Vec<Record<T>>, DomainError> {
        self.store
            .find_by_field(T::COLLECTION, field, value)?
            .into_iter()
            .map(Record::from_document)
            .collect()
    }

    /// Overwrites the fields present in `patch`; the merged record must still validate.
    pub fn update(&self, id: Uuid, patch: T::Patch) -> Result<Acknowledgement, DomainError> {
        patch.validate()?;
        let changes = serde_json::to_value(&patch)?;
        if let Some(current) = self.store.find_by_id(T::COLLECTION, id)? {
            let merged = Self::merged(current.body, &changes)?;
            self.ensure_unique(&merged, Some(id))?;
        }
        let mut merge = |body: serde_json::Value| Self::seal(Self::merged(body, &changes)?);
        self.store
            .modify(T::COLLECTION, id, &mut merge)?
            .ok_or_else(|| DomainError::NotFound(T::NAME.to_string()))?;
        log::info!("{} {} updated", T::NAME, id);
        Ok(Acknowledgement::updated(T::NAME, id))
    }

    /// Applies `change` to the typed record in place and stores the result.
    pub fn modify_with(
        &self,
        id: Uuid,
        mut change: impl FnMut(&mut T),
    ) -> Result<Option<Record<T>>, DomainError> {
        self.try_modify_with(id, |current| {
            change(current);
            Ok(())
        })
    }

    /// Like [`modify_with`](Self::modify_with), but `change` may refuse the
    /// write. The check and the write happen in one atomic store mutation.
    pub fn try_modify_with(
        &self,
        id: Uuid,
        mut change: impl FnMut(&mut T) -> Result<(), DomainError>,
    ) -> Result<Option<Record<T>>, DomainError> {
        let mut apply = |body: serde_json::Value| {
            let mut current: T = serde_json::from_value(body)?;
            change(&mut current)?;
            Self::seal(current)
        };
        self.store
            .modify(T::COLLECTION, id, &mut apply)?
            .map(Record::from_document)
            .transpose()
    }

    pub fn delete(&self, id: Uuid) -> Result<Acknowledgement, DomainError> {
        if !self.store.delete(T::COLLECTION, id)? {
            return Err(DomainError::NotFound(T::NAME.to_string()));
        }
        log::info!("{} {} deleted", T::NAME, id);
        Ok(Acknowledgement::deleted(T::NAME, id))
    }

    fn merged(body: serde_json::Value, changes: &serde_json::Value) -> Result<T, DomainError> {
        serde_json::from_value(apply_patch(body, changes.clone())?)
            .map_err(|e| DomainError::InvalidInput(e.to_string()))
    }

    /// Rejects `data` when another record already holds its unique key.
    fn ensure_unique(&self, data: &T, own_id: Option<Uuid>) -> Result<(), DomainError> {
        let Some((field, value)) = data.unique_key() else {
            return Ok(());
        };
        let taken = self
            .store
            .find_by_field(T::COLLECTION, field, &value)?
            .iter()
            .any(|doc| Some(doc.id) != own_id);
        if taken {
            return Err(DomainError::Conflict(format!(
                "{} with {field} '{value}' already exists",
                T::NAME
            )));
        }
        Ok(())
    }

    fn seal(mut data: T) -> Result<serde_json::Value, DomainError> {
        data.validate()?;
        data.normalize();
        Ok(serde_json::to_value(&data)?)
    }
}
