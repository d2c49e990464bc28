use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::backend::Backend;
use crate::error::BackendError;
use crate::models::Record;

/// In-memory Backend for testing and offline demos.
///
/// Records are kept as JSON per collection, in insertion order, and get
/// sequential string ids. Every call is recorded so tests can assert which
/// requests were (or were not) issued.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<String, Vec<Value>>,
    last_id: u64,
    failures: VecDeque<BackendError>,
    targeted: Vec<(String, BackendError)>,
    calls: Vec<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next created record gets id `next`.
    pub fn with_next_id(self, next: u64) -> Self {
        self.lock().last_id = next.saturating_sub(1);
        self
    }

    /// Store a record as-is, assigning an id only if it has none.
    pub fn seed<R: Record>(&self, record: &R) -> R {
        let mut inner = self.lock();
        let mut value = serde_json::to_value(record).unwrap_or(Value::Null);
        if record.is_draft() {
            let id = inner.assign_id();
            set_id(&mut value, &id);
        }
        inner
            .collections
            .entry(R::COLLECTION.to_string())
            .or_default()
            .push(value.clone());
        serde_json::from_value(value).unwrap_or_else(|_| record.clone())
    }

    /// Make the next call fail with `error` instead of touching any data.
    pub fn fail_next(&self, error: BackendError) {
        self.lock().failures.push_back(error);
    }

    /// Make the next `method` request (`"GET"`, `"POST"`, ...) fail with
    /// `error`, letting other requests through.
    pub fn fail_next_on(&self, method: &str, error: BackendError) {
        self.lock().targeted.push((method.to_string(), error));
    }

    /// Requests issued so far, e.g. `"PUT /products/1"`.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn begin(&mut self, call: String) -> Result<(), BackendError> {
        let method = call.split(' ').next().unwrap_or_default().to_string();
        self.calls.push(call);
        if let Some(pos) = self.targeted.iter().position(|(m, _)| *m == method) {
            return Err(self.targeted.remove(pos).1);
        }
        match self.failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn assign_id(&mut self) -> String {
        self.last_id += 1;
        self.last_id.to_string()
    }

    fn position(&self, collection: &str, id: &str) -> Option<usize> {
        self.collections
            .get(collection)?
            .iter()
            .position(|v| v.get("id").and_then(Value::as_str) == Some(id))
    }
}

fn set_id(value: &mut Value, id: &str) {
    if let Value::Object(map) = value {
        map.insert("id".to_string(), Value::String(id.to_string()));
    }
}

fn encode<R: Record>(record: &R) -> Result<Value, BackendError> {
    serde_json::to_value(record).map_err(|e| BackendError::validation(400, e.to_string()))
}

fn decode<R: Record>(value: Value) -> Result<R, BackendError> {
    serde_json::from_value(value).map_err(|e| BackendError::undecodable(200, e))
}

fn not_found(collection: &str, id: &str) -> BackendError {
    BackendError::validation(404, format!("{collection}/{id} not found"))
}

impl Backend for MemoryBackend {
    async fn list<R: Record>(&self) -> Result<Vec<R>, BackendError> {
        let mut inner = self.lock();
        inner.begin(format!("GET /{}", R::COLLECTION))?;
        let values = inner
            .collections
            .get(R::COLLECTION)
            .cloned()
            .unwrap_or_default();
        values.into_iter().map(decode::<R>).collect()
    }

    async fn create<R: Record>(&self, record: &R) -> Result<R, BackendError> {
        let mut inner = self.lock();
        inner.begin(format!("POST /{}", R::COLLECTION))?;
        let mut value = encode(record)?;
        let id = inner.assign_id();
        set_id(&mut value, &id);
        inner
            .collections
            .entry(R::COLLECTION.to_string())
            .or_default()
            .push(value.clone());
        decode(value)
    }

    async fn update<R: Record>(&self, id: &str, record: &R) -> Result<R, BackendError> {
        let mut inner = self.lock();
        inner.begin(format!("PUT /{}/{}", R::COLLECTION, id))?;
        let index = inner
            .position(R::COLLECTION, id)
            .ok_or_else(|| not_found(R::COLLECTION, id))?;
        let mut value = encode(record)?;
        set_id(&mut value, id);
        if let Some(records) = inner.collections.get_mut(R::COLLECTION) {
            records[index] = value.clone();
        }
        decode(value)
    }

    async fn delete<R: Record>(&self, id: &str) -> Result<(), BackendError> {
        let mut inner = self.lock();
        inner.begin(format!("DELETE /{}/{}", R::COLLECTION, id))?;
        let index = inner
            .position(R::COLLECTION, id)
            .ok_or_else(|| not_found(R::COLLECTION, id))?;
        if let Some(records) = inner.collections.get_mut(R::COLLECTION) {
            records.remove(index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, User};

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let backend = MemoryBackend::new();

        let first = backend.create(&Product::new("Widget", 9.99)).await.unwrap();
        let second = backend.create(&Product::new("Gadget", 19.99)).await.unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");

        let listed = backend.list::<Product>().await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn test_collections_are_independent() {
        let backend = MemoryBackend::new();
        backend.create(&Product::new("Widget", 1.0)).await.unwrap();

        let users = backend.list::<User>().await.unwrap();
        assert!(users.is_empty());
        assert_eq!(backend.list::<Product>().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_record_and_keeps_id() {
        let backend = MemoryBackend::new();
        let created = backend.create(&Product::new("Widget", 1.0)).await.unwrap();

        let mut edited = created.clone();
        edited.title = "Sprocket".to_string();
        let updated = backend.update(&created.id, &edited).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Sprocket");

        let listed = backend.list::<Product>().await.unwrap();
        assert_eq!(listed, vec![updated]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let backend = MemoryBackend::new();
        let err = backend.delete::<Product>("99").await.unwrap_err();
        assert_eq!(err.status(), Some(404));

        let err = backend
            .update("99", &Product::new("x", 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Validation { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let backend = MemoryBackend::new();
        let a = backend.create(&Product::new("A", 1.0)).await.unwrap();
        let b = backend.create(&Product::new("B", 2.0)).await.unwrap();

        backend.delete::<Product>(&a.id).await.unwrap();

        let listed = backend.list::<Product>().await.unwrap();
        assert_eq!(listed, vec![b]);
    }

    #[tokio::test]
    async fn test_fail_next_injects_one_failure() {
        let backend = MemoryBackend::new();
        backend.fail_next(BackendError::network("offline"));

        assert_eq!(
            backend.list::<Product>().await.unwrap_err(),
            BackendError::network("offline")
        );
        assert!(backend.list::<Product>().await.is_ok());
    }

    #[tokio::test]
    async fn test_fail_next_on_skips_other_methods() {
        let backend = MemoryBackend::new();
        backend.fail_next_on("GET", BackendError::server(503, "down"));

        let created = backend.create(&Product::new("New", 5.0)).await.unwrap();
        assert_eq!(created.id, "1");
        assert_eq!(
            backend.list::<Product>().await.unwrap_err(),
            BackendError::server(503, "down")
        );
        assert_eq!(backend.list::<Product>().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_seed_and_call_log() {
        let backend = MemoryBackend::new().with_next_id(3);
        let seeded = backend.seed(&Product {
            id: "abc".to_string(),
            title: "Kept".to_string(),
            price: 2.0,
        });
        assert_eq!(seeded.id, "abc");
        assert_eq!(backend.seed(&Product::new("Fresh", 1.0)).id, "3");
        assert!(backend.calls().is_empty());

        backend.list::<Product>().await.unwrap();
        backend.delete::<Product>("abc").await.unwrap();
        assert_eq!(backend.calls(), vec!["GET /products", "DELETE /products/abc"]);
    }
}
