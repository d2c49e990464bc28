//! # Backend: the REST collection contract
//!
//! Every page talks to its collection through the [`Backend`] trait, so the
//! same synchronisation logic runs against the HTTP client in the `api`
//! crate, the in-memory [`crate::MemoryBackend`] used in tests, or any other
//! implementation.
//!
//! | Operation | Method | Path | Request body | Response |
//! |-----------|--------|------|--------------|----------|
//! | [`list`](Backend::list) | GET | `/{collection}` | - | array of record |
//! | [`create`](Backend::create) | POST | `/{collection}` | record without identifier | created record |
//! | [`update`](Backend::update) | PUT | `/{collection}/{id}` | full record | updated record |
//! | [`delete`](Backend::delete) | DELETE | `/{collection}/{id}` | - | - |
//!
//! The returned futures carry no `Send` bound: the browser build runs them on
//! a single-threaded executor.

use crate::error::BackendError;
use crate::models::Record;

/// Async access to the backend's collections.
pub trait Backend {
    fn list<R: Record>(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<R>, BackendError>>;
    fn create<R: Record>(
        &self,
        record: &R,
    ) -> impl std::future::Future<Output = Result<R, BackendError>>;
    fn update<R: Record>(
        &self,
        id: &str,
        record: &R,
    ) -> impl std::future::Future<Output = Result<R, BackendError>>;
    fn delete<R: Record>(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), BackendError>>;
}
