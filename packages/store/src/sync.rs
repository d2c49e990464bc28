//! # Sync: keeping a page's view in step with its collection
//!
//! The async operations a collection page performs. Each one drives the
//! pure state in [`CollectionView`] and talks to a [`Backend`]:
//!
//! | Operation | Flow |
//! |-----------|------|
//! | [`load`] | `begin_fetch` → `GET /{collection}` → `finish_fetch` |
//! | [`submit`] | `begin_submit` → `POST`/`PUT` → on success [`load`] then close the modal; on failure keep the modal open with its data and raise a notice |
//! | [`delete`] | ask for confirmation → `DELETE` → on success [`load`]; on failure raise a notice |
//!
//! Mutation responses are never merged into the snapshot: a successful
//! mutation is always followed by a full refetch, so the snapshot only ever
//! holds what the backend listed.
//!
//! The view is reached through [`ViewAccess`], which may report that the page
//! owning it has gone away while a request was in flight. Results arriving
//! after that point are dropped and the operation ends with
//! [`SyncError::Detached`].
//!
//! A mutation that went through but whose refetch failed ends with
//! [`SyncError::Refetch`]: the change is on the backend, the snapshot is
//! stale, and the load failure has already raised its notice.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::backend::Backend;
use crate::error::BackendError;
use crate::modal::Mutation;
use crate::models::Record;
use crate::view::{CollectionView, Notice};

/// Access to a page's view from an async task.
pub trait ViewAccess<R: Record> {
    /// Run `f` against the view, or return `None` if the page is gone.
    fn update<T>(&mut self, f: impl FnOnce(&mut CollectionView<R>) -> T) -> Option<T>;
}

impl<R: Record> ViewAccess<R> for CollectionView<R> {
    fn update<T>(&mut self, f: impl FnOnce(&mut CollectionView<R>) -> T) -> Option<T> {
        Some(f(self))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The mutation succeeded; only the refetch after it failed.
    #[error("saved, but reloading failed: {0}")]
    Refetch(BackendError),

    #[error("view is no longer mounted")]
    Detached,
}

impl SyncError {
    /// Whether the backend accepted the mutation despite this error.
    pub fn mutation_applied(&self) -> bool {
        matches!(self, SyncError::Refetch(_))
    }
}

fn detached(collection: &str) -> SyncError {
    debug!(collection, "dropping result for unmounted view");
    SyncError::Detached
}

/// Result of the refetch following a successful mutation.
fn after_refetch(refreshed: Result<(), SyncError>) -> Result<bool, SyncError> {
    match refreshed {
        Ok(()) => Ok(true),
        Err(SyncError::Backend(err)) => Err(SyncError::Refetch(err)),
        Err(other) => Err(other),
    }
}

/// Fetch the whole collection and replace the snapshot.
pub async fn load<R, V, B>(view: &mut V, backend: &B) -> Result<(), SyncError>
where
    R: Record,
    V: ViewAccess<R>,
    B: Backend,
{
    let ticket = view
        .update(CollectionView::begin_fetch)
        .ok_or_else(|| detached(R::COLLECTION))?;

    let result = backend.list::<R>().await;
    let failure = result.as_ref().err().cloned();
    match &result {
        Ok(records) => debug!(collection = R::COLLECTION, count = records.len(), "fetched"),
        Err(err) => warn!(collection = R::COLLECTION, error = %err, "fetch failed"),
    }

    let applied = view
        .update(|v| v.finish_fetch(ticket, result))
        .ok_or_else(|| detached(R::COLLECTION))?;
    if !applied {
        debug!(collection = R::COLLECTION, "fetch superseded by a newer one");
    }

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Send a mutation to the backend.
pub async fn apply_mutation<R, B>(backend: &B, mutation: &Mutation<R>) -> Result<R, BackendError>
where
    R: Record,
    B: Backend,
{
    match mutation {
        Mutation::Create(record) => backend.create(record).await,
        Mutation::Update { id, record } => backend.update(id, record).await,
    }
}

/// Submit the open add/edit form.
///
/// Returns `Ok(false)` when there was nothing to submit (no form open, or a
/// submission already in flight).
pub async fn submit<R, V, B>(view: &mut V, backend: &B) -> Result<bool, SyncError>
where
    R: Record,
    V: ViewAccess<R>,
    B: Backend,
{
    let mutation = view
        .update(|v| v.modal.begin_submit())
        .ok_or_else(|| detached(R::COLLECTION))?;
    let Some(mutation) = mutation else {
        return Ok(false);
    };
    let verb = mutation.verb();

    match apply_mutation(backend, &mutation).await {
        Ok(saved) => {
            info!(collection = R::COLLECTION, id = saved.id(), verb, "saved");
            let refreshed = load(view, backend).await;
            view.update(|v| {
                v.modal.submit_succeeded();
                if refreshed.is_ok() {
                    v.notify(Notice::success(
                        format!("{} saved", capitalize(R::LABEL)),
                        format!("The {} was {verb}d.", R::LABEL),
                    ));
                }
            })
            .ok_or_else(|| detached(R::COLLECTION))?;
            after_refetch(refreshed)
        }
        Err(err) => {
            warn!(collection = R::COLLECTION, verb, error = %err, "save failed");
            let action = format!("{verb} {}", R::LABEL);
            view.update(|v| {
                v.modal.submit_failed(err.clone());
                v.notify(Notice::from_error(&action, &err));
            })
            .ok_or_else(|| detached(R::COLLECTION))?;
            Err(err.into())
        }
    }
}

/// Confirmation prompt shown before deleting.
pub fn delete_prompt<R: Record>() -> String {
    format!("Are you sure you want to delete this {}?", R::LABEL)
}

/// Delete a record after `confirm` agrees, then refetch.
///
/// Returns `Ok(false)` when the user declined; no request is made then.
pub async fn delete<R, V, B>(
    view: &mut V,
    backend: &B,
    id: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<bool, SyncError>
where
    R: Record,
    V: ViewAccess<R>,
    B: Backend,
{
    if !confirm(&delete_prompt::<R>()) {
        debug!(collection = R::COLLECTION, id, "delete declined");
        return Ok(false);
    }

    match backend.delete::<R>(id).await {
        Ok(()) => {
            info!(collection = R::COLLECTION, id, "deleted");
            let refreshed = load(view, backend).await;
            if refreshed.is_ok() {
                view.update(|v| {
                    v.notify(Notice::success(
                        format!("{} deleted", capitalize(R::LABEL)),
                        format!("The {} was removed.", R::LABEL),
                    ))
                })
                .ok_or_else(|| detached(R::COLLECTION))?;
            }
            after_refetch(refreshed)
        }
        Err(err) => {
            warn!(collection = R::COLLECTION, id, error = %err, "delete failed");
            let action = format!("delete {} {id}", R::LABEL);
            view.update(|v| v.notify(Notice::from_error(&action, &err)))
                .ok_or_else(|| detached(R::COLLECTION))?;
            Err(err.into())
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
