//! Glue between a page component's signals and the [`store::sync`] operations.

use api::RestBackend;
use dioxus::prelude::*;
use store::sync::{self, SyncError};
use store::{CollectionView, Record, ViewAccess};

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

/// Backend handle shared by every page.
pub fn use_backend() -> Signal<RestBackend> {
    use_context::<Signal<RestBackend>>()
}

/// Provides the REST backend, configured from the environment, to its children.
#[component]
pub fn BackendProvider(children: Element) -> Element {
    let backend = use_signal(|| {
        let backend = RestBackend::from_env();
        tracing::info!(base_url = backend.base_url(), "using backend");
        backend
    });
    use_context_provider(|| backend);

    rsx! {
        {children}
    }
}

/// A page's view signal as seen from async tasks.
///
/// Once the page unmounts its signal is dropped and every access reports
/// the view as gone.
struct SignalView<R: 'static>(Signal<CollectionView<R>>);

impl<R: Record> ViewAccess<R> for SignalView<R> {
    fn update<T>(&mut self, f: impl FnOnce(&mut CollectionView<R>) -> T) -> Option<T> {
        match self.0.try_write() {
            Ok(mut view) => Some(f(&mut view)),
            Err(_) => None,
        }
    }
}

/// Everything a collection page needs from handlers and tasks.
///
/// Tasks are spawned in the calling component's scope, so they stop when the
/// page unmounts.
pub struct CollectionPage<R: 'static> {
    pub view: Signal<CollectionView<R>>,
    backend: Signal<RestBackend>,
    log: Signal<ActivityLog>,
}

impl<R: 'static> Clone for CollectionPage<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for CollectionPage<R> {}

/// Create the page's view and fetch the collection on mount.
pub fn use_collection_page<R: Record>() -> CollectionPage<R> {
    let page = CollectionPage {
        view: use_signal(CollectionView::<R>::new),
        backend: use_backend(),
        log: use_activity_log(),
    };

    let _loader = use_resource(move || async move {
        page.reload().await;
    });

    page
}

impl<R: Record> CollectionPage<R> {
    /// Refetch the whole collection.
    pub async fn reload(self) {
        let backend = self.backend.peek().clone();
        let result = sync::load(&mut SignalView(self.view), &backend).await;
        self.report(&format!("Load {}", R::COLLECTION), result.map(|()| true));
    }

    pub fn open_add(self) {
        let mut view = self.view;
        view.write().modal.open_draft();
    }

    pub fn open_edit(self, record: R) {
        let mut view = self.view;
        view.write().modal.open_edit(&record);
    }

    /// Replace the working copy with what the form holds now.
    pub fn set_working(self, record: R) {
        let mut view = self.view;
        if let Some(working) = view.write().modal.working_mut() {
            *working = record;
        };
    }

    pub fn cancel(self) {
        let mut view = self.view;
        view.write().modal.cancel();
    }

    pub fn set_query(self, query: String) {
        let mut view = self.view;
        view.write().query = query;
    }

    pub fn dismiss_notice(self) {
        let mut view = self.view;
        view.write().dismiss_notice();
    }

    /// Send the open form, refetch on success.
    pub fn submit(self) {
        spawn(async move {
            let backend = self.backend.peek().clone();
            let result = sync::submit(&mut SignalView(self.view), &backend).await;
            self.report(&format!("Save {}", R::LABEL), result);
        });
    }

    /// Ask for confirmation, then delete `id` and refetch.
    pub fn delete(self, id: String) {
        spawn(async move {
            let backend = self.backend.peek().clone();
            let result =
                sync::delete(&mut SignalView(self.view), &backend, &id, crate::confirm).await;
            self.report(&format!("Delete {} {id}", R::LABEL), result);
        });
    }

    fn report(self, action: &str, result: Result<bool, SyncError>) {
        let mut log = self.log;
        match result {
            Ok(true) => log_activity(&mut log, LogLevel::Success, action),
            Ok(false) => {}
            Err(SyncError::Detached) => {
                tracing::debug!(action, "page closed before the request finished");
                log_activity(&mut log, LogLevel::Warning, &format!("{action}: page closed"));
            }
            Err(SyncError::Refetch(err)) => {
                log_activity(&mut log, LogLevel::Success, action);
                tracing::error!(collection = R::COLLECTION, error = %err, "reload after change failed");
                log_activity(
                    &mut log,
                    LogLevel::Error,
                    &format!("Load {}: {err}", R::COLLECTION),
                );
            }
            Err(SyncError::Backend(err)) => {
                tracing::error!(action, error = %err, "backend call failed");
                log_activity(&mut log, LogLevel::Error, &format!("{action}: {err}"));
            }
        }
    }
}
